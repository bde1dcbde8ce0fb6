mod cafe;

pub use cafe::{Cafe, FIELD_COUNT};
