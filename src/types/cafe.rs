/// Number of fields on every well-formed data line, in the fixed order
/// matched by `From<[String; FIELD_COUNT]>` below.
pub const FIELD_COUNT: usize = 14;

/// One establishment entry. Text fields own their content; an empty string
/// is valid content.
#[derive(Debug, Clone, PartialEq)]
pub struct Cafe {
    pub census_year: i32,
    pub block_id: i32,
    pub property_id: i32,
    pub base_property_id: i32,
    pub building_address: String,
    pub clue_small_area: String,
    pub business_area: String,
    pub trading_name: String,
    pub industry_code: i32,
    pub industry_description: String,
    pub seating_type: String,
    pub number_of_seats: i32,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<[String; FIELD_COUNT]> for Cafe {
    fn from(fields: [String; FIELD_COUNT]) -> Self {
        let [census_year, block_id, property_id, base_property_id, building_address, clue_small_area, business_area, trading_name, industry_code, industry_description, seating_type, number_of_seats, longitude, latitude] =
            fields;

        Self {
            census_year: coerce_int(&census_year),
            block_id: coerce_int(&block_id),
            property_id: coerce_int(&property_id),
            base_property_id: coerce_int(&base_property_id),
            building_address,
            clue_small_area,
            business_area,
            trading_name,
            industry_code: coerce_int(&industry_code),
            industry_description,
            seating_type,
            number_of_seats: coerce_int(&number_of_seats),
            longitude: coerce_float(&longitude),
            latitude: coerce_float(&latitude),
        }
    }
}

impl std::fmt::Display for Cafe {
    /// The full detail line for one record. The spacing is uneven on purpose
    /// (no space after the `property_id` value) and floats carry six decimal
    /// places; both match the established output format byte for byte.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "--> census_year: {} || block_id: {} || property_id: {}\
             || base_property_id: {} || building_address: {} || clue_small_area: {} || \
             business_address: {} || trading_name: {} || industry_code: {} || \
             industry_description: {} || seating_type: {} || number_of_seats: {} || \
             longitude: {:.6} || latitude: {:.6} ||",
            self.census_year,
            self.block_id,
            self.property_id,
            self.base_property_id,
            self.building_address,
            self.clue_small_area,
            self.business_area,
            self.trading_name,
            self.industry_code,
            self.industry_description,
            self.seating_type,
            self.number_of_seats,
            self.longitude,
            self.latitude
        )
    }
}

/// Integer coercion with `atoi` semantics: skip leading whitespace, take an
/// optional sign and the longest run of digits, and yield 0 for anything
/// that doesn't start a number. Never fails.
fn coerce_int(field: &str) -> i32 {
    let trimmed = field.trim_start();
    let (sign, rest) = split_sign(trimmed);

    let digits = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    digits.parse::<i32>().map_or(0, |value| sign * value)
}

/// Float coercion with `atof` semantics: optional sign, then the longest
/// `digits[.digits]` prefix; anything else yields 0.0. Never fails.
fn coerce_float(field: &str) -> f64 {
    let trimmed = field.trim_start();
    let (sign, rest) = split_sign(trimmed);

    let mut end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if rest[end..].starts_with('.') {
        end += 1;
        end += rest[end..].bytes().take_while(u8::is_ascii_digit).count();
    }

    rest[..end].parse::<f64>().map_or(0.0, |value| f64::from(sign) * value)
}

fn split_sign(s: &str) -> (i32, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_float, coerce_int, Cafe, FIELD_COUNT};

    fn fields(raw: [&str; FIELD_COUNT]) -> [String; FIELD_COUNT] {
        raw.map(String::from)
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int("2020"), 2020);
        assert_eq!(coerce_int("  42"), 42);
        assert_eq!(coerce_int("-7"), -7);
        assert_eq!(coerce_int("+9"), 9);
        assert_eq!(coerce_int("12abc"), 12);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("12.9"), 12);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float("144.96"), 144.96);
        assert_eq!(coerce_float("-37.81"), -37.81);
        assert_eq!(coerce_float("12.5abc"), 12.5);
        assert_eq!(coerce_float("12"), 12.0);
        assert_eq!(coerce_float(".5"), 0.5);
        assert_eq!(coerce_float("abc"), 0.0);
        assert_eq!(coerce_float(""), 0.0);
        assert_eq!(coerce_float("."), 0.0);
    }

    #[test]
    fn test_positional_build() {
        let cafe = Cafe::from(fields([
            "2020",
            "510",
            "103342",
            "103342",
            "3 Example St",
            "Melbourne (CBD)",
            "Ground floor",
            "Cafe A",
            "4511",
            "Cafes and Restaurants",
            "Seats - Indoor",
            "40",
            "144.968492",
            "-37.812234",
        ]));

        assert_eq!(cafe.census_year, 2020);
        assert_eq!(cafe.base_property_id, 103342);
        assert_eq!(cafe.trading_name, "Cafe A");
        assert_eq!(cafe.number_of_seats, 40);
        assert_eq!(cafe.longitude, 144.968492);
        assert_eq!(cafe.latitude, -37.812234);
    }

    #[test]
    fn test_malformed_numerics_zeroed() {
        let cafe = Cafe::from(fields([
            "", "x", "?", "-", "addr", "area", "biz", "Cafe A", "n/a", "desc", "Indoor", "",
            "east", "",
        ]));

        assert_eq!(cafe.census_year, 0);
        assert_eq!(cafe.block_id, 0);
        assert_eq!(cafe.property_id, 0);
        assert_eq!(cafe.base_property_id, 0);
        assert_eq!(cafe.industry_code, 0);
        assert_eq!(cafe.number_of_seats, 0);
        assert_eq!(cafe.longitude, 0.0);
        assert_eq!(cafe.latitude, 0.0);
    }

    #[test]
    fn test_detail_line_format() {
        let cafe = Cafe::from(fields([
            "2020",
            "510",
            "103342",
            "103342",
            "3 Example St",
            "Melbourne (CBD)",
            "Ground floor",
            "Cafe A",
            "4511",
            "Cafes and Restaurants",
            "Seats - Indoor",
            "40",
            "144.968492",
            "-37.812234",
        ]));

        assert_eq!(
            cafe.to_string(),
            "--> census_year: 2020 || block_id: 510 || property_id: 103342\
             || base_property_id: 103342 || building_address: 3 Example St || \
             clue_small_area: Melbourne (CBD) || business_address: Ground floor || \
             trading_name: Cafe A || industry_code: 4511 || \
             industry_description: Cafes and Restaurants || seating_type: Seats - Indoor || \
             number_of_seats: 40 || longitude: 144.968492 || latitude: -37.812234 ||"
        );
    }
}
