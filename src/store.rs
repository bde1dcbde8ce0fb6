use super::types::Cafe;

/// The in-memory collection of establishment records: append-only, insertion
/// order preserved, write-once-then-read-many for the run's duration.
#[derive(Default)]
pub struct CafeList {
    cafes: Vec<Cafe>,
}

impl CafeList {
    pub fn append(&mut self, cafe: Cafe) {
        self.cafes.push(cafe);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cafe> {
        self.cafes.iter()
    }

    /// Answers each query in order with a linear scan of the collection.
    ///
    /// Per query, `results` receives the raw query string on its own line
    /// followed by one detail line per record whose trading name is exactly
    /// equal, in collection order. `summary` receives one tally line:
    /// `<query> --> NOT FOUND` on zero matches, `<query> --> <count>`
    /// otherwise.
    pub fn search<W, S>(
        &self,
        queries: &[String],
        results: &mut W,
        summary: &mut S,
    ) -> Result<(), std::io::Error>
    where
        W: std::io::Write,
        S: std::io::Write,
    {
        for query in queries {
            writeln!(results, "{}", query)?;

            let mut tally = 0;
            for cafe in self.iter() {
                if cafe.trading_name == *query {
                    writeln!(results, "{}", cafe)?;
                    tally += 1;
                }
            }

            if tally == 0 {
                writeln!(summary, "{} --> NOT FOUND", query)?;
            } else {
                writeln!(summary, "{} --> {}", query, tally)?;
            }
        }

        Ok(())
    }
}
