use super::fields::assemble_fields;
use super::types::{Cafe, FIELD_COUNT};
use std::error::Error;

/// Streams `Cafe` records out of a comma-delimited dataset. The underlying
/// csv reader runs with quoting disabled and flexible record lengths, so it
/// only frames lines, drops the header, and splits on commas; the dataset's
/// own quoted-span rule is applied on the raw tokens afterwards.
pub struct DatasetReader<R: std::io::Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl DatasetReader<std::fs::File> {
    pub fn from_path(path: &str) -> Result<Self, Box<dyn Error>> {
        let file = std::fs::File::open(path)
            .map_err(|err| format!("cannot open dataset file {}: {}", path, err))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: std::io::Read> DatasetReader<R> {
    pub fn from_reader(input: R) -> Self {
        Self {
            records: csv::ReaderBuilder::new()
                .has_headers(true)
                .quoting(false)
                .flexible(true)
                .from_reader(input)
                .into_records(),
        }
    }
}

impl<R: std::io::Read> Iterator for DatasetReader<R> {
    type Item = Result<Cafe, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|result| match result {
            Ok(record) => {
                let line = record.position().map_or(0, |position| position.line());
                let fields = assemble_fields(record.iter());

                match <[String; FIELD_COUNT]>::try_from(fields) {
                    Ok(fields) => Ok(Cafe::from(fields)),
                    Err(fields) => Err(ReadError::MalformedLine {
                        line,
                        found: fields.len(),
                    }),
                }
            }
            Err(err) => Err(ReadError::Csv(err)),
        })
    }
}

/// Collects the query list: one query per line, in input order, up to end of
/// stream. Line terminators are stripped but the content is not trimmed.
pub fn read_queries<R: std::io::BufRead>(input: R) -> std::io::Result<Vec<String>> {
    input.lines().collect()
}

#[derive(Debug)]
pub enum ReadError {
    Csv(csv::Error),
    /// A data line whose field count after tokenization is not 14. The line
    /// number is 1-based and counts the header.
    MalformedLine {
        line: u64,
        found: usize,
    },
}

impl ReadError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedLine { .. })
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{}", err),
            Self::MalformedLine { line, found } => {
                write!(
                    f,
                    "line {}: expected {} fields, found {}",
                    line, FIELD_COUNT, found
                )
            }
        }
    }
}

impl Error for ReadError {}
