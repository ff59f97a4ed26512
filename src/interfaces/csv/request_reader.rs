use crate::domain::decision::LoanRequest;
use crate::error::{DecisionError, Result};
use std::io::Read;

/// Reads loan requests from a CSV source with a
/// `personal_code, loan_amount, loan_period` header.
///
/// Whitespace around fields is trimmed and rows may carry extra columns.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one request per row; a bad row yields an error
    /// without ending the stream.
    pub fn requests(self) -> impl Iterator<Item = Result<LoanRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DecisionError::from))
    }
}
