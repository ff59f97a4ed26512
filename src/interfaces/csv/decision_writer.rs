use crate::domain::decision::Decision;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct DecisionRow<'a> {
    personal_code: &'a str,
    approved_amount: Option<u32>,
    approved_period: Option<u32>,
    error_message: Option<&'a str>,
}

/// Writes decisions as `personal_code,approved_amount,approved_period,error_message`
/// rows. Absent fields are written as empty cells.
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_decision(&mut self, personal_code: &str, decision: &Decision) -> Result<()> {
        self.writer.serialize(DecisionRow {
            personal_code,
            approved_amount: decision.approved_amount(),
            approved_period: decision.approved_period(),
            error_message: decision.error_message(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
