//! Calendar conversion: date parsing, event assembly and iCalendar output.

mod calendar_import;
mod document;
mod ics_format;
mod temporal;

pub use calendar_import::*;
pub use document::*;
pub use ics_format::*;
pub use temporal::*;

/// Errors that end a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row}: {error}")]
    Date { row: usize, error: DateParseError },
}
