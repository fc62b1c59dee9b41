use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Failed to read input file '{0}'")]
    InputRead(PathBuf, #[source] std::io::Error),

    #[error("Malformed CSV input")]
    InputCsv(#[from] csv::Error),

    #[error("Row on line {line} has {found} fields, but the header has {expected}")]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Required column '{0}' not found in input header")]
    MissingColumn(&'static str),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write output file '{0}'")]
    OutputWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode daily table as CSV")]
    OutputEncode(#[source] csv::Error),
}
