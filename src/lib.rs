pub mod columns;
pub mod daily;
pub mod error;
pub mod job;
pub mod output;
pub mod parser;
pub mod stats;
pub mod storage;
pub mod timestamp;

pub use error::PrepError;
