use crate::domain::SchemaMismatch;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// No baseline has been written yet.
    NotFound,
    Io(String),
    Decode(String),
    Schema(SchemaMismatch),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "No baseline found"),
            StoreError::Io(msg) => write!(f, "Baseline I/O error: {msg}"),
            StoreError::Decode(msg) => write!(f, "Baseline decode error: {msg}"),
            StoreError::Schema(mismatch) => write!(f, "Baseline does not match schema: {mismatch}"),
        }
    }
}

impl Error for StoreError {}
