use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    InvalidUrl(String),
    Status(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::InvalidUrl(msg) => write!(f, "Invalid store API URL: {msg}"),
            FetchError::Status(status) => write!(f, "Store API returned {status}"),
            FetchError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl Error for FetchError {}
