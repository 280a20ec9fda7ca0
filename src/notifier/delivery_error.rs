use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryError {
    /// The request never got an answer (connect, TLS, timeout, ...).
    Request(String),
    /// The sink answered with something other than 200 or 204.
    Rejected { status: String },
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::Request(msg) => write!(f, "Webhook request failed: {msg}"),
            DeliveryError::Rejected { status } => write!(f, "Webhook returned {status}"),
        }
    }
}

impl Error for DeliveryError {}
