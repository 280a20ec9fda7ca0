// errors.rs
use crate::config::ConfigError;
use crate::domain::SchemaMismatch;
use crate::fetcher::FetchError;
use crate::notifier::DeliveryError;
use crate::store::StoreError;
use std::fmt;

/// Anything that ends a poll cycle early.
#[derive(Debug)]
pub enum TrackerError {
    Config(ConfigError),
    Fetch(FetchError),
    Store(StoreError),
    /// An HTTP client could not be built; nothing was fetched or sent.
    Setup(String),
    SchemaMismatch(SchemaMismatch),
    /// Every failed delivery of the batch, in the order they happened.
    Delivery(Vec<DeliveryError>),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Config(e) => write!(f, "Error loading config: {e}"),
            TrackerError::Fetch(e) => write!(f, "Error fetching modification: {e}"),
            TrackerError::Store(e) => write!(f, "Error saving baseline: {e}"),
            TrackerError::Setup(msg) => write!(f, "Error setting up {msg}"),
            TrackerError::SchemaMismatch(e) => write!(
                f,
                "{e} (delete the baseline file to start tracking from the current state)"
            ),
            TrackerError::Delivery(errors) => {
                write!(f, "Error sending webhook")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TrackerError {}

impl TrackerError {
    /// A collaborator named `what` failed to initialise.
    pub fn setup(what: &str, e: impl fmt::Display) -> Self {
        TrackerError::Setup(format!("{what}: {e}"))
    }
}

impl From<ConfigError> for TrackerError {
    fn from(e: ConfigError) -> Self {
        TrackerError::Config(e)
    }
}

impl From<FetchError> for TrackerError {
    fn from(e: FetchError) -> Self {
        TrackerError::Fetch(e)
    }
}

impl From<StoreError> for TrackerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Schema(mismatch) => TrackerError::SchemaMismatch(mismatch),
            other => TrackerError::Store(other),
        }
    }
}

impl From<SchemaMismatch> for TrackerError {
    fn from(e: SchemaMismatch) -> Self {
        TrackerError::SchemaMismatch(e)
    }
}

impl From<Vec<DeliveryError>> for TrackerError {
    fn from(errors: Vec<DeliveryError>) -> Self {
        TrackerError::Delivery(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_errors_are_listed_together() {
        let err = TrackerError::Delivery(vec![
            DeliveryError::Rejected {
                status: "500 Internal Server Error".to_string(),
            },
            DeliveryError::Request("timed out".to_string()),
        ]);
        assert_eq!(
            err.to_string(),
            "Error sending webhook: Webhook returned 500 Internal Server Error; Webhook request failed: timed out"
        );
    }

    #[test]
    fn client_setup_failure_is_not_a_delivery_error() {
        let err = TrackerError::setup(
            "webhook client",
            DeliveryError::Request("no TLS backend".to_string()),
        );
        assert!(matches!(err, TrackerError::Setup(_)));
        assert_eq!(
            err.to_string(),
            "Error setting up webhook client: Webhook request failed: no TLS backend"
        );
    }

    #[test]
    fn baseline_schema_problem_becomes_schema_mismatch() {
        let mismatch = SchemaMismatch {
            position: 3,
            expected: Some("Featured"),
            found: None,
        };
        let err: TrackerError = StoreError::Schema(mismatch.clone()).into();
        assert!(matches!(err, TrackerError::SchemaMismatch(m) if m == mismatch));
    }
}
