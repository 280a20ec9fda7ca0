use crate::notifier::{DeliveryError, WebhookMessage};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Hands a finished message to the messaging sink.
pub trait WebhookTransport {
    fn deliver(&self, url: &str, message: &WebhookMessage) -> Result<(), DeliveryError>;
}

impl<T: WebhookTransport + ?Sized> WebhookTransport for &T {
    fn deliver(&self, url: &str, message: &WebhookMessage) -> Result<(), DeliveryError> {
        (**self).deliver(url, message)
    }
}

/// Posts messages as JSON over HTTP.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        Ok(Self { client })
    }
}

impl WebhookTransport for HttpTransport {
    fn deliver(&self, url: &str, message: &WebhookMessage) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = resp.status();
        if let Err(e) = check_status(status) {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            log::debug!("Webhook rejected with {status}: {body}");
            return Err(e);
        }

        log::debug!("Webhook accepted with {status}");
        Ok(())
    }
}

/// Only 200 and 204 count as delivered; any other code, even another 2xx, is a rejection.
pub(crate) fn check_status(status: StatusCode) -> Result<(), DeliveryError> {
    match status {
        StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
        other => Err(DeliveryError::Rejected {
            status: other.to_string(),
        }),
    }
}
