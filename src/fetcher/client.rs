// client.rs
use crate::domain::Modification;
use crate::fetcher::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("modification_tracker/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the current record of a modification.
pub trait SnapshotSource {
    fn fetch(&self, subject: &str) -> Result<Modification, FetchError>;
}

/// Reads modifications from the FlintMC client-store API.
pub struct FlintClient {
    client: Client,
    api_base_url: Url,
}

impl FlintClient {
    pub fn new(api_base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let api_base_url =
            Url::parse(api_base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if api_base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(format!(
                "{api_base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_base_url,
        })
    }

    /// The subject always ends up as a single escaped path segment.
    pub fn modification_url(&self, subject: &str) -> Result<Url, FetchError> {
        if matches!(subject, "" | "." | "..") {
            return Err(FetchError::InvalidUrl(format!(
                "'{subject}' is not a modification namespace"
            )));
        }

        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["client-store", "get-modification", subject]);
        Ok(url)
    }
}

impl SnapshotSource for FlintClient {
    fn fetch(&self, subject: &str) -> Result<Modification, FetchError> {
        let url = self.modification_url(subject)?;
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        log::debug!("GET {url} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(FetchError::Status(status.to_string()));
        }

        decode_modification(&body)
    }
}

fn decode_modification(body: &str) -> Result<Modification, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
