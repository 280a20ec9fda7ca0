mod client;
mod fetch_error;

pub use client::{FlintClient, SnapshotSource};
pub use fetch_error::FetchError;
