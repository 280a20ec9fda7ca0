// src/tracker.rs

use crate::domain::{diff, Snapshot};
use crate::errors::TrackerError;
use crate::fetcher::SnapshotSource;
use crate::notifier::{DeliveryPolicy, Notifier, WebhookTransport};
use crate::store::{BaselineStore, StoreError};

/// What happened to the baseline during a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineState {
    /// A previous baseline was compared against the fetched record.
    Compared,
    /// There was no baseline yet; the fetched record became the first one.
    Created,
    /// The baseline could not be read and was overwritten without comparing.
    Replaced,
}

/// What one poll cycle did.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub baseline: BaselineState,
    pub changed_fields: Vec<&'static str>,
}

/// Runs one poll cycle: fetch, compare with the baseline, report every
/// changed field, then store the fetched record as the new baseline.
///
/// The baseline is only replaced once every change has been delivered, so a
/// failed delivery is retried on the next cycle.
pub fn run_cycle<S, B, T>(
    source: &S,
    store: &B,
    notifier: &Notifier<T>,
    subject: &str,
    policy: DeliveryPolicy,
) -> Result<CycleReport, TrackerError>
where
    S: SnapshotSource,
    B: BaselineStore,
    T: WebhookTransport,
{
    let current = source.fetch(subject)?;
    log::info!(
        "Fetched {} ({}.{}), {} downloads",
        current.name,
        current.id,
        current.namespace,
        current.downloads
    );

    let (previous, baseline) = match store.load() {
        Ok(previous) => (Some(previous), BaselineState::Compared),
        Err(StoreError::NotFound) => {
            log::info!("No baseline yet, skipping comparison");
            (None, BaselineState::Created)
        }
        Err(e @ (StoreError::Io(_) | StoreError::Decode(_))) => {
            log::warn!("Ignoring unreadable baseline: {e}");
            (None, BaselineState::Replaced)
        }
        Err(StoreError::Schema(mismatch)) => return Err(TrackerError::SchemaMismatch(mismatch)),
    };

    let mut report = CycleReport {
        baseline,
        changed_fields: Vec::new(),
    };

    if let Some(previous) = previous {
        let changes = diff(&Snapshot::capture(&previous), &Snapshot::capture(&current))?;
        log::info!("{} field(s) changed", changes.len());

        notifier.notify_all(&current, &changes, policy)?;
        report.changed_fields = changes.iter().map(|c| c.field_name).collect();
    }

    store.save(&current)?;
    log::info!("Baseline updated");

    Ok(report)
}
