// src/domain/diff.rs

use crate::domain::changes::ChangeRecord;
use crate::domain::snapshot::Snapshot;
use std::error::Error;
use std::fmt;

/// Two snapshots that do not share the same field list.
///
/// `expected` is the field the previous snapshot has at `position`, `found`
/// the one the current snapshot has there. `None` means the list ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMismatch {
    pub position: usize,
    pub expected: Option<&'static str>,
    pub found: Option<&'static str>,
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = self.expected.unwrap_or("<end of fields>");
        let found = self.found.unwrap_or("<end of fields>");
        write!(
            f,
            "Schema mismatch at field {}: expected {expected}, found {found}",
            self.position
        )
    }
}

impl Error for SchemaMismatch {}

/// Compares two snapshots field by field and returns one record per
/// difference, in field order.
///
/// The field lists are checked in full before anything is compared, so a
/// mismatch never yields a partial result.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> Result<Vec<ChangeRecord>, SchemaMismatch> {
    let prev_fields = previous.fields();
    let curr_fields = current.fields();

    let len = prev_fields.len().max(curr_fields.len());
    for position in 0..len {
        let expected = prev_fields.get(position).map(|f| f.name);
        let found = curr_fields.get(position).map(|f| f.name);
        if expected != found {
            return Err(SchemaMismatch {
                position,
                expected,
                found,
            });
        }
    }

    let changes = prev_fields
        .iter()
        .zip(curr_fields)
        .filter(|(before, after)| before.value != after.value)
        .map(|(before, after)| ChangeRecord {
            field_name: before.name,
            previous_value: before.value.clone(),
            current_value: after.value.clone(),
        })
        .collect();

    Ok(changes)
}
