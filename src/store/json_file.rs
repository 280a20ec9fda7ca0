use crate::domain::schema::FIELDS;
use crate::domain::{Modification, SchemaMismatch};
use crate::store::StoreError;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
#[cfg(test)]
use std::path::Path;
use std::path::PathBuf;

/// Keeps the last observed record so the next cycle has something to compare against.
pub trait BaselineStore {
    fn load(&self) -> Result<Modification, StoreError>;
    fn save(&self, modification: &Modification) -> Result<(), StoreError>;
}

/// Baseline kept as an indented JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BaselineStore for JsonFileStore {
    fn load(&self) -> Result<Modification, StoreError> {
        log::debug!("BASELINE LOAD: path='{}'", self.path.display());
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let document: Value =
            serde_json::from_str(&raw).map_err(|e| StoreError::Decode(e.to_string()))?;
        check_schema(&document).map_err(StoreError::Schema)?;

        serde_json::from_value(document).map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn save(&self, modification: &Modification) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(modification)
            .map_err(|e| StoreError::Io(format!("encode failed: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        // Write next to the baseline and swap it in, so a crash never leaves half a file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json.as_bytes()).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;

        log::debug!(
            "BASELINE SAVE: path='{}', size={} bytes",
            self.path.display(),
            json.len()
        );
        Ok(())
    }
}

/// Every tracked key must be present, in any order. Extra keys are ignored.
fn check_schema(document: &Value) -> Result<(), SchemaMismatch> {
    let object = document.as_object().ok_or(SchemaMismatch {
        position: 0,
        expected: FIELDS.first().map(|f| f.name),
        found: None,
    })?;

    match FIELDS
        .iter()
        .position(|field| !object.contains_key(field.key))
    {
        Some(position) => Err(SchemaMismatch {
            position,
            expected: Some(FIELDS[position].name),
            found: None,
        }),
        None => Ok(()),
    }
}
