// src/domain/snapshot.rs

use crate::domain::modification::Modification;
use crate::domain::schema::FIELDS;
use crate::domain::value::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
}

/// The observable state of one modification at one point in time, as an
/// ordered list of named values.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    fields: Vec<Field>,
}

impl Snapshot {
    /// Reads every tracked field of `modification` in declaration order.
    pub fn capture(modification: &Modification) -> Self {
        let fields = FIELDS
            .iter()
            .map(|spec| Field {
                name: spec.name,
                value: (spec.read)(modification),
            })
            .collect();

        Self { fields }
    }

    /// Assembles a snapshot from arbitrary fields. Nothing checks them against
    /// the tracked schema; the differ does that when two snapshots are compared.
    #[cfg(test)]
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}
