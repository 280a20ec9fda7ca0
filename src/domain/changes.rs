// src/domain/changes.rs

use crate::domain::value::FieldValue;

/// A single field that differs between the baseline and the current record.
/// Built by the differ and handed straight to the notifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub field_name: &'static str,
    pub previous_value: FieldValue,
    pub current_value: FieldValue,
}

impl ChangeRecord {
    /// `previous`, an arrow line, then `current`.
    pub fn describe(&self) -> String {
        format!("{}\n->\n{}", self.previous_value, self.current_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_puts_arrow_on_its_own_line() {
        let change = ChangeRecord {
            field_name: "Downloads",
            previous_value: 100.into(),
            current_value: 150.into(),
        };
        assert_eq!(change.describe(), "100\n->\n150");
    }
}
