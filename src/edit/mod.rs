// file: src/edit/mod.rs
// version: 1.2.0
// guid: e8b3d6a1-4f7c-4a2e-9d5b-0c8e2f6a1d73

//! Generic editable-record helper
//!
//! Every edit-style command follows the same four steps: fetch a copy of the
//! record, apply optional field overrides, compare fingerprints to detect a
//! no-op, and conditionally submit. This module expresses the flow once,
//! parameterized over the record type, instead of duplicating it per command.

use crate::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A set of optional field overrides for one record type.
///
/// Implementors replace a field on the record only when the corresponding
/// override is present; unset overrides leave the field untouched. Editors
/// must never touch the record's identity fields.
pub trait RecordEditor {
    type Record: Clone + Serialize;

    /// Apply the present overrides onto `record`
    fn apply(&self, record: &mut Self::Record);
}

/// Outcome of merging overrides into a fetched record copy
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome<R> {
    /// The merge produced a record structurally identical to the original
    Unchanged,
    /// The merged candidate record, ready for submission
    Changed(R),
}

/// Structural fingerprint of a record: SHA-256 over its canonical JSON encoding.
///
/// Field order is fixed by the struct definition, so equal values always
/// produce equal fingerprints.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String> {
    let encoded = serde_json::to_vec(value)?;
    let digest = Sha256::digest(&encoded);
    Ok(hex::encode(digest))
}

/// Merge optional overrides into a copy of `current`.
///
/// Returns [`EditOutcome::Unchanged`] when the overrides leave the record
/// structurally identical, so the caller can skip the submit call. No local
/// validation happens here; an already-invalid record stays editable.
pub fn merge_overrides<E: RecordEditor>(
    editor: &E,
    current: &E::Record,
) -> Result<EditOutcome<E::Record>> {
    let before = fingerprint(current)?;

    let mut candidate = current.clone();
    editor.apply(&mut candidate);

    if fingerprint(&candidate)? == before {
        Ok(EditOutcome::Unchanged)
    } else {
        Ok(EditOutcome::Changed(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Widget {
        name: String,
        color: Option<String>,
        size: Option<String>,
    }

    #[derive(Default)]
    struct WidgetEditor {
        color: Option<String>,
        size: Option<String>,
    }

    impl RecordEditor for WidgetEditor {
        type Record = Widget;

        fn apply(&self, record: &mut Widget) {
            if let Some(color) = &self.color {
                record.color = Some(color.clone());
            }
            if let Some(size) = &self.size {
                record.size = Some(size.clone());
            }
        }
    }

    fn widget() -> Widget {
        Widget {
            name: "gear".to_string(),
            color: Some("red".to_string()),
            size: Some("large".to_string()),
        }
    }

    #[test]
    fn test_unset_overrides_leave_fields_untouched() {
        let editor = WidgetEditor {
            color: Some("blue".to_string()),
            size: None,
        };

        let outcome = merge_overrides(&editor, &widget()).unwrap();

        match outcome {
            EditOutcome::Changed(candidate) => {
                assert_eq!(candidate.color.as_deref(), Some("blue"));
                assert_eq!(candidate.size.as_deref(), Some("large"));
                assert_eq!(candidate.name, "gear");
            }
            EditOutcome::Unchanged => panic!("expected a changed record"),
        }
    }

    #[test]
    fn test_absent_overrides_are_a_noop() {
        let editor = WidgetEditor::default();

        let outcome = merge_overrides(&editor, &widget()).unwrap();

        assert_eq!(outcome, EditOutcome::Unchanged);
    }

    #[test]
    fn test_overrides_equal_to_current_values_are_a_noop() {
        let editor = WidgetEditor {
            color: Some("red".to_string()),
            size: Some("large".to_string()),
        };

        let outcome = merge_overrides(&editor, &widget()).unwrap();

        assert_eq!(outcome, EditOutcome::Unchanged);
    }

    #[test]
    fn test_fingerprint_is_stable_for_equal_values() {
        let a = fingerprint(&widget()).unwrap();
        let b = fingerprint(&widget().clone()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_differs_for_different_values() {
        let mut other = widget();
        other.color = Some("green".to_string());

        assert_ne!(fingerprint(&widget()).unwrap(), fingerprint(&other).unwrap());
    }
}
