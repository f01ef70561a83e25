//! Partial-update semantics — tagged patch operations over a field document.
//!
//! A patch is a sequence of operations (`add`/`remove`/`replace`/`move`/
//! `copy`/`test`), each addressing a top-level field by JSON-pointer-style
//! path. Operations are applied in order to a [`FieldDocument`], a transient
//! mapping of editable fields seeded from the stored resource. Failures are
//! recorded per operation; any failure rejects the whole application, so
//! callers never commit a partially-patched document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PatchError, PatchFailure};

/// A single patch instruction.
///
/// Deserialized from the request body's operation array, e.g.
/// `{"op": "replace", "path": "/name", "value": "New"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    /// The path this operation targets, used when reporting failures.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. }
            | Self::Remove { path }
            | Self::Replace { path, .. }
            | Self::Move { path, .. }
            | Self::Copy { path, .. }
            | Self::Test { path, .. } => path,
        }
    }
}

/// A flat mapping of editable fields to their current JSON values.
///
/// Every known field is always present; a field without a value holds
/// `Value::Null`. Field values are strings or null — nothing in the data
/// model nests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDocument {
    fields: BTreeMap<String, Value>,
}

impl FieldDocument {
    /// Build a document from field/value pairs.
    #[must_use]
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Current value of a field, if the field is known.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Apply a sequence of operations in order.
    ///
    /// Every failing operation is recorded and skipped; subsequent
    /// operations still run so the caller can report all problems at once.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError`] listing each failed operation. When this
    /// returns `Err`, the document must be discarded — it may hold the
    /// effects of the operations that did succeed.
    pub fn apply(&mut self, operations: &[PatchOperation]) -> Result<(), PatchError> {
        let mut failures = Vec::new();

        for (index, op) in operations.iter().enumerate() {
            if let Err(message) = self.apply_one(op) {
                failures.push(PatchFailure {
                    operation: index,
                    path: op.path().to_string(),
                    message,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PatchError { failures })
        }
    }

    fn apply_one(&mut self, op: &PatchOperation) -> Result<(), String> {
        match op {
            PatchOperation::Add { path, value } => {
                let field = self.resolve(path)?;
                check_assignable(path, value)?;
                self.fields.insert(field, value.clone());
                Ok(())
            }
            PatchOperation::Remove { path } => {
                let field = self.resolve_present(path)?;
                self.fields.insert(field, Value::Null);
                Ok(())
            }
            PatchOperation::Replace { path, value } => {
                let field = self.resolve(path)?;
                check_assignable(path, value)?;
                self.fields.insert(field, value.clone());
                Ok(())
            }
            PatchOperation::Move { from, path } => {
                let source = self.resolve_present(from)?;
                let target = self.resolve(path)?;
                let value = self.fields.insert(source, Value::Null).unwrap_or(Value::Null);
                self.fields.insert(target, value);
                Ok(())
            }
            PatchOperation::Copy { from, path } => {
                let source = self.resolve_present(from)?;
                let target = self.resolve(path)?;
                let value = self.fields[&source].clone();
                self.fields.insert(target, value);
                Ok(())
            }
            PatchOperation::Test { path, value } => {
                let field = self.resolve(path)?;
                if self.fields[&field] == *value {
                    Ok(())
                } else {
                    Err(format!("test failed: value at {path} does not match"))
                }
            }
        }
    }

    /// Map a JSON-pointer path onto a known field name.
    fn resolve(&self, path: &str) -> Result<String, String> {
        let Some(field) = path.strip_prefix('/') else {
            return Err(format!("invalid path {path:?}: must start with '/'"));
        };
        if field.is_empty() || field.contains('/') {
            return Err(format!("invalid path {path:?}: must address a top-level field"));
        }
        if self.fields.contains_key(field) {
            Ok(field.to_string())
        } else {
            Err(format!("unknown field at {path:?}"))
        }
    }

    /// Like [`Self::resolve`], but the field must currently hold a value.
    fn resolve_present(&self, path: &str) -> Result<String, String> {
        let field = self.resolve(path)?;
        if self.fields[&field].is_null() {
            Err(format!("no value at {path:?}"))
        } else {
            Ok(field)
        }
    }
}

/// Field values are strings or null; anything else is a type mismatch.
fn check_assignable(path: &str, value: &Value) -> Result<(), String> {
    if value.is_string() || value.is_null() {
        Ok(())
    } else {
        Err(format!("expected a string or null at {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> FieldDocument {
        FieldDocument::new([
            ("name", json!("Old")),
            ("description", json!("d")),
        ])
    }

    fn replace(path: &str, value: Value) -> PatchOperation {
        PatchOperation::Replace {
            path: path.to_string(),
            value,
        }
    }

    #[test]
    fn should_deserialize_tagged_operation() {
        let op: PatchOperation =
            serde_json::from_str(r#"{"op":"replace","path":"/name","value":"New"}"#).unwrap();
        assert_eq!(op, replace("/name", json!("New")));
    }

    #[test]
    fn should_replace_field_value() {
        let mut doc = document();
        doc.apply(&[replace("/name", json!("New"))]).unwrap();
        assert_eq!(doc.get("name"), Some(&json!("New")));
        assert_eq!(doc.get("description"), Some(&json!("d")));
    }

    #[test]
    fn should_add_value_to_null_field() {
        let mut doc = FieldDocument::new([("name", json!("n")), ("description", Value::Null)]);
        doc.apply(&[PatchOperation::Add {
            path: "/description".to_string(),
            value: json!("fresh"),
        }])
        .unwrap();
        assert_eq!(doc.get("description"), Some(&json!("fresh")));
    }

    #[test]
    fn should_null_out_field_on_remove() {
        let mut doc = document();
        doc.apply(&[PatchOperation::Remove {
            path: "/description".to_string(),
        }])
        .unwrap();
        assert_eq!(doc.get("description"), Some(&Value::Null));
    }

    #[test]
    fn should_fail_remove_when_field_has_no_value() {
        let mut doc = FieldDocument::new([("name", json!("n")), ("description", Value::Null)]);
        let err = doc
            .apply(&[PatchOperation::Remove {
                path: "/description".to_string(),
            }])
            .unwrap_err();
        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].path, "/description");
    }

    #[test]
    fn should_move_value_between_fields() {
        let mut doc = document();
        doc.apply(&[PatchOperation::Move {
            from: "/description".to_string(),
            path: "/name".to_string(),
        }])
        .unwrap();
        assert_eq!(doc.get("name"), Some(&json!("d")));
        assert_eq!(doc.get("description"), Some(&Value::Null));
    }

    #[test]
    fn should_copy_value_between_fields() {
        let mut doc = document();
        doc.apply(&[PatchOperation::Copy {
            from: "/name".to_string(),
            path: "/description".to_string(),
        }])
        .unwrap();
        assert_eq!(doc.get("name"), Some(&json!("Old")));
        assert_eq!(doc.get("description"), Some(&json!("Old")));
    }

    #[test]
    fn should_pass_test_when_value_matches() {
        let mut doc = document();
        assert!(doc
            .apply(&[PatchOperation::Test {
                path: "/name".to_string(),
                value: json!("Old"),
            }])
            .is_ok());
    }

    #[test]
    fn should_fail_test_when_value_differs() {
        let mut doc = document();
        let err = doc
            .apply(&[PatchOperation::Test {
                path: "/name".to_string(),
                value: json!("Other"),
            }])
            .unwrap_err();
        assert!(err.failures[0].message.contains("test failed"));
    }

    #[test]
    fn should_reject_unknown_field() {
        let mut doc = document();
        let err = doc.apply(&[replace("/id", json!(99))]).unwrap_err();
        assert!(err.failures[0].message.contains("unknown field"));
    }

    #[test]
    fn should_reject_nested_path() {
        let mut doc = document();
        let err = doc.apply(&[replace("/name/first", json!("x"))]).unwrap_err();
        assert!(err.failures[0].message.contains("top-level"));
    }

    #[test]
    fn should_reject_path_without_leading_slash() {
        let mut doc = document();
        let err = doc.apply(&[replace("name", json!("x"))]).unwrap_err();
        assert!(err.failures[0].message.contains("must start with '/'"));
    }

    #[test]
    fn should_reject_type_mismatch() {
        let mut doc = document();
        let err = doc.apply(&[replace("/name", json!(42))]).unwrap_err();
        assert!(err.failures[0].message.contains("expected a string"));
    }

    #[test]
    fn should_collect_every_failure_in_order() {
        let mut doc = document();
        let err = doc
            .apply(&[
                replace("/unknown", json!("x")),
                replace("/name", json!("kept-going")),
                replace("/name", json!(1)),
            ])
            .unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert_eq!(err.failures[0].operation, 0);
        assert_eq!(err.failures[1].operation, 2);
        // The valid middle operation still ran; the caller discards the
        // document on error, so this is never observable through the API.
        assert_eq!(doc.get("name"), Some(&json!("kept-going")));
    }

    #[test]
    fn should_apply_operations_in_sequence() {
        let mut doc = document();
        doc.apply(&[
            replace("/name", json!("First")),
            replace("/name", json!("Second")),
        ])
        .unwrap();
        assert_eq!(doc.get("name"), Some(&json!("Second")));
    }
}
