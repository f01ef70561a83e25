//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CityInfoError`] via `#[from]` (no `String` variants).

use crate::id::{CityId, PoiId};

/// Top-level error for all cityinfo operations.
#[derive(Debug, thiserror::Error)]
pub enum CityInfoError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A requested resource does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A patch document could not be applied.
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// The storage adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Domain invariant violations on editable fields.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` must be a non-empty string.
    #[error("name must not be empty")]
    EmptyName,
    /// `name` exceeds the maximum length.
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// A looked-up resource is absent. The two variants carry distinct
/// messages so callers can tell a missing parent from a missing child.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No city with the given id exists in the store.
    #[error("no city with id {id} exists")]
    City { id: CityId },
    /// The city exists but holds no point of interest with the given id.
    #[error("no point of interest with id {id} exists in city {city_id}")]
    PointOfInterest { city_id: CityId, id: PoiId },
}

/// One or more patch operations failed to apply.
///
/// Carries every recorded failure so the response can enumerate them all.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("patch document could not be applied ({} operation(s) failed)", failures.len())]
pub struct PatchError {
    pub failures: Vec<PatchFailure>,
}

/// A single failed patch operation.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct PatchFailure {
    /// Zero-based index of the operation within the patch document.
    pub operation: usize,
    /// The path the operation targeted.
    pub path: String,
    /// Why the operation could not be applied.
    pub message: String,
}

/// Faults raised by a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store is gone or refused the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_distinct_not_found_messages() {
        let city = NotFoundError::City { id: CityId::new(99) };
        let poi = NotFoundError::PointOfInterest {
            city_id: CityId::new(1),
            id: PoiId::new(7),
        };
        assert_eq!(city.to_string(), "no city with id 99 exists");
        assert_eq!(
            poi.to_string(),
            "no point of interest with id 7 exists in city 1"
        );
    }

    #[test]
    fn should_count_failures_in_patch_error_message() {
        let err = PatchError {
            failures: vec![PatchFailure {
                operation: 0,
                path: "/name".to_string(),
                message: "boom".to_string(),
            }],
        };
        assert!(err.to_string().contains("1 operation(s)"));
    }
}
