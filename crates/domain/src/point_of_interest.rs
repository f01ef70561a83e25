//! Point of interest — a named place owned by a single city.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CityInfoError, ValidationError};
use crate::id::PoiId;
use crate::patch::FieldDocument;

/// Maximum accepted length for a point of interest name.
pub const MAX_NAME_LENGTH: usize = 200;

/// A place worth visiting inside a city.
///
/// The id is server-assigned and unique across all cities; `name` and
/// `description` are the only editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: PoiId,
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterest {
    /// Create a builder for constructing a [`PointOfInterest`].
    #[must_use]
    pub fn builder() -> PointOfInterestBuilder {
        PointOfInterestBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] when `name` is empty or too long.
    pub fn validate(&self) -> Result<(), CityInfoError> {
        validate_name(&self.name)?;
        Ok(())
    }

    /// Overwrite the editable fields, leaving the id untouched.
    pub fn apply(&mut self, draft: PointOfInterestDraft) {
        self.name = draft.name;
        self.description = draft.description;
    }

    /// Snapshot the editable fields into a draft.
    #[must_use]
    pub fn to_draft(&self) -> PointOfInterestDraft {
        PointOfInterestDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// The editable fields of a point of interest, detached from its identity.
///
/// Used both as the full-update payload and as the transient document a
/// patch is applied to before being committed back onto the stored point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterestDraft {
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterestDraft {
    /// Check the same invariants as [`PointOfInterest::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] when `name` is empty or too long.
    pub fn validate(&self) -> Result<(), CityInfoError> {
        validate_name(&self.name)?;
        Ok(())
    }

    /// Expand the draft into a patchable field document.
    #[must_use]
    pub fn to_document(&self) -> FieldDocument {
        FieldDocument::new([
            ("name", Value::String(self.name.clone())),
            (
                "description",
                self.description
                    .clone()
                    .map_or(Value::Null, Value::String),
            ),
        ])
    }

    /// Rebuild a draft from a patched field document.
    ///
    /// A null or missing `name` becomes the empty string so that
    /// [`Self::validate`] rejects it afterwards.
    #[must_use]
    pub fn from_document(document: &FieldDocument) -> Self {
        let string_field = |field: &str| {
            document
                .get(field)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        };
        Self {
            name: string_field("name").unwrap_or_default(),
            description: string_field("description"),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Step-by-step builder for [`PointOfInterest`].
#[derive(Debug, Default)]
pub struct PointOfInterestBuilder {
    id: Option<PoiId>,
    name: Option<String>,
    description: Option<String>,
}

impl PointOfInterestBuilder {
    #[must_use]
    pub fn id(mut self, id: PoiId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return a [`PointOfInterest`].
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] if `name` is missing, empty,
    /// or too long.
    pub fn build(self) -> Result<PointOfInterest, CityInfoError> {
        let poi = PointOfInterest {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
        };
        poi.validate()?;
        Ok(poi)
    }
}
