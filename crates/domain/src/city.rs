//! City — a top-level resource owning a collection of points of interest.

use serde::{Deserialize, Serialize};

use crate::error::{CityInfoError, ValidationError};
use crate::id::{CityId, PoiId};
use crate::point_of_interest::PointOfInterest;

/// A city and the points of interest it exclusively owns.
///
/// Points live and die with their city; they are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CityInfoError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Find a point of interest by id.
    #[must_use]
    pub fn point_of_interest(&self, id: PoiId) -> Option<&PointOfInterest> {
        self.points_of_interest.iter().find(|p| p.id == id)
    }

    /// Find a point of interest by id, mutably.
    pub fn point_of_interest_mut(&mut self, id: PoiId) -> Option<&mut PointOfInterest> {
        self.points_of_interest.iter_mut().find(|p| p.id == id)
    }

    /// Remove a point of interest by id, returning it if present.
    pub fn remove_point_of_interest(&mut self, id: PoiId) -> Option<PointOfInterest> {
        let index = self.points_of_interest.iter().position(|p| p.id == id)?;
        Some(self.points_of_interest.remove(index))
    }
}

/// Step-by-step builder for [`City`].
#[derive(Debug, Default)]
pub struct CityBuilder {
    id: Option<CityId>,
    name: Option<String>,
    description: Option<String>,
    points_of_interest: Vec<PointOfInterest>,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: CityId) -> Self {
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

    #[must_use]
    pub fn point_of_interest(mut self, poi: PointOfInterest) -> Self {
        self.points_of_interest.push(poi);
        self
    }

    /// Consume the builder, validate, and return a [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<City, CityInfoError> {
        let city = City {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            points_of_interest: self.points_of_interest,
        };
        city.validate()?;
        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: i32, name: &str) -> PointOfInterest {
        PointOfInterest::builder()
            .id(PoiId::new(id))
            .name(name)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_city_when_name_provided() {
        let city = City::builder().id(CityId::new(1)).name("Lyon").build().unwrap();
        assert_eq!(city.name, "Lyon");
        assert!(city.points_of_interest.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = City::builder().build();
        assert!(matches!(
            result,
            Err(CityInfoError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_find_point_by_id() {
        let city = City::builder()
            .name("Lyon")
            .point_of_interest(poi(1, "Fourvière"))
            .point_of_interest(poi(2, "Parc de la Tête d'Or"))
            .build()
            .unwrap();

        assert_eq!(city.point_of_interest(PoiId::new(2)).unwrap().id, PoiId::new(2));
        assert!(city.point_of_interest(PoiId::new(3)).is_none());
    }

    #[test]
    fn should_remove_point_by_identity() {
        let mut city = City::builder()
            .name("Lyon")
            .point_of_interest(poi(1, "Fourvière"))
            .point_of_interest(poi(2, "Parc"))
            .build()
            .unwrap();

        let removed = city.remove_point_of_interest(PoiId::new(1)).unwrap();
        assert_eq!(removed.name, "Fourvière");
        assert_eq!(city.points_of_interest.len(), 1);
        assert!(city.remove_point_of_interest(PoiId::new(1)).is_none());
    }

    #[test]
    fn should_preserve_insertion_order() {
        let city = City::builder()
            .name("Lyon")
            .point_of_interest(poi(5, "a"))
            .point_of_interest(poi(2, "b"))
            .point_of_interest(poi(9, "c"))
            .build()
            .unwrap();

        let names: Vec<_> = city.points_of_interest.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let city = City::builder()
            .id(CityId::new(4))
            .name("Nantes")
            .point_of_interest(poi(1, "Les Machines"))
            .build()
            .unwrap();
        let json = serde_json::to_string(&city).unwrap();
        let parsed: City = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, city);
    }
}
