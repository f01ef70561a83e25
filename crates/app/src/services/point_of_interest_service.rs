//! Point-of-interest service — use-cases for the nested CRUD resource.
//!
//! Every operation follows the same linear flow: check the parent city,
//! check the child point where one is addressed, validate, mutate, respond.
//! Lookup failures short-circuit with distinct not-found errors.

use cityinfo_domain::error::{CityInfoError, NotFoundError};
use cityinfo_domain::id::{CityId, PoiId};
use cityinfo_domain::patch::PatchOperation;
use cityinfo_domain::point_of_interest::{PointOfInterest, PointOfInterestDraft};

use crate::ports::{CityRepository, PointOfInterestRepository};

/// Application service for point-of-interest CRUD and partial updates.
pub struct PointOfInterestService<CR, PR> {
    cities: CR,
    points: PR,
}

impl<CR: CityRepository, PR: PointOfInterestRepository> PointOfInterestService<CR, PR> {
    /// Create a new service backed by the given repositories.
    pub fn new(cities: CR, points: PR) -> Self {
        Self { cities, points }
    }

    /// List the points of a city in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::NotFound`] when the city is unknown, or a
    /// storage error from the repository.
    pub async fn list(&self, city_id: CityId) -> Result<Vec<PointOfInterest>, CityInfoError> {
        self.ensure_city(city_id).await?;
        self.points
            .get_all(city_id)
            .await?
            .ok_or_else(|| NotFoundError::City { id: city_id }.into())
    }

    /// Look up a single point within a city.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::NotFound`] when the city or the point is
    /// unknown, each with its own message.
    pub async fn get(
        &self,
        city_id: CityId,
        id: PoiId,
    ) -> Result<PointOfInterest, CityInfoError> {
        self.ensure_city(city_id).await?;
        self.points
            .get_by_id(city_id, id)
            .await?
            .ok_or_else(|| NotFoundError::PointOfInterest { city_id, id }.into())
    }

    /// Create a point under a city. The id is assigned by the store from
    /// the global sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] when the draft breaks field
    /// constraints, or [`CityInfoError::NotFound`] when the city is unknown.
    pub async fn create(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, CityInfoError> {
        draft.validate()?;
        self.ensure_city(city_id).await?;
        let created = self
            .points
            .create(city_id, draft)
            .await?
            .ok_or(NotFoundError::City { id: city_id })?;
        tracing::info!(city_id = %city_id, poi_id = %created.id, "point of interest created");
        Ok(created)
    }

    /// Replace the editable fields of an existing point. The id never
    /// changes; applying the same draft twice is a no-op the second time.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::Validation`] when the draft breaks field
    /// constraints, or [`CityInfoError::NotFound`] when the city or the
    /// point is unknown.
    pub async fn update(
        &self,
        city_id: CityId,
        id: PoiId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, CityInfoError> {
        draft.validate()?;
        self.ensure_city(city_id).await?;
        self.points
            .update(city_id, id, draft)
            .await?
            .ok_or_else(|| NotFoundError::PointOfInterest { city_id, id }.into())
    }

    /// Delete a point from its city.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::NotFound`] when the city or the point is
    /// unknown. Deleting the same point twice fails the second time.
    pub async fn delete(&self, city_id: CityId, id: PoiId) -> Result<(), CityInfoError> {
        self.ensure_city(city_id).await?;
        self.points
            .delete(city_id, id)
            .await?
            .ok_or(NotFoundError::PointOfInterest { city_id, id })?;
        tracing::info!(city_id = %city_id, poi_id = %id, "point of interest deleted");
        Ok(())
    }

    /// Apply a patch document to an existing point.
    ///
    /// The patch runs against a transient copy of the editable fields; the
    /// result is validated before anything is written back, so a failing
    /// patch never leaves partial changes behind.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::NotFound`] when the city or the point is
    /// unknown, [`CityInfoError::Patch`] when any operation fails to apply,
    /// or [`CityInfoError::Validation`] when the patched fields break
    /// constraints.
    pub async fn patch(
        &self,
        city_id: CityId,
        id: PoiId,
        operations: &[PatchOperation],
    ) -> Result<PointOfInterest, CityInfoError> {
        let current = self.get(city_id, id).await?;

        let mut document = current.to_draft().to_document();
        document.apply(operations)?;

        let draft = PointOfInterestDraft::from_document(&document);
        draft.validate()?;

        self.points
            .update(city_id, id, draft)
            .await?
            .ok_or_else(|| NotFoundError::PointOfInterest { city_id, id }.into())
    }

    async fn ensure_city(&self, city_id: CityId) -> Result<(), CityInfoError> {
        if self.cities.exists(city_id).await? {
            Ok(())
        } else {
            Err(NotFoundError::City { id: city_id }.into())
        }
    }
}
