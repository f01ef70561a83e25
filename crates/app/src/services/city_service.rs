//! City service — read-only use-cases for cities.

use cityinfo_domain::city::City;
use cityinfo_domain::error::{CityInfoError, NotFoundError};
use cityinfo_domain::id::CityId;

use crate::ports::CityRepository;

/// Application service for reading cities.
pub struct CityService<R> {
    repo: R,
}

impl<R: CityRepository> CityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all cities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cities(&self) -> Result<Vec<City>, CityInfoError> {
        self.repo.get_all().await
    }

    /// Look up a city by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CityInfoError::NotFound`] when no city with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_city(&self, id: CityId) -> Result<City, CityInfoError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::City { id }.into())
    }
}
