//! Storage port — repository traits for the backing store.
//!
//! The store owns synchronisation: implementations must make every mutating
//! method atomic, including id assignment during create, so concurrent
//! requests cannot produce duplicate ids or lost updates.

use std::future::Future;

use cityinfo_domain::city::City;
use cityinfo_domain::error::CityInfoError;
use cityinfo_domain::id::{CityId, PoiId};
use cityinfo_domain::point_of_interest::{PointOfInterest, PointOfInterestDraft};

/// Read access to cities.
pub trait CityRepository {
    /// All cities, in stable order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, CityInfoError>> + Send;

    /// A city with its points of interest, or `None` when unknown.
    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, CityInfoError>> + Send;

    /// Whether a city with this id exists.
    fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, CityInfoError>> + Send;
}

/// CRUD for points of interest, keyed by the composite (city id, point id).
///
/// Methods return `None` when the addressed resource is absent; callers
/// translate that into the appropriate not-found error.
pub trait PointOfInterestRepository {
    /// All points of a city in insertion order, or `None` when the city
    /// is unknown.
    fn get_all(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Option<Vec<PointOfInterest>>, CityInfoError>> + Send;

    /// A single point within a city.
    fn get_by_id(
        &self,
        city_id: CityId,
        id: PoiId,
    ) -> impl Future<Output = Result<Option<PointOfInterest>, CityInfoError>> + Send;

    /// Append a new point to a city, assigning the next id in the global
    /// sequence (`1 + max` over every point of every city).
    ///
    /// Returns `None` when the city is unknown.
    fn create(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> impl Future<Output = Result<Option<PointOfInterest>, CityInfoError>> + Send;

    /// Replace the editable fields of an existing point in place.
    ///
    /// Returns `None` when the city or the point is unknown.
    fn update(
        &self,
        city_id: CityId,
        id: PoiId,
        draft: PointOfInterestDraft,
    ) -> impl Future<Output = Result<Option<PointOfInterest>, CityInfoError>> + Send;

    /// Remove a point from its city, returning it, or `None` when absent.
    fn delete(
        &self,
        city_id: CityId,
        id: PoiId,
    ) -> impl Future<Output = Result<Option<PointOfInterest>, CityInfoError>> + Send;
}
