//! Shared application state for axum handlers.

use std::sync::Arc;

use cityinfo_app::ports::{CityRepository, PointOfInterestRepository};
use cityinfo_app::services::city_service::CityService;
use cityinfo_app::services::point_of_interest_service::PointOfInterestService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, PR> {
    /// Read-only city service.
    pub city_service: Arc<CityService<CR>>,
    /// Point-of-interest CRUD service.
    pub poi_service: Arc<PointOfInterestService<CR, PR>>,
}

impl<CR, PR> Clone for AppState<CR, PR> {
    fn clone(&self) -> Self {
        Self {
            city_service: Arc::clone(&self.city_service),
            poi_service: Arc::clone(&self.poi_service),
        }
    }
}

impl<CR, PR> AppState<CR, PR>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        city_service: CityService<CR>,
        poi_service: PointOfInterestService<CR, PR>,
    ) -> Self {
        Self {
            city_service: Arc::new(city_service),
            poi_service: Arc::new(poi_service),
        }
    }
}
