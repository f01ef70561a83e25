//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod points_of_interest;

use axum::Router;
use axum::routing::get;

use cityinfo_app::ports::{CityRepository, PointOfInterestRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CR, PR>() -> Router<AppState<CR, PR>>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    Router::new()
        // Cities (read-only)
        .route("/cities", get(cities::list::<CR, PR>))
        .route("/cities/{city_id}", get(cities::get::<CR, PR>))
        // Points of interest, nested under their city
        .route(
            "/cities/{city_id}/pointsofinterest",
            get(points_of_interest::list::<CR, PR>)
                .post(points_of_interest::create::<CR, PR>),
        )
        .route(
            "/cities/{city_id}/pointsofinterest/{poi_id}",
            get(points_of_interest::get::<CR, PR>)
                .put(points_of_interest::update::<CR, PR>)
                .delete(points_of_interest::delete::<CR, PR>)
                .patch(points_of_interest::patch::<CR, PR>),
        )
}
