//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use cityinfo_app::ports::{CityRepository, PointOfInterestRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes under `/api`. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<CR, PR>(state: AppState<CR, PR>) -> Router
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use cityinfo_app::services::city_service::CityService;
    use cityinfo_app::services::point_of_interest_service::PointOfInterestService;
    use cityinfo_domain::city::City;
    use cityinfo_domain::error::CityInfoError;
    use cityinfo_domain::id::{CityId, PoiId};
    use cityinfo_domain::point_of_interest::{PointOfInterest, PointOfInterestDraft};
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubCityRepo;
    #[derive(Clone)]
    struct StubPoiRepo;

    impl CityRepository for StubCityRepo {
        async fn get_all(&self) -> Result<Vec<City>, CityInfoError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: CityId) -> Result<Option<City>, CityInfoError> {
            Ok(None)
        }
        async fn exists(&self, _id: CityId) -> Result<bool, CityInfoError> {
            Ok(false)
        }
    }

    impl PointOfInterestRepository for StubPoiRepo {
        async fn get_all(
            &self,
            _city_id: CityId,
        ) -> Result<Option<Vec<PointOfInterest>>, CityInfoError> {
            Ok(None)
        }
        async fn get_by_id(
            &self,
            _city_id: CityId,
            _id: PoiId,
        ) -> Result<Option<PointOfInterest>, CityInfoError> {
            Ok(None)
        }
        async fn create(
            &self,
            _city_id: CityId,
            _draft: PointOfInterestDraft,
        ) -> Result<Option<PointOfInterest>, CityInfoError> {
            Ok(None)
        }
        async fn update(
            &self,
            _city_id: CityId,
            _id: PoiId,
            _draft: PointOfInterestDraft,
        ) -> Result<Option<PointOfInterest>, CityInfoError> {
            Ok(None)
        }
        async fn delete(
            &self,
            _city_id: CityId,
            _id: PoiId,
        ) -> Result<Option<PointOfInterest>, CityInfoError> {
            Ok(None)
        }
    }

    fn test_state() -> AppState<StubCityRepo, StubPoiRepo> {
        AppState::new(
            CityService::new(StubCityRepo),
            PointOfInterestService::new(StubCityRepo, StubPoiRepo),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_city_list() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_city() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cities/99/pointsofinterest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
