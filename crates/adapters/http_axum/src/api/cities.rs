//! JSON REST handlers for cities (read-only).

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cityinfo_app::ports::{CityRepository, PointOfInterestRepository};
use cityinfo_domain::city::City;
use cityinfo_domain::id::CityId;

use crate::error::ApiError;
use crate::state::AppState;

/// City list entry — the POI collection is replaced by its size.
#[derive(Serialize)]
pub struct CitySummary {
    pub id: CityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub number_of_points_of_interest: usize,
}

impl From<&City> for CitySummary {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            description: city.description.clone(),
            number_of_points_of_interest: city.points_of_interest.len(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CitySummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<City>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/cities`
pub async fn list<CR, PR>(
    State(state): State<AppState<CR, PR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    let cities = state.city_service.list_cities().await?;
    let summaries = cities.iter().map(CitySummary::from).collect();
    Ok(ListResponse::Ok(Json(summaries)))
}

/// `GET /api/cities/{city_id}`
pub async fn get<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path(city_id): Path<CityId>,
) -> Result<GetResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::Ok(Json(city)))
}
