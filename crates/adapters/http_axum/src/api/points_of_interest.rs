//! JSON REST handlers for points of interest nested under a city.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use cityinfo_app::ports::{CityRepository, PointOfInterestRepository};
use cityinfo_domain::id::{CityId, PoiId};
use cityinfo_domain::patch::PatchOperation;
use cityinfo_domain::point_of_interest::{PointOfInterest, PointOfInterestDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or fully updating a point of interest.
///
/// The id is server-assigned and never part of a payload.
#[derive(Deserialize)]
pub struct PointOfInterestRequest {
    pub name: String,
    pub description: Option<String>,
}

impl From<PointOfInterestRequest> for PointOfInterestDraft {
    fn from(req: PointOfInterestRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PointOfInterest>>),
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
    Ok(Json<PointOfInterest>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// 201 with a `Location` header resolving to the new resource.
    Created {
        location: String,
        body: Json<PointOfInterest>,
    },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { location, body } => {
                (StatusCode::CREATED, [(header::LOCATION, location)], body).into_response()
            }
        }
    }
}

/// Possible responses from the update, delete, and patch endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/cities/{city_id}/pointsofinterest`
pub async fn list<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path(city_id): Path<CityId>,
) -> Result<ListResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    let points = state.poi_service.list(city_id).await?;
    Ok(ListResponse::Ok(Json(points)))
}

/// `GET /api/cities/{city_id}/pointsofinterest/{poi_id}`
pub async fn get<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path((city_id, poi_id)): Path<(CityId, PoiId)>,
) -> Result<GetResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    let poi = state.poi_service.get(city_id, poi_id).await?;
    Ok(GetResponse::Ok(Json(poi)))
}

/// `POST /api/cities/{city_id}/pointsofinterest`
pub async fn create<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path(city_id): Path<CityId>,
    Json(req): Json<PointOfInterestRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    let created = state.poi_service.create(city_id, req.into()).await?;
    let location = format!("/api/cities/{city_id}/pointsofinterest/{}", created.id);
    Ok(CreateResponse::Created {
        location,
        body: Json(created),
    })
}

/// `PUT /api/cities/{city_id}/pointsofinterest/{poi_id}`
pub async fn update<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path((city_id, poi_id)): Path<(CityId, PoiId)>,
    Json(req): Json<PointOfInterestRequest>,
) -> Result<NoContentResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    state.poi_service.update(city_id, poi_id, req.into()).await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/cities/{city_id}/pointsofinterest/{poi_id}`
pub async fn delete<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path((city_id, poi_id)): Path<(CityId, PoiId)>,
) -> Result<NoContentResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    state.poi_service.delete(city_id, poi_id).await?;
    Ok(NoContentResponse::NoContent)
}

/// `PATCH /api/cities/{city_id}/pointsofinterest/{poi_id}`
///
/// Body is an array of patch operations targeting `/name` and
/// `/description`.
pub async fn patch<CR, PR>(
    State(state): State<AppState<CR, PR>>,
    Path((city_id, poi_id)): Path<(CityId, PoiId)>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> Result<NoContentResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    PR: PointOfInterestRepository + Send + Sync + 'static,
{
    state.poi_service.patch(city_id, poi_id, &operations).await?;
    Ok(NoContentResponse::NoContent)
}
