//! Location hierarchy lookups for the cascading selects

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StateOption {
    pub code: String,
    pub name: String,
}

/// GET /locations/states
pub async fn list_states(State(state): State<AppState>) -> Json<Vec<StateOption>> {
    let states = state
        .hierarchy()
        .states()
        .iter()
        .map(|s| StateOption {
            code: s.code.clone(),
            name: s.name.clone(),
        })
        .collect();
    Json(states)
}

/// GET /locations/:state/districts
pub async fn list_districts(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let hierarchy = state.hierarchy();
    if hierarchy.state(&code).is_none() {
        return Err(ApiError::NotFound(format!("State {}", code)));
    }
    Ok(Json(
        hierarchy.districts(&code).into_iter().map(String::from).collect(),
    ))
}

/// GET /locations/:state/:district/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Path((code, district)): Path<(String, String)>,
) -> ApiResult<Json<Vec<String>>> {
    let hierarchy = state.hierarchy();
    if !hierarchy.has_district(&code, &district) {
        return Err(ApiError::NotFound(format!("District {} in {}", district, code)));
    }
    Ok(Json(
        hierarchy
            .cities(&code, &district)
            .into_iter()
            .map(String::from)
            .collect(),
    ))
}

/// Build location routes
pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations/states", get(list_states))
        .route("/locations/:state/districts", get(list_districts))
        .route("/locations/:state/:district/cities", get(list_cities))
}
