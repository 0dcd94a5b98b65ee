use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use mergington_core::Activity;
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, AppState};

/// Email is taken as an opaque query parameter; the format is not validated.
#[derive(Debug, Deserialize)]
pub struct SignupParams {
    email: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    message: String,
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.list())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<SignupResponse>, ApiError> {
    state.registry.signup(&name, &params.email)?;

    tracing::info!(activity = %name, email = %params.email, "Signed up participant");
    Ok(Json(SignupResponse {
        message: format!("Signed up {} for {}", params.email, name),
    }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<SignupResponse>, ApiError> {
    state.registry.unregister(&name, &params.email)?;

    tracing::info!(activity = %name, email = %params.email, "Removed participant");
    Ok(Json(SignupResponse {
        message: format!("Removed {} from {}", params.email, name),
    }))
}
