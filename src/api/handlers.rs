//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use super::AppState;
use super::types::ErrorResponse;
use crate::config::SizingConfig;
use crate::controls::ControlSet;
use crate::report::Summary;
use crate::sizing::calculator::calculate;
use crate::sizing::types::SizingRequest;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Sizes the request body.
///
/// `POST /size` → 200 + `Summary` JSON
/// calculator rejection → 422 + `ErrorResponse` with `kind`
pub async fn post_size(Json(request): Json<SizingRequest>) -> ApiResult<Summary> {
    size(request)
}

/// Lists the built-in preset names.
///
/// `GET /presets` → 200 + `["default", ...]`
pub async fn list_presets() -> Json<&'static [&'static str]> {
    Json(SizingConfig::PRESETS)
}

/// Sizes a built-in preset.
///
/// `GET /presets/{name}` → 200 + `Summary` JSON
/// unknown name → 404 + `ErrorResponse`
pub async fn get_preset(Path(name): Path<String>) -> ApiResult<Summary> {
    let cfg = SizingConfig::from_preset(&name).map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
                kind: None,
            }),
        )
    })?;
    size(cfg.to_request())
}

/// Returns the input control ranges.
///
/// `GET /controls` → 200 + `ControlSet` JSON
pub async fn get_controls(State(state): State<Arc<AppState>>) -> Json<ControlSet> {
    Json(state.controls.clone())
}

fn size(request: SizingRequest) -> ApiResult<Summary> {
    match calculate(&request) {
        Ok(result) => Ok(Json(Summary::new(request, result))),
        Err(e) => {
            debug!(error = %e, "rejecting sizing request");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::from(&e)),
            ))
        }
    }
}
