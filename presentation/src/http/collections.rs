//! Generic document CRUD over the routed collections

use super::router::AppState;
use artisan_application::{StoreError, into_fields};
use artisan_domain::CollectionName;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use tracing::error;

/// Error replies for the CRUD routes
#[derive(Debug)]
pub(crate) enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::InvalidDocument => ApiError::BadRequest(err.to_string()),
            StoreError::Unavailable(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                error!(error = %message, "Document store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

type ApiResult = Result<Response, ApiError>;

/// Unknown collections are indistinguishable from unknown routes
fn collection(name: &str) -> Result<CollectionName, ApiError> {
    CollectionName::parse_routed(name).map_err(|_| ApiError::NotFound)
}

pub(crate) async fn create_artisan(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult {
    let doc = state
        .store
        .create(CollectionName::Artisans, into_fields(body)?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"id": doc.id, "message": "Artisan created"})),
    )
        .into_response())
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult {
    let docs = state.store.list(collection(&name)?).await?;
    let body: Vec<Value> = docs.iter().map(|d| d.to_json()).collect();
    Ok(Json(body).into_response())
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let collection = collection(&name)?;
    let doc = state.store.create(collection, into_fields(body)?).await?;
    Ok((StatusCode::CREATED, Json(json!({"id": doc.id}))).into_response())
}

pub(crate) async fn get(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> ApiResult {
    let doc = state.store.get(collection(&name)?, &id).await?;
    Ok(Json(doc.to_json()).into_response())
}

pub(crate) async fn replace(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult {
    let collection = collection(&name)?;
    state
        .store
        .replace(collection, &id, into_fields(body)?)
        .await?;
    Ok(Json(json!({"id": id, "updated": true})).into_response())
}

pub(crate) async fn patch(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult {
    let collection = collection(&name)?;
    state.store.patch(collection, &id, into_fields(body)?).await?;
    Ok(Json(json!({"id": id, "patched": true})).into_response())
}

pub(crate) async fn delete(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> ApiResult {
    state.store.delete(collection(&name)?, &id).await?;
    Ok(Json(json!({"id": id, "deleted": true})).into_response())
}
