//! # HTTP Routes
//!
//! Binds verbs and paths to [`InventoryService`] calls and maps results to
//! responses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST   /inventory                 create     → 201, id as text        │
//! │  GET    /inventory                 read_all   → 200, JSON array        │
//! │  GET    /inventory/{id}            read       → 200, JSON item         │
//! │  PUT    /inventory/{id}            update     → 204                    │
//! │  DELETE /inventory/{id}            delete     → 204                    │
//! │  PUT    /inventory/{id}/checkout   checkout   → 204                    │
//! │  PUT    /inventory/{id}/checkin    check_in   → 204                    │
//! │  GET    /health                    store ping → 200 OK / 503           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures go through [`ApiError`]; handlers never pick a status for an
//! error themselves.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use stockpile_core::{ItemId, ValidationError};
use stockpile_db::Database;

use crate::dto::ItemResponse;
use crate::error::ApiResult;
use crate::service::{InventoryService, ItemInput};

/// Inventory endpoints.
pub fn inventory_router(service: InventoryService) -> Router {
    Router::new()
        .route("/inventory", get(list_items).post(create_item))
        .route(
            "/inventory/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/inventory/{id}/checkout", put(checkout_item))
        .route("/inventory/{id}/checkin", put(check_in_item))
        .with_state(service)
}

/// Liveness endpoint backed by a store round-trip.
pub fn health_router(db: Database) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(db)
}

// =============================================================================
// Extraction
// =============================================================================

fn parse_id(raw: &str) -> Result<ItemId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::new("id", format!("{raw:?} is not an integer")))
}

fn parse_body(body: Result<Json<ItemInput>, JsonRejection>) -> Result<ItemInput, ValidationError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ValidationError::new("body", rejection.body_text()))
}

// =============================================================================
// Handlers
// =============================================================================

async fn create_item(
    State(service): State<InventoryService>,
    body: Result<Json<ItemInput>, JsonRejection>,
) -> ApiResult<(StatusCode, String)> {
    let input = parse_body(body)?;
    let item = service.create(input).await?;
    Ok((StatusCode::CREATED, item.id().to_string()))
}

async fn list_items(State(service): State<InventoryService>) -> ApiResult<Json<Vec<ItemResponse>>> {
    let items = service.read_all().await?;
    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

async fn get_item(
    State(service): State<InventoryService>,
    Path(id): Path<String>,
) -> ApiResult<Json<ItemResponse>> {
    let item = service.read(parse_id(&id)?).await?;
    Ok(Json(ItemResponse::from(&item)))
}

async fn update_item(
    State(service): State<InventoryService>,
    Path(id): Path<String>,
    body: Result<Json<ItemInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let input = parse_body(body)?;
    service.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(service): State<InventoryService>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    service.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn checkout_item(
    State(service): State<InventoryService>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    service.checkout(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn check_in_item(
    State(service): State<InventoryService>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    service.check_in(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint.
async fn health_handler(State(db): State<Database>) -> impl IntoResponse {
    if db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), ItemId::new(42));

        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(err.to_string(), r#"invalid id: "abc" is not an integer"#);
    }
}
