use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{CartItemId, NewCartItem, QuantityUpdate, UserId};
use super::repository::CartRepository;
use super::service::{CartService, CartServiceError};
use crate::catalog::CatalogReader;
use crate::error::message_response;

/// Router builder exposing cart endpoints.
///
/// `GET /api/cart/:id` reads the id as a user id; `PUT` and `DELETE` read it as a cart line id.
pub fn cart_router<R, C>(service: Arc<CartService<R, C>>) -> Router
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    Router::new()
        .route("/api/cart", post(add_handler::<R, C>))
        .route(
            "/api/cart/:id",
            get(lines_handler::<R, C>)
                .put(update_handler::<R, C>)
                .delete(remove_handler::<R, C>),
        )
        .with_state(service)
}

pub(crate) async fn lines_handler<R, C>(
    State(service): State<Arc<CartService<R, C>>>,
    Path(user_id): Path<u32>,
) -> Response
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    match service.lines(UserId(user_id)) {
        Ok(lines) => (StatusCode::OK, Json(lines)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_handler<R, C>(
    State(service): State<Arc<CartService<R, C>>>,
    payload: Result<Json<NewCartItem>, JsonRejection>,
) -> Response
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    let Ok(Json(item)) = payload else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid cart item data");
    };

    match service.add(item) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R, C>(
    State(service): State<Arc<CartService<R, C>>>,
    Path(id): Path<u32>,
    payload: Result<Json<QuantityUpdate>, JsonRejection>,
) -> Response
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    let quantity = payload
        .ok()
        .and_then(|Json(update)| u32::try_from(update.quantity).ok());
    let Some(quantity) = quantity else {
        return error_response(CartServiceError::InvalidQuantity);
    };

    match service.update(CartItemId(id), quantity) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn remove_handler<R, C>(
    State(service): State<Arc<CartService<R, C>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    match service.remove(CartItemId(id)) {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CartServiceError) -> Response {
    match error {
        CartServiceError::InvalidQuantity => {
            message_response(StatusCode::BAD_REQUEST, "Invalid quantity")
        }
        CartServiceError::ProductNotFound(_) => {
            message_response(StatusCode::NOT_FOUND, "Product not found")
        }
        CartServiceError::ItemNotFound(_) => {
            message_response(StatusCode::NOT_FOUND, "Cart item not found")
        }
        other @ (CartServiceError::DanglingProduct(_) | CartServiceError::Repository(_)) => {
            message_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
