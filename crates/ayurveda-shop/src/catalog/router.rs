use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::domain::{NewProduct, ProductId};
use super::repository::{CatalogReader, CatalogWriter};
use super::service::{CatalogService, CatalogServiceError};
use crate::dosha::DoshaAffinity;
use crate::error::{message_response, validation_response, FieldError};

/// Router builder exposing product browsing and creation endpoints.
pub fn catalog_router<C>(service: Arc<CatalogService<C>>) -> Router
where
    C: CatalogReader + CatalogWriter + 'static,
{
    Router::new()
        .route(
            "/api/products",
            get(list_handler::<C>).post(create_handler::<C>),
        )
        .route("/api/products/bestsellers", get(bestsellers_handler::<C>))
        .route("/api/products/new", get(new_arrivals_handler::<C>))
        .route(
            "/api/products/category/:category",
            get(category_handler::<C>),
        )
        .route("/api/products/dosha/:dosha_type", get(dosha_handler::<C>))
        .route("/api/products/:id", get(product_handler::<C>))
        .with_state(service)
}

pub(crate) async fn list_handler<C>(State(service): State<Arc<CatalogService<C>>>) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    respond(service.all())
}

pub(crate) async fn bestsellers_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    respond(service.bestsellers())
}

pub(crate) async fn new_arrivals_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    respond(service.new_arrivals())
}

pub(crate) async fn category_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
    Path(category): Path<String>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    respond(service.by_category(&category))
}

pub(crate) async fn dosha_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
    Path(dosha_type): Path<String>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    match dosha_type.parse::<DoshaAffinity>() {
        Ok(affinity) => respond(service.by_dosha(affinity)),
        Err(error) => message_response(StatusCode::BAD_REQUEST, error.to_string()),
    }
}

pub(crate) async fn product_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
    Path(id): Path<u32>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    match service.get(ProductId(id)) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<C>(
    State(service): State<Arc<CatalogService<C>>>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Response
where
    C: CatalogReader + CatalogWriter + 'static,
{
    let Json(product) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let errors = [FieldError::new("body", rejection.body_text())];
            return validation_response("Invalid product data", &errors);
        }
    };

    match service.create(product) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

fn respond<T: serde::Serialize>(result: Result<T, CatalogServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CatalogServiceError) -> Response {
    match error {
        CatalogServiceError::Invalid(errors) => validation_response("Invalid product data", &errors),
        CatalogServiceError::NotFound(_) => {
            message_response(StatusCode::NOT_FOUND, "Product not found")
        }
        CatalogServiceError::Repository(error) => {
            message_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
