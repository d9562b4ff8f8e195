use std::sync::Arc;

use axum::Router;

use crate::cart::{cart_router, CartService};
use crate::catalog::{catalog_router, CatalogService};
use crate::config::StorefrontConfig;
use crate::consultation::{consultation_router, ConsultationService};
use crate::quiz::{quiz_router, DoshaQuizService, RecommendationSelector};
use crate::store::InMemoryStore;

/// Every storefront API route, backed by one shared store.
pub fn storefront_router(store: Arc<InMemoryStore>, config: &StorefrontConfig) -> Router {
    let selector = RecommendationSelector::new(config.recommendation_limit);

    Router::new()
        .merge(catalog_router(Arc::new(CatalogService::new(store.clone()))))
        .merge(quiz_router(Arc::new(DoshaQuizService::new(
            store.clone(),
            store.clone(),
            selector,
        ))))
        .merge(cart_router(Arc::new(CartService::new(
            store.clone(),
            store.clone(),
        ))))
        .merge(consultation_router(Arc::new(ConsultationService::new(
            store.clone(),
            store,
        ))))
}
