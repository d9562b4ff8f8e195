use std::sync::Arc;

use tracing::info;

use super::domain::{NewProduct, Product, ProductId};
use super::filter::{by_dosha, matches_category};
use super::repository::{CatalogReader, CatalogWriter};
use crate::dosha::DoshaAffinity;
use crate::error::FieldError;
use crate::store::RepositoryError;

/// Browsing and administration facade over the catalog store.
pub struct CatalogService<C> {
    catalog: Arc<C>,
}

impl<C> CatalogService<C>
where
    C: CatalogReader + CatalogWriter + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn all(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.catalog.all_products()?)
    }

    pub fn bestsellers(&self) -> Result<Vec<Product>, CatalogServiceError> {
        self.select(|product| product.is_bestseller)
    }

    pub fn new_arrivals(&self) -> Result<Vec<Product>, CatalogServiceError> {
        self.select(|product| product.is_new)
    }

    pub fn by_category(&self, category: &str) -> Result<Vec<Product>, CatalogServiceError> {
        self.select(|product| matches_category(product, category))
    }

    /// Shop-by-dosha browsing: same inclusive predicate as quiz recommendations, untruncated.
    pub fn by_dosha(&self, requested: DoshaAffinity) -> Result<Vec<Product>, CatalogServiceError> {
        let products = self.catalog.all_products()?;
        Ok(by_dosha(&products, requested).cloned().collect())
    }

    pub fn get(&self, id: ProductId) -> Result<Product, CatalogServiceError> {
        self.catalog
            .product(id)?
            .ok_or(CatalogServiceError::NotFound(id))
    }

    pub fn create(&self, product: NewProduct) -> Result<Product, CatalogServiceError> {
        product.validate().map_err(CatalogServiceError::Invalid)?;
        let stored = self.catalog.insert_product(product)?;
        info!(product_id = %stored.id, category = %stored.category, "catalog entry created");
        Ok(stored)
    }

    fn select<F>(&self, predicate: F) -> Result<Vec<Product>, CatalogServiceError>
    where
        F: Fn(&Product) -> bool,
    {
        let products = self.catalog.all_products()?;
        Ok(products.into_iter().filter(|p| predicate(p)).collect())
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("invalid product data")]
    Invalid(Vec<FieldError>),
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
