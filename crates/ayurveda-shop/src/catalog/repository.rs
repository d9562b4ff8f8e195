use super::domain::{NewProduct, Product, ProductId};
use crate::store::RepositoryError;

/// Read access to the product catalog. Implementations return entries in insertion order.
pub trait CatalogReader: Send + Sync {
    fn all_products(&self) -> Result<Vec<Product>, RepositoryError>;
    fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}

/// Write access used by catalog administration and seeding.
pub trait CatalogWriter: Send + Sync {
    fn insert_product(&self, product: NewProduct) -> Result<Product, RepositoryError>;
}
