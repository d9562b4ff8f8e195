use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{CartItem, CartItemId, CartLine, NewCartItem, UserId};
use super::repository::CartRepository;
use crate::catalog::{CatalogReader, ProductId};
use crate::store::RepositoryError;

/// Cart operations backed by the cart store, with product lookups against the catalog.
pub struct CartService<R, C> {
    cart: Arc<R>,
    catalog: Arc<C>,
}

impl<R, C> CartService<R, C>
where
    R: CartRepository + 'static,
    C: CatalogReader + 'static,
{
    pub fn new(cart: Arc<R>, catalog: Arc<C>) -> Self {
        Self { cart, catalog }
    }

    /// Adds a line, merging into an existing line for the same user and product.
    pub fn add(&self, item: NewCartItem) -> Result<CartItem, CartServiceError> {
        if item.quantity == 0 {
            return Err(CartServiceError::InvalidQuantity);
        }
        if self.catalog.product(item.product_id)?.is_none() {
            return Err(CartServiceError::ProductNotFound(item.product_id));
        }

        let stored = match self.cart.find(item.user_id, item.product_id)? {
            Some(existing) => {
                let quantity = existing.quantity.saturating_add(item.quantity);
                self.cart
                    .update_quantity(existing.id, quantity)?
                    .ok_or(CartServiceError::ItemNotFound(existing.id))?
            }
            None => self.cart.insert_item(item)?,
        };

        info!(
            user = %stored.user_id,
            product = %stored.product_id,
            quantity = stored.quantity,
            "cart line saved"
        );
        Ok(stored)
    }

    pub fn update(&self, id: CartItemId, quantity: u32) -> Result<CartItem, CartServiceError> {
        if quantity == 0 {
            return Err(CartServiceError::InvalidQuantity);
        }

        self.cart
            .update_quantity(id, quantity)?
            .ok_or(CartServiceError::ItemNotFound(id))
    }

    pub fn remove(&self, id: CartItemId) -> Result<(), CartServiceError> {
        if self.cart.remove_item(id)? {
            info!(item = %id, "cart line removed");
            Ok(())
        } else {
            Err(CartServiceError::ItemNotFound(id))
        }
    }

    pub fn lines(&self, user: UserId) -> Result<Vec<CartLine>, CartServiceError> {
        self.cart
            .items_for_user(user)?
            .into_iter()
            .map(|item| -> Result<CartLine, CartServiceError> {
                match self.catalog.product(item.product_id)? {
                    Some(product) => Ok(CartLine { item, product }),
                    None => {
                        warn!(item = %item.id, product = %item.product_id, "cart references missing product");
                        Err(CartServiceError::DanglingProduct(item.product_id))
                    }
                }
            })
            .collect()
    }
}

/// Error raised by the cart service.
#[derive(Debug, thiserror::Error)]
pub enum CartServiceError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error("cart item {0} not found")]
    ItemNotFound(CartItemId),
    #[error("product with id {0} not found")]
    DanglingProduct(ProductId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
