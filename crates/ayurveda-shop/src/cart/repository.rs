use super::domain::{CartItem, CartItemId, NewCartItem, UserId};
use crate::catalog::ProductId;
use crate::store::RepositoryError;

/// Storage abstraction for cart lines.
pub trait CartRepository: Send + Sync {
    fn items_for_user(&self, user: UserId) -> Result<Vec<CartItem>, RepositoryError>;
    fn find(&self, user: UserId, product: ProductId) -> Result<Option<CartItem>, RepositoryError>;
    fn insert_item(&self, item: NewCartItem) -> Result<CartItem, RepositoryError>;
    fn update_quantity(
        &self,
        id: CartItemId,
        quantity: u32,
    ) -> Result<Option<CartItem>, RepositoryError>;
    /// Returns `false` when no line had this id.
    fn remove_item(&self, id: CartItemId) -> Result<bool, RepositoryError>;
}
