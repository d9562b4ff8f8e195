use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

/// Identifier wrapper for cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(pub u32);

/// Owner key for a cart. Account management lives outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl NewCartItem {
    pub fn into_item(self, id: CartItemId) -> CartItem {
        CartItem {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

/// Cart line joined with its catalog entry for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Product,
}

/// Body of `PUT /api/cart/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_defaults_to_one() {
        let item: NewCartItem =
            serde_json::from_value(json!({ "userId": 1, "productId": 4 })).expect("parses");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.product_id, ProductId(4));
    }
}
