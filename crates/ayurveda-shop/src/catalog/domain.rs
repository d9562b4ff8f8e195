use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dosha::DoshaAffinity;
use crate::error::FieldError;

/// Identifier wrapper for catalog entries. Assigned by the catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored catalog entry as exposed to storefront clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Free-form shelf such as `face_cleanser` or `wellness_tea`.
    pub category: String,
    pub dosha_type: Option<DoshaAffinity>,
    pub image_url: String,
    pub in_stock: bool,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub rating: f32,
}

/// Payload accepted when adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub dosha_type: Option<DoshaAffinity>,
    pub image_url: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_rating")]
    pub rating: f32,
}

fn default_in_stock() -> bool {
    true
}

fn default_rating() -> f32 {
    NewProduct::MAX_RATING
}

impl NewProduct {
    pub const MAX_RATING: f32 = 5.0;

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
            ("imageUrl", &self.image_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "must not be empty"));
            }
        }

        if !self.price.is_finite() || self.price < 0.0 {
            errors.push(FieldError::new("price", "must be a non-negative amount"));
        }

        if !(0.0..=Self::MAX_RATING).contains(&self.rating) {
            errors.push(FieldError::new("rating", "must be between 0 and 5"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            dosha_type: self.dosha_type,
            image_url: self.image_url,
            in_stock: self.in_stock,
            is_bestseller: self.is_bestseller,
            is_new: self.is_new,
            rating: self.rating,
        }
    }
}
