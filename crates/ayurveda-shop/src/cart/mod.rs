//! Shopping cart lines keyed by user, with quantity merging on repeat adds.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{CartItem, CartItemId, CartLine, NewCartItem, UserId};
pub use repository::CartRepository;
pub use router::cart_router;
pub use service::{CartService, CartServiceError};
