//! Ayurvedic wellness storefront: catalog browsing, carts, practitioner consultations,
//! and the dosha quiz with its product recommendations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod consultation;
pub mod dosha;
pub mod error;
pub mod quiz;
pub mod router;
pub mod store;
pub mod telemetry;

pub use router::storefront_router;
