//! Product catalog: domain types, the shared dosha predicate, storage traits, and routes.

pub mod domain;
pub mod filter;
mod import;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

pub use domain::{NewProduct, Product, ProductId};
pub use filter::{by_dosha, matches_dosha};
pub use import::{CatalogCsvImporter, CatalogImportError};
pub use repository::{CatalogReader, CatalogWriter};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceError};
