use ayurveda_shop::catalog::seed::default_products;
use ayurveda_shop::catalog::CatalogCsvImporter;
use ayurveda_shop::error::AppError;
use ayurveda_shop::store::InMemoryStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Seeds a store from a catalog CSV when one is given, otherwise from the built-in fixtures.
pub(crate) fn load_store(catalog_csv: Option<&Path>) -> Result<InMemoryStore, AppError> {
    let products = match catalog_csv {
        Some(path) => {
            let products = CatalogCsvImporter::from_path(path)?;
            info!(path = %path.display(), products = products.len(), "catalog imported");
            products
        }
        None => default_products(),
    };

    Ok(InMemoryStore::seeded(products)?)
}

/// Parses a `question=tag` pair from the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, tag) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=TAG, got '{raw}'"))?;

    let question = question.trim();
    if question.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }

    Ok((question.to_string(), tag.trim().to_string()))
}
