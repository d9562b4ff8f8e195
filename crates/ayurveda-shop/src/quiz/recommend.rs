use crate::catalog::{by_dosha, Product};
use crate::config::StorefrontConfig;
use crate::dosha::Dosha;

/// Picks the first `limit` catalog entries matching a dominant dosha, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationSelector {
    limit: usize,
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::new(StorefrontConfig::DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl RecommendationSelector {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn recommend(&self, dominant: Dosha, catalog: &[Product]) -> Vec<Product> {
        by_dosha(catalog, dominant.into())
            .take(self.limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::dosha::DoshaAffinity;

    fn product(id: u32, dosha_type: DoshaAffinity) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: "Test entry".to_string(),
            price: 20.0,
            category: "face_serum".to_string(),
            dosha_type: Some(dosha_type),
            image_url: "https://cdn.example/p.jpg".to_string(),
            in_stock: true,
            is_bestseller: false,
            is_new: false,
            rating: 4.5,
        }
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|product| product.id.0).collect()
    }

    #[test]
    fn truncates_to_limit_in_catalog_order() {
        let catalog = vec![
            product(1, DoshaAffinity::Kapha),
            product(2, DoshaAffinity::Vata),
            product(3, DoshaAffinity::TriDosha),
            product(4, DoshaAffinity::Vata),
            product(5, DoshaAffinity::Vata),
        ];
        let picks = RecommendationSelector::default().recommend(Dosha::Vata, &catalog);
        assert_eq!(ids(&picks), vec![2, 3, 4]);
    }

    #[test]
    fn returns_every_match_below_limit_without_padding() {
        let catalog = vec![
            product(1, DoshaAffinity::Kapha),
            product(2, DoshaAffinity::Pitta),
            product(3, DoshaAffinity::Vata),
        ];
        let picks = RecommendationSelector::default().recommend(Dosha::Pitta, &catalog);
        assert_eq!(ids(&picks), vec![2]);
    }

    #[test]
    fn empty_match_set_is_not_an_error() {
        let catalog = vec![product(1, DoshaAffinity::Kapha)];
        let picks = RecommendationSelector::default().recommend(Dosha::Vata, &catalog);
        assert!(picks.is_empty());
    }

    #[test]
    fn universal_entry_is_recommended_for_every_dosha() {
        let catalog = vec![
            product(1, DoshaAffinity::TriDosha),
            product(2, DoshaAffinity::Vata),
            product(3, DoshaAffinity::Pitta),
            product(4, DoshaAffinity::Kapha),
        ];
        for dosha in Dosha::ordered() {
            let picks = RecommendationSelector::new(1).recommend(dosha, &catalog);
            assert_eq!(ids(&picks), vec![1], "dominant {dosha}");
        }
    }
}
