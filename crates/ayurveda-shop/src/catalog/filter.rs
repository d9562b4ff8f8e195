//! Catalog predicates shared by browsing endpoints and quiz recommendations.

use crate::dosha::DoshaAffinity;

use super::domain::Product;

/// Inclusive match: the entry carries the requested tag or is tagged `tri-dosha`.
/// Entries without a dosha tag never match.
pub fn matches_dosha(product: &Product, requested: DoshaAffinity) -> bool {
    match product.dosha_type {
        Some(affinity) => affinity == requested || affinity.is_universal(),
        None => false,
    }
}

/// Lazily filters `products` with [`matches_dosha`], keeping catalog order.
pub fn by_dosha<'a, I>(products: I, requested: DoshaAffinity) -> impl Iterator<Item = &'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(move |product| matches_dosha(product, requested))
}

pub fn matches_category(product: &Product, category: &str) -> bool {
    product.category == category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ProductId;
    use crate::dosha::Dosha;

    fn product(id: u32, dosha_type: Option<DoshaAffinity>) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: "Test entry".to_string(),
            price: 10.0,
            category: "body_oil".to_string(),
            dosha_type,
            image_url: "https://cdn.example/p.jpg".to_string(),
            in_stock: true,
            is_bestseller: false,
            is_new: false,
            rating: 4.0,
        }
    }

    #[test]
    fn universal_entries_match_every_dosha() {
        let tri = product(1, Some(DoshaAffinity::TriDosha));
        for dosha in Dosha::ordered() {
            assert!(matches_dosha(&tri, dosha.into()));
        }
    }

    #[test]
    fn untagged_entries_never_match() {
        let untagged = product(1, None);
        assert!(!matches_dosha(&untagged, DoshaAffinity::Vata));
        assert!(!matches_dosha(&untagged, DoshaAffinity::TriDosha));
    }

    #[test]
    fn requesting_tri_dosha_returns_only_universal_entries() {
        let catalog = vec![
            product(1, Some(DoshaAffinity::Vata)),
            product(2, Some(DoshaAffinity::TriDosha)),
            product(3, Some(DoshaAffinity::Kapha)),
        ];
        let ids: Vec<_> = by_dosha(&catalog, DoshaAffinity::TriDosha)
            .map(|product| product.id)
            .collect();
        assert_eq!(ids, vec![ProductId(2)]);
    }

    #[test]
    fn filtering_preserves_catalog_order() {
        let catalog = vec![
            product(1, Some(DoshaAffinity::Pitta)),
            product(2, Some(DoshaAffinity::Vata)),
            product(3, Some(DoshaAffinity::TriDosha)),
            product(4, Some(DoshaAffinity::Pitta)),
        ];
        let ids: Vec<_> = by_dosha(&catalog, DoshaAffinity::Pitta)
            .map(|product| product.id.0)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
