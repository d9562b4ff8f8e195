use super::domain::NewProduct;
use crate::dosha::DoshaAffinity::{self, Kapha, Pitta, TriDosha, Vata};

const IMAGE_HOST: &str = "https://images.unsplash.com";

struct Flags {
    bestseller: bool,
    new: bool,
}

const BESTSELLER: Flags = Flags {
    bestseller: true,
    new: false,
};
const NEW: Flags = Flags {
    bestseller: false,
    new: true,
};
const BOTH: Flags = Flags {
    bestseller: true,
    new: true,
};
const PLAIN: Flags = Flags {
    bestseller: false,
    new: false,
};

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    dosha: DoshaAffinity,
    photo: &str,
    flags: Flags,
    rating: f32,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        dosha_type: Some(dosha),
        image_url: format!("{IMAGE_HOST}/{photo}"),
        in_stock: true,
        is_bestseller: flags.bestseller,
        is_new: flags.new,
        rating,
    }
}

/// Default storefront catalog, in shelf order.
#[rustfmt::skip]
pub fn default_products() -> Vec<NewProduct> {
    vec![
        entry("Rose Petal Cleanser", "Gentle cleanser infused with rose petals and aloe vera for sensitive skin.", 34.0, "face_cleanser", Pitta, "photo-1556228578-8d89313c5489", BESTSELLER, 4.8),
        entry("Turmeric Brightening Mask", "Illuminating face mask with turmeric and saffron for radiant skin.", 45.0, "face_mask", Pitta, "photo-1596755389378-c31d21fd1273", NEW, 4.7),
        entry("Neem Purifying Serum", "Clarifying serum with neem and tea tree for acne-prone skin.", 52.0, "face_serum", Pitta, "photo-1608248543803-ba4f8c70ae0b", NEW, 4.6),
        entry("Almond Night Cream", "Rich night cream with sweet almond oil and shea butter.", 48.0, "face_moisturizer", Vata, "photo-1612532774276-cfa73aaa21b3", BESTSELLER, 4.9),
        entry("Hibiscus Hair Mask", "Deep conditioning mask with hibiscus and coconut for dry hair.", 38.0, "hair_treatment", Vata, "photo-1526947425960-945c6e72858f", BESTSELLER, 4.8),
        entry("Bhringraj Hair Oil", "Traditional hair growth oil with bhringraj and amla.", 42.0, "hair_oil", Pitta, "photo-1585751119414-ef2636f8adf1", NEW, 4.7),
        entry("Herbal Hair Cleanser", "Gentle cleansing powder with shikakai and reetha.", 28.0, "hair_cleanser", Kapha, "photo-1535585209827-a15fcdbc4c2d", NEW, 4.5),
        entry("Scalp Treatment Serum", "Intensive scalp treatment with neem and rosemary.", 46.0, "hair_treatment", Pitta, "photo-1626285861696-9f0bf5a49c6d", BESTSELLER, 4.6),
        entry("Lavender Body Oil", "Calming body oil with lavender and sweet almond.", 36.0, "body_oil", Vata, "photo-1608248543803-ba4f8c70ae0b", BESTSELLER, 4.8),
        entry("Sandalwood Body Butter", "Rich body butter with sandalwood and shea.", 42.0, "body_butter", Vata, "photo-1612532774276-cfa73aaa21b3", NEW, 4.7),
        entry("Neem Body Scrub", "Purifying body scrub with neem and walnut shells.", 32.0, "body_scrub", Kapha, "photo-1535585209827-a15fcdbc4c2d", NEW, 4.6),
        entry("Rose Body Lotion", "Hydrating body lotion with rose and aloe vera.", 38.0, "body_lotion", Pitta, "photo-1626285861696-9f0bf5a49c6d", BESTSELLER, 4.9),
        entry("Ashwagandha Tablets", "Stress-relief supplements with organic ashwagandha.", 48.0, "wellness_supplement", TriDosha, "photo-1584017911766-d451b3d0e843", BESTSELLER, 4.9),
        entry("Triphala Powder", "Digestive wellness powder with three fruits.", 32.0, "wellness_supplement", TriDosha, "photo-1597076545399-9dd44c050a17", NEW, 4.7),
        entry("Chyawanprash", "Traditional immunity boosting formula.", 45.0, "wellness_supplement", TriDosha, "photo-1584017911766-d451b3d0e843", BESTSELLER, 4.8),
        entry("Stress Relief Tea", "Calming blend with holy basil and chamomile.", 24.0, "wellness_tea", Vata, "photo-1597076545399-9dd44c050a17", NEW, 4.6),
        entry("Invigorating Clay Cleanser", "Energizing cleanser for Kapha skin with purifying clay and stimulating herbs.", 38.0, "face_cleanser", Kapha, "photo-1608248543803-ba4f8c70ae0b", NEW, 5.0),
        entry("Warming Spice Cleanser", "Stimulating cleanser with ginger and black pepper to invigorate Kapha skin.", 42.0, "face_cleanser", Kapha, "photo-1616004667892-d348f7349d39", NEW, 4.7),
        entry("Lightweight Gel Moisturizer", "Oil-free gel moisturizer for Kapha skin. Hydrates without heaviness.", 45.0, "face_moisturizer", Kapha, "photo-1617897903246-719242758050", NEW, 4.5),
        entry("Balancing Day Cream", "Light, non-greasy day cream with tulsi and neem for Kapha balance.", 48.0, "face_moisturizer", Kapha, "photo-1620916566398-39f1143ab7be", BESTSELLER, 4.9),
        entry("Clarifying Herbal Serum", "Blend of astringent herbs to balance and purify Kapha skin.", 52.0, "face_serum", Kapha, "photo-1594824476967-48c8b964273f", NEW, 4.8),
        entry("Brightening Complex Serum", "Serum with triphala and vitamin C to brighten dull Kapha skin.", 58.0, "face_serum", Kapha, "photo-1620756236308-65c3ef5d25f3", BOTH, 4.9),
        entry("Detoxifying Clay Mask", "Deep-cleansing mask with kaolin clay and warming spices for Kapha skin.", 48.0, "face_mask", Kapha, "photo-1608248544136-646675a43a38", BESTSELLER, 4.9),
        entry("Exfoliating Enzyme Mask", "Enzymatic mask with papaya and pineapple to gently exfoliate Kapha skin.", 46.0, "face_mask", Kapha, "photo-1614159102346-8c5239719ae3", NEW, 4.6),
        entry("Balancing Facial Cleansing Oil", "Suited to Pitta skin. Calms and purifies.", 42.0, "face", Pitta, "photo-1608248543803-ba4f8c70ae0b", BESTSELLER, 5.0),
        entry("Nourishing Hair Oil Elixir", "Rich in herbs to strengthen Vata hair types.", 36.0, "hair", Vata, "photo-1617897903246-719242758050", NEW, 4.0),
        entry("Grounding Body Butter", "Deep moisture for Kapha types. Invigorating.", 48.0, "body", Kapha, "photo-1608248544136-646675a43a38", PLAIN, 5.0),
        entry("Tri-Dosha Balance Supplements", "Daily adaptogens for all constitution types.", 54.0, "wellness", TriDosha, "photo-1594824476967-48c8b964273f", PLAIN, 5.0),
    ]
}
