use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::NewProduct;
use crate::dosha::DoshaAffinity;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv { row: usize, source: csv::Error },
    UnknownDosha { row: usize, value: String },
    Invalid { row: usize, reason: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv { row, source } => {
                write!(f, "invalid catalog CSV data on row {}: {}", row, source)
            }
            CatalogImportError::UnknownDosha { row, value } => {
                write!(f, "row {} has unknown dosha type '{}'", row, value)
            }
            CatalogImportError::Invalid { row, reason } => {
                write!(f, "row {} is not a valid product: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv { source, .. } => Some(source),
            CatalogImportError::UnknownDosha { .. } | CatalogImportError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Loads catalog seed data from a CSV export with a header row.
pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewProduct>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewProduct>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut products = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // Row 1 is the header.
            let row = index + 2;
            let record = record.map_err(|source| CatalogImportError::Csv { row, source })?;
            let product = record.into_new_product(row)?;
            product
                .validate()
                .map_err(|errors| CatalogImportError::Invalid {
                    row,
                    reason: errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
            products.push(product);
        }

        Ok(products)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    description: String,
    price: f64,
    category: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    dosha_type: Option<String>,
    image_url: String,
    #[serde(default)]
    in_stock: Option<bool>,
    #[serde(default)]
    is_bestseller: Option<bool>,
    #[serde(default)]
    is_new: Option<bool>,
    #[serde(default)]
    rating: Option<f32>,
}

impl CatalogRow {
    fn into_new_product(self, row: usize) -> Result<NewProduct, CatalogImportError> {
        let dosha_type = match self.dosha_type {
            Some(raw) => Some(
                DoshaAffinity::from_tag(&raw)
                    .ok_or(CatalogImportError::UnknownDosha { row, value: raw })?,
            ),
            None => None,
        };

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            dosha_type,
            image_url: self.image_url,
            in_stock: self.in_stock.unwrap_or(true),
            is_bestseller: self.is_bestseller.unwrap_or(false),
            is_new: self.is_new.unwrap_or(false),
            rating: self.rating.unwrap_or(NewProduct::MAX_RATING),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "name,description,price,category,dosha_type,image_url,in_stock,is_bestseller,is_new,rating\n";

    fn import(body: &str) -> Result<Vec<NewProduct>, CatalogImportError> {
        let csv = format!("{HEADER}{body}");
        CatalogCsvImporter::from_reader(Cursor::new(csv.into_bytes()))
    }

    #[test]
    fn parses_rows_and_applies_defaults() {
        let products = import(
            "Rose Petal Cleanser,Gentle rose cleanser,34,face_cleanser,pitta,https://cdn.example/rose.jpg,true,true,false,4.8\n\
             Herbal Tea,Loose leaf blend,12.5,wellness_tea,,https://cdn.example/tea.jpg,,,,\n",
        )
        .expect("import succeeds");

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].dosha_type, Some(DoshaAffinity::Pitta));
        assert!(products[0].is_bestseller);
        assert_eq!(products[1].dosha_type, None);
        assert!(products[1].in_stock);
        assert_eq!(products[1].rating, 5.0);
    }

    #[test]
    fn reports_unknown_dosha_with_row_number() {
        let err = import(
            "Neem Scrub,Purifying scrub,32,body_scrub,kapha,https://cdn.example/neem.jpg,true,false,true,4.6\n\
             Ghee Balm,Rich balm,20,body_butter,tridosha,https://cdn.example/ghee.jpg,true,false,false,4.1\n",
        )
        .unwrap_err();

        match err {
            CatalogImportError::UnknownDosha { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "tridosha");
            }
            other => panic!("expected unknown dosha error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_price() {
        let err = import(
            "Amla Oil,Hair oil,cheap,hair_oil,vata,https://cdn.example/amla.jpg,true,false,false,4.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogImportError::Csv { row: 2, .. }));
    }

    #[test]
    fn rejects_rows_failing_product_validation() {
        let err = import(
            "Amla Oil,Hair oil,-4,hair_oil,vata,https://cdn.example/amla.jpg,true,false,false,4.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogImportError::Invalid { row: 2, .. }));
        assert!(err.to_string().contains("price"));
    }
}
