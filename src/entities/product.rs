// 🎵 Product Entity - a downloadable item with a price
//
// Identity is the value: two products with the same name, file and price are
// the same product. Reports group products by NAME only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// Label only - the file is never opened
    pub file: PathBuf,

    pub price: Decimal,
}

impl Product {
    /// Create a product without domain checks (negative prices are accepted)
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>, price: Decimal) -> Self {
        Product {
            name: name.into(),
            file: file.into(),
            price,
        }
    }

    /// Create a product, rejecting blank names and negative prices
    pub fn try_new(
        name: impl Into<String>,
        file: impl Into<PathBuf>,
        price: Decimal,
    ) -> StoreResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(StoreError::EmptyName { entity: "product" });
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(StoreError::NegativePrice { name, price });
        }

        Ok(Product::new(name, file, price))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
