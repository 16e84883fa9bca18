// 💳 Payment Entity - one purchase by one customer on one date

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Customer, Product};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub products: Vec<Product>,
    pub purchase_date: NaiveDate,
    pub customer: Customer,
}

impl Payment {
    pub fn new(products: Vec<Product>, purchase_date: NaiveDate, customer: Customer) -> Self {
        Payment {
            products,
            purchase_date,
            customer,
        }
    }

    /// Exact sum of the product prices (zero for an empty payment)
    pub fn total(&self) -> Decimal {
        self.products.iter().map(|product| product.price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
