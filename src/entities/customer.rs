// 👤 Customer Entity
//
// Equality and hashing are derived from the name, so two `Customer` values
// built from the same name land in the same report bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer { name: name.into() }
    }

    pub fn try_new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName { entity: "customer" });
        }
        Ok(Customer { name })
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
