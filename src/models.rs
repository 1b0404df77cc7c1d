//! Frontend Models
//!
//! Catalog records exchanged with the food service.

use serde::{Deserialize, Serialize};

/// Food record (matches the `/foods` resource)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Decimal amount kept as text; never used for arithmetic
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Create candidate: a food before the service assigns its id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Fields to overwrite on an existing food
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl FoodPatch {
    /// Patch touching only the availability flag
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }

    /// Full record with this patch merged over `current`. The id is never patched.
    pub fn apply_to(&self, current: &Food) -> Food {
        Food {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            price: self.price.clone().unwrap_or_else(|| current.price.clone()),
            available: self.available.unwrap_or(current.available),
            image: self.image.clone().unwrap_or_else(|| current.image.clone()),
        }
    }
}
