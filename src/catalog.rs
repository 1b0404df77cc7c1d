//! Catalog Synchronization
//!
//! Handlers behind the dashboard's add/edit/delete/load flows. Each handler
//! talks to the food service and returns the [`Reconciliation`] the view
//! should apply to its local list once the response has arrived.
//!
//! Failure policy: add and edit log and leave the list alone; load and
//! delete have no fallback and simply leave whatever was shown before.

use crate::api::{ApiError, CatalogApi};
use crate::models::{Food, FoodPatch, NewFood};

/// How the local food list changes after an operation settles
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Wholesale replacement from a full fetch
    ReplaceAll(Vec<Food>),
    /// New record appended at the end
    Append(Food),
    /// Entry with the same id swapped for this record
    Replace(Food),
    Unchanged,
}

impl Reconciliation {
    pub fn apply(self, foods: &mut Vec<Food>) {
        match self {
            Reconciliation::ReplaceAll(fresh) => *foods = fresh,
            Reconciliation::Append(food) => foods.push(food),
            Reconciliation::Replace(updated) => {
                for food in foods.iter_mut().filter(|f| f.id == updated.id) {
                    *food = updated.clone();
                }
            }
            Reconciliation::Unchanged => {}
        }
    }
}

/// Initial fetch on mount
pub async fn load_foods<A: CatalogApi + ?Sized>(api: &A) -> Reconciliation {
    match api.list_foods().await {
        Ok(foods) => {
            log::debug!("loaded {} foods", foods.len());
            Reconciliation::ReplaceAll(foods)
        }
        Err(e) => {
            log::debug!("initial load failed: {e}");
            Reconciliation::Unchanged
        }
    }
}

/// New foods always start available, whatever the form said
pub async fn add_food<A: CatalogApi + ?Sized>(api: &A, candidate: NewFood) -> Reconciliation {
    let candidate = NewFood {
        available: true,
        ..candidate
    };
    match api.create_food(&candidate).await {
        Ok(created) => {
            log::info!("created food {}", created.id);
            Reconciliation::Append(created)
        }
        Err(e) => {
            log::error!("failed to create food {:?}: {e}", candidate.name);
            Reconciliation::Unchanged
        }
    }
}

/// Save the edit form over the food that was open in it.
///
/// The returned record's id picks the entry to replace.
pub async fn edit_food<A: CatalogApi + ?Sized>(
    api: &A,
    editing: &Food,
    patch: FoodPatch,
) -> Reconciliation {
    match api.update_food(editing, &patch).await {
        Ok(updated) => {
            log::info!("updated food {}", updated.id);
            Reconciliation::Replace(updated)
        }
        Err(e) => {
            log::error!("failed to update food {}: {e}", editing.id);
            Reconciliation::Unchanged
        }
    }
}

/// Delete, then reload the whole list regardless of how the delete went
pub async fn delete_food<A: CatalogApi + ?Sized>(api: &A, id: u32) -> Reconciliation {
    let _ = api.delete_food(id).await;
    match api.list_foods().await {
        Ok(foods) => Reconciliation::ReplaceAll(foods),
        Err(e) => {
            log::debug!("reload after deleting food {id} failed: {e}");
            Reconciliation::Unchanged
        }
    }
}

/// Flip availability on the service only.
///
/// Called straight from the card; the dashboard list is not reconciled, so
/// it keeps the old flag until something else reloads it.
pub async fn toggle_availability<A: CatalogApi + ?Sized>(
    api: &A,
    food: &Food,
) -> Result<Food, ApiError> {
    api.update_food(food, &FoodPatch::availability(!food.available))
        .await
}
