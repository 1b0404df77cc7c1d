//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Reconciliation;
use crate::models::Food;

/// State owned by the dashboard for the session
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods as last reconciled with the service, in display order
    pub foods: Vec<Food>,
    /// Food opened in the edit modal
    pub editing_food: Option<Food>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a settled operation to whatever the list holds right now
pub fn store_reconcile(store: &DashboardStore, reconciliation: Reconciliation) {
    if reconciliation == Reconciliation::Unchanged {
        return;
    }
    reconciliation.apply(&mut store.foods().write());
}

/// Remember which food the edit modal works on
pub fn store_set_editing(store: &DashboardStore, food: Food) {
    *store.editing_food().write() = Some(food);
}
