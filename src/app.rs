//! Food Dashboard App
//!
//! Dashboard page: owns the food list and reconciles it with the service
//! after every add, edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{create_modal_signals, open_modal};
use reactive_stores::Store;

use crate::catalog;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::{Food, FoodPatch, NewFood};
use crate::store::{store_reconcile, store_set_editing, DashboardState, DashboardStateStoreFields};

#[component]
pub fn App(api_config: ApiConfig) -> impl IntoView {
    let ctx = AppContext::new(api_config);
    let store = Store::new(DashboardState::default());
    let add_modal = create_modal_signals();
    let edit_modal = create_modal_signals();

    // Provide context to all children
    provide_context(ctx.clone());
    provide_context(store);

    // Load foods once on mount
    let load_ctx = ctx.clone();
    Effect::new(move |_| {
        let api = load_ctx.api();
        spawn_local(async move {
            store_reconcile(&store, catalog::load_foods(&api).await);
        });
    });

    let add_ctx = ctx.clone();
    let handle_add_food = Callback::new(move |candidate: NewFood| {
        let api = add_ctx.api();
        spawn_local(async move {
            store_reconcile(&store, catalog::add_food(&api, candidate).await);
        });
    });

    let update_ctx = ctx.clone();
    let handle_update_food = Callback::new(move |patch: FoodPatch| {
        let Some(editing) = store.editing_food().get_untracked() else {
            log::warn!("edit submitted with no food selected");
            return;
        };
        let api = update_ctx.api();
        spawn_local(async move {
            store_reconcile(&store, catalog::edit_food(&api, &editing, patch).await);
        });
    });

    let delete_ctx = ctx;
    let handle_delete_food = Callback::new(move |id: u32| {
        let api = delete_ctx.api();
        spawn_local(async move {
            store_reconcile(&store, catalog::delete_food(&api, id).await);
        });
    });

    let handle_edit_food = Callback::new(move |food: Food| {
        store_set_editing(&store, food);
        open_modal(&edit_modal);
    });

    view! {
        <Header on_open_modal=move |_| open_modal(&add_modal) />
        <ModalAddFood modal=add_modal on_submit=handle_add_food />
        <ModalEditFood modal=edit_modal on_submit=handle_update_food />

        <main class="foods-container" data-testid="foods-list">
            // Keyed by the whole record so a reconciled change re-renders its card
            <For
                each=move || store.foods().get()
                key=|food| food.clone()
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=handle_edit_food
                            on_delete=handle_delete_food
                        />
                    }
                }
            />
        </main>
    }
}
