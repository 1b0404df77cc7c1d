//! Edit Food Modal
//!
//! Edits the food the dashboard marked as being edited.

use leptos::prelude::*;
use leptos_modal::{close_modal, Modal, ModalSignals};

use super::food_form::{FoodFormFields, FoodFormInputs};
use crate::models::FoodPatch;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ModalEditFood(
    modal: ModalSignals,
    #[prop(into)] on_submit: Callback<FoodPatch>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let fields = FoodFormFields::new();

    // Refill whenever another card is opened for editing
    Effect::new(move |_| {
        if let Some(food) = store.editing_food().get() {
            fields.fill_from(&food);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(fields.to_patch());
        close_modal(&modal);
    };

    view! {
        <Modal modal=modal content_class="edit-food-modal">
            <form class="food-form" on:submit=submit>
                <h1>"Editar Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" class="food-form-submit" data-testid="edit-food-button">
                    "Editar Prato"
                </button>
            </form>
        </Modal>
    }
}
