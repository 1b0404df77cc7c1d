//! Add Food Modal
//!
//! Collects a new food and hands it to the dashboard.

use leptos::prelude::*;
use leptos_modal::{close_modal, Modal, ModalSignals};

use super::food_form::{FoodFormFields, FoodFormInputs};
use crate::models::NewFood;

#[component]
pub fn ModalAddFood(
    modal: ModalSignals,
    #[prop(into)] on_submit: Callback<NewFood>,
) -> impl IntoView {
    let fields = FoodFormFields::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(fields.to_new_food());
        fields.reset();
        close_modal(&modal);
    };

    view! {
        <Modal modal=modal content_class="add-food-modal">
            <form class="food-form" on:submit=submit>
                <h1>"Novo Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" class="food-form-submit" data-testid="add-food-button">
                    "Adicionar Prato"
                </button>
            </form>
        </Modal>
    }
}
