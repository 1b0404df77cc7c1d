//! Food Form Fields
//!
//! Input signals and inputs shared by the add and edit modals.

use leptos::prelude::*;

use crate::models::{Food, FoodPatch, NewFood};

/// One signal per editable field
#[derive(Clone, Copy)]
pub struct FoodFormFields {
    pub image: RwSignal<String>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FoodFormFields {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    /// Prefill from an existing food (edit modal)
    pub fn fill_from(&self, food: &Food) {
        self.image.set(food.image.clone());
        self.name.set(food.name.clone());
        self.price.set(food.price.clone());
        self.description.set(food.description.clone());
    }

    pub fn reset(&self) {
        for field in [self.image, self.name, self.price, self.description] {
            field.set(String::new());
        }
    }

    /// Create candidate; availability is decided by the dashboard
    pub fn to_new_food(&self) -> NewFood {
        NewFood {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            available: false,
            image: self.image.get_untracked(),
        }
    }

    /// Everything the form edits; availability is left to the existing record
    pub fn to_patch(&self) -> FoodPatch {
        FoodPatch {
            name: Some(self.name.get_untracked()),
            description: Some(self.description.get_untracked()),
            price: Some(self.price.get_untracked()),
            available: None,
            image: Some(self.image.get_untracked()),
        }
    }
}

/// Text inputs bound to [`FoodFormFields`]
#[component]
pub fn FoodFormInputs(fields: FoodFormFields) -> impl IntoView {
    view! {
        <input
            type="text"
            class="food-form-input"
            name="image"
            placeholder="Cole o link aqui"
            prop:value=move || fields.image.get()
            on:input=move |ev| fields.image.set(event_target_value(&ev))
        />
        <input
            type="text"
            class="food-form-input"
            name="name"
            placeholder="Ex: Moda Italiana"
            prop:value=move || fields.name.get()
            on:input=move |ev| fields.name.set(event_target_value(&ev))
        />
        <input
            type="text"
            class="food-form-input"
            name="price"
            placeholder="Ex: 19.90"
            prop:value=move || fields.price.get()
            on:input=move |ev| fields.price.set(event_target_value(&ev))
        />
        <textarea
            class="food-form-input"
            name="description"
            placeholder="Descrição"
            prop:value=move || fields.description.get()
            on:input=move |ev| fields.description.set(event_target_value(&ev))
        ></textarea>
    }
}
