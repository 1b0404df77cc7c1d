//! Food Card Component
//!
//! One food in the dashboard grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog;
use crate::context::use_app_context;
use crate::models::Food;

/// Availability label shown under the card
pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Disponível"
    } else {
        "Indisponível"
    }
}

/// DOM id tying the availability label to its checkbox
pub fn switch_id(id: u32) -> String {
    format!("available-switch-{}", id)
}

/// Card for a single food.
///
/// Edit and delete go up to the dashboard. The availability switch calls the
/// service itself and never touches the dashboard list; the checkbox shows
/// the click right away while the label keeps the record's value.
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = food.id;
    let available = food.available;
    let card_class = if available { "food-card" } else { "food-card unavailable" };

    let edit_target = food.clone();
    let toggle_target = food.clone();

    let toggle_available = move |_| {
        let api = ctx.api();
        let food = toggle_target.clone();
        spawn_local(async move {
            if let Err(e) = catalog::toggle_availability(&api, &food).await {
                log::warn!("failed to toggle availability of food {}: {e}", food.id);
            }
        });
    };

    view! {
        <div class=card_class>
            <header class="food-card-image">
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="food-card-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"R$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="food-card-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>

                <div class="availability-container">
                    <p>{availability_label(available)}</p>
                    <label for=switch_id(id) class="switch">
                        <input
                            id=switch_id(id)
                            type="checkbox"
                            checked=available
                            data-testid=format!("change-status-food-{}", id)
                            on:change=toggle_available
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
