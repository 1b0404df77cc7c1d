//! Header Component
//!
//! Dashboard title bar with the "new food" trigger.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="dashboard-header-content">
                <span class="dashboard-title">"GoRestaurant"</span>
                <button
                    type="button"
                    class="new-food-btn"
                    data-testid="open-add-food-modal"
                    on:click=move |_| on_open_modal.run(())
                >
                    <span class="new-food-btn-text">"Novo Prato"</span>
                    <span class="new-food-btn-icon">"+"</span>
                </button>
            </div>
        </header>
    }
}
