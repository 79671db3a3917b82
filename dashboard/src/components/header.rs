//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Patient Records"</h1>
                <p class="subtitle">"Add, list and remove patient entries"</p>
            </div>
        </header>
    }
}
