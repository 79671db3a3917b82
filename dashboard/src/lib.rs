//! ==============================================================================
//! lib.rs - Patient Records Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the patient record service.
//!     add a record from a form, list all records, delete one.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the record service via fetch (api.rs)
//!     - request bodies, parsing and rendering rules come from record-shared
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod store;

use components::{Header, NoticeBanner, RecordForm, RecordList};
use store::RecordStore;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("record service at {}", api::RECORD_SERVICE_BASE);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let store = RecordStore::new();

    view! {
        <Title text="Patient Records" />
        <Header />
        <div class="container">
            <NoticeBanner notice=store.notice />
            <RecordForm store=store />
            <RecordList store=store />
        </div>
    }
}
