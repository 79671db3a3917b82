//! Record list component (the display region)

use leptos::prelude::*;
use record_shared::{RecordEntry, RecordView, EMPTY_MESSAGE};

use crate::store::RecordStore;

#[component]
pub fn RecordList(store: RecordStore) -> impl IntoView {
    let (loading, set_loading) = signal(false);

    // load action
    let load = move |_| {
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            store.refresh().await;
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Records"</h2>

            <button on:click=load disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <span class="spinner"></span> " Loading..." }.into_any()
                } else {
                    view! { "Load Records" }.into_any()
                }}
            </button>

            <div id="records">
                {move || store.view.get().map(|state| match state {
                    RecordView::Empty => view! { <p>{EMPTY_MESSAGE}</p> }.into_any(),
                    RecordView::Entries(entries) => entries
                        .into_iter()
                        .map(|entry| view! { <RecordRow entry=entry store=store /> })
                        .collect::<Vec<_>>()
                        .into_any(),
                })}
            </div>
        </div>
    }
}

#[component]
fn RecordRow(entry: RecordEntry, store: RecordStore) -> impl IntoView {
    let id = entry.id;

    view! {
        <div class="record">
            <b>{entry.name}</b>
            " "
            {entry.details}
            <button
                class="delete-btn"
                on:click=move |_| leptos::task::spawn_local(store.delete(id))
            >
                "Delete"
            </button>
        </div>
    }
}
