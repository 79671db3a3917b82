//! Add-record form component

use leptos::prelude::*;
use record_shared::{ClientError, NewRecordInput, Notice, RawRecordForm};

use crate::store::RecordStore;

#[component]
pub fn RecordForm(store: RecordStore) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let disease = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    // add action
    let add = move |_| {
        let raw = RawRecordForm {
            name: name.get(),
            age: age.get(),
            gender: gender.get(),
            disease: disease.get(),
        };

        // rejected input never reaches the network
        let input = match NewRecordInput::parse(&raw) {
            Ok(input) => input,
            Err(e) => {
                store.notice.set(Some(Notice::error(&ClientError::from(e))));
                return;
            }
        };

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            store.add(input).await;
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Add Record"</h2>

            <FormField id="name" label="Name" placeholder="Ann Lee" value=name />
            <FormField id="age" label="Age" placeholder="30" value=age />
            <FormField id="gender" label="Gender" placeholder="F" value=gender />
            <FormField id="disease" label="Disease" placeholder="Flu" value=disease />

            <button on:click=add disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <span class="spinner"></span> " Adding..." }.into_any()
                } else {
                    view! { "Add Record" }.into_any()
                }}
            </button>
        </div>
    }
}

#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
