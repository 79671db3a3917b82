//! Notice banner for the latest operation outcome

use leptos::prelude::*;
use record_shared::Notice;

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|n| {
            let class = if n.is_error() { "result error" } else { "result success" };
            view! {
                <div class=class>
                    <div class="result-value">{n.message}</div>
                    <button class="dismiss" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })}
    }
}
