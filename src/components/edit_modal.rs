//! Edit Modal Component
//!
//! Overlay for editing a card's title and text. Shown while a draft is open.

use leptos::prelude::*;
use card_core::CanvasEvent;

use crate::store::{store_dispatch, store_draft, use_app_store};

#[component]
pub fn EditModal() -> impl IntoView {
    let store = use_app_store();
    let draft = Memo::new(move |_| store_draft(&store));

    let save = move || {
        let _ = store_dispatch(&store, CanvasEvent::SaveRequested);
    };
    let cancel = move || {
        let _ = store_dispatch(&store, CanvasEvent::CancelRequested);
    };

    view! {
        <Show when=move || draft.get().is_some()>
            <div
                class="modal-backdrop"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        cancel();
                    }
                }
            >
                <div class="modal">
                    <h3 class="modal-title">"Edit Card"</h3>
                    <input
                        type="text"
                        class="modal-title-input"
                        prop:value=move || draft.get().map(|d| d.title).unwrap_or_default()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            let _ = store_dispatch(&store, CanvasEvent::DraftTitleChanged { text });
                        }
                    />
                    <textarea
                        class="modal-text-input"
                        prop:value=move || draft.get().map(|d| d.text).unwrap_or_default()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            let _ = store_dispatch(&store, CanvasEvent::DraftTextChanged { text });
                        }
                    ></textarea>
                    <div class="modal-actions">
                        <button class="save-btn" on:click=move |_| save()>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
