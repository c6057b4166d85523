//! Card Tile Component
//!
//! One resizable card on the canvas.

use leptos::prelude::*;
use card_core::{CanvasEvent, CardId};
use leptos_resizable::{ResizeSignals, Resizable};

use crate::store::{store_card_view, store_config, store_dispatch_for, use_app_store};

/// A single card: title, delete/edit buttons and collapsible text
#[component]
pub fn CardTile(id: CardId, rs: ResizeSignals) -> impl IntoView {
    let store = use_app_store();
    let config = store_config(&store);
    let default_size = (config.default_size.width, config.default_size.height);

    // Dependents only rerun when this card's own view changes
    let card = Memo::new(move |_| store_card_view(&store, id));
    let expanded = move || card.get().map(|c| c.view.show_full_text).unwrap_or(false);
    let size = Signal::derive(move || {
        card.get()
            .map(|c| (c.card.size.width, c.card.size.height))
            .unwrap_or(default_size)
    });
    let display = move || card.get().map(|c| c.display_text(&config)).unwrap_or_default();
    let box_key = id.0 as usize;

    view! {
        <Resizable rs=rs box_key=box_key size=size>
            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">{move || card.get().map(|c| c.card.title).unwrap_or_default()}</h3>
                    <div class="card-actions">
                        <button
                            class="delete-btn"
                            title="Delete"
                            on:click=move |_| store_dispatch_for(&store, id, |index| CanvasEvent::DeleteRequested { index })
                        >
                            "×"
                        </button>
                        <button
                            class="edit-btn"
                            title="Edit"
                            on:click=move |_| store_dispatch_for(&store, id, |index| CanvasEvent::EditRequested { index })
                        >
                            "✎"
                        </button>
                    </div>
                </div>
                <p class="card-text">
                    {display}
                    {move || if expanded() {
                        view! {
                            <button
                                class="show-toggle-btn"
                                on:click=move |_| store_dispatch_for(&store, id, |index| CanvasEvent::ShowLessRequested { index })
                            >
                                "Show Less"
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button
                                class="show-toggle-btn"
                                on:click=move |_| store_dispatch_for(&store, id, |index| CanvasEvent::ShowMoreRequested { index })
                            >
                                "Show More"
                            </button>
                        }.into_any()
                    }}
                </p>
            </div>
        </Resizable>
    }
}
