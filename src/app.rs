//! Card Canvas App
//!
//! Main application component: add button, card grid and edit modal.

use leptos::prelude::*;
use reactive_stores::Store;
use card_core::{CanvasEvent, CardId, CardSize};
use leptos_resizable::{bind_global_resize_handlers, create_resize_signals, SizeConstraints};

use crate::components::{CardTile, EditModal};
use crate::store::{store_card_count, store_card_ids, store_config, store_dispatch, store_position_of, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let config = store_config(&store);
    let constraints = SizeConstraints::new(
        (config.min_size.width, config.min_size.height),
        (config.max_size.width, config.max_size.height),
    );
    let rs = create_resize_signals(constraints);

    // Resize handles report by card id; the store is addressed by position
    bind_global_resize_handlers(rs, move |key, (width, height)| {
        let id = CardId(key as u32);
        if let Some(index) = store_position_of(&store, id) {
            let size = CardSize::new(width, height);
            let _ = store_dispatch(&store, CanvasEvent::ResizeReported { index, size });
        }
    });

    let add_card = move |_| {
        let _ = store_dispatch(&store, CanvasEvent::AddCardRequested);
    };

    view! {
        <div class="canvas">
            <div class="canvas-toolbar">
                <button class="add-card-btn" on:click=add_card>"Add Card"</button>
            </div>

            <div class="card-grid">
                <For
                    each=move || store_card_ids(&store)
                    key=|id| *id
                    children=move |id| view! { <CardTile id=id rs=rs /> }
                />
            </div>

            <p class="card-count">{move || format!("{} cards", store_card_count(&store))}</p>

            <EditModal />
        </div>
    }
}
