//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every user intent goes through `store_dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;
use card_core::{CanvasConfig, CanvasEvent, CanvasResult, CanvasSession, CardId, CardView, EditDraft};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cards and the edit draft for this canvas
    pub session: CanvasSession,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: CanvasSession::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an intent event to the session
pub fn store_dispatch(store: &AppStore, event: CanvasEvent) -> CanvasResult<()> {
    store.session().write().apply(event)
}

/// Ids of all cards in render order
pub fn store_card_ids(store: &AppStore) -> Vec<CardId> {
    store.session().with(|s| s.cards().iter().map(|(id, _, _)| id).collect())
}

/// Render snapshot of one card, `None` once it is deleted
pub fn store_card_view(store: &AppStore, id: CardId) -> Option<CardView> {
    store.session().with(|s| s.cards().card_view_by_id(id))
}

/// Current position of a card, read without tracking
pub fn store_position_of(store: &AppStore, id: CardId) -> Option<usize> {
    store.session().with_untracked(|s| s.cards().position_of(id))
}

/// Open edit draft, if any
pub fn store_draft(store: &AppStore) -> Option<EditDraft> {
    store.session().with(|s| s.draft().cloned())
}

pub fn store_card_count(store: &AppStore) -> usize {
    store.session().with(|s| s.cards().len())
}

pub fn store_config(store: &AppStore) -> CanvasConfig {
    store.session().with_untracked(|s| s.config().clone())
}

/// Dispatch an index-addressed event for the card's current position.
/// Cards that are already gone are ignored.
pub fn store_dispatch_for(store: &AppStore, id: CardId, make: fn(usize) -> CanvasEvent) {
    match store_position_of(store, id) {
        Some(index) => {
            let _ = store_dispatch(store, make(index));
        }
        None => log::warn!("[STORE] Event for deleted card {}", id),
    }
}
