//! UI Components
//!
//! Reusable Leptos components.

mod card_tile;
mod edit_modal;

pub use card_tile::CardTile;
pub use edit_modal::EditModal;
