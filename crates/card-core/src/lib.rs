//! Card Canvas Core
//!
//! In-memory state model behind the card canvas: an ordered card store, the
//! single-draft edit session, and the intent events that drive both.
//! No I/O and no globals; every canvas owns one `CanvasSession`.

mod card;
mod collection;
mod config;
mod edit;
mod error;
mod session;


pub use card::{display_text, Card, CardId, CardSize, CardView, ViewState};
pub use collection::CardCollection;
pub use config::{CanvasConfig, DEFAULT_CARD_TEXT};
pub use edit::{EditDraft, EditSession, ModalState};
pub use error::{CanvasError, CanvasResult};
pub use session::{CanvasEvent, CanvasSession, SessionSnapshot};
