//! Canvas Session
//!
//! One user's canvas: the card collection and the edit session, plus the
//! intent events the render surface sends into them.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, CardSize, CardView};
use crate::collection::CardCollection;
use crate::config::CanvasConfig;
use crate::edit::{EditDraft, EditSession, ModalState};
use crate::error::CanvasResult;

/// Intent events emitted by the render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum CanvasEvent {
    AddCardRequested,
    ShowMoreRequested { index: usize },
    ShowLessRequested { index: usize },
    EditRequested { index: usize },
    DeleteRequested { index: usize },
    ResizeReported { index: usize, size: CardSize },
    DraftTitleChanged { text: String },
    DraftTextChanged { text: String },
    SaveRequested,
    CancelRequested,
}

impl CanvasEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::AddCardRequested => "AddCardRequested",
            CanvasEvent::ShowMoreRequested { .. } => "ShowMoreRequested",
            CanvasEvent::ShowLessRequested { .. } => "ShowLessRequested",
            CanvasEvent::EditRequested { .. } => "EditRequested",
            CanvasEvent::DeleteRequested { .. } => "DeleteRequested",
            CanvasEvent::ResizeReported { .. } => "ResizeReported",
            CanvasEvent::DraftTitleChanged { .. } => "DraftTitleChanged",
            CanvasEvent::DraftTextChanged { .. } => "DraftTextChanged",
            CanvasEvent::SaveRequested => "SaveRequested",
            CanvasEvent::CancelRequested => "CancelRequested",
        }
    }
}

/// Serializable view of a whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cards: Vec<CardView>,
    pub modal: ModalState,
    pub draft: Option<EditDraft>,
}

/// Card collection plus edit session for one canvas
#[derive(Debug, Clone)]
pub struct CanvasSession {
    cards: CardCollection,
    edit: EditSession,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasSession {
    /// Default configuration, seeded with one sample card
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Seeded with one sample card titled with the bare title prefix
    pub fn with_config(config: CanvasConfig) -> Self {
        let mut session = Self::empty(config);
        let config = session.cards.config();
        let sample = Card::new(config.title_prefix.clone(), config.default_text.clone(), config.default_size);
        session.cards.push(sample);
        session
    }

    pub fn empty(config: CanvasConfig) -> Self {
        Self {
            cards: CardCollection::new(config),
            edit: EditSession::new(),
        }
    }

    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    pub fn config(&self) -> &CanvasConfig {
        self.cards.config()
    }

    pub fn modal_state(&self) -> ModalState {
        self.edit.state()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.edit.draft()
    }

    pub fn display_text(&self, index: usize) -> CanvasResult<String> {
        self.cards.display_text(index)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cards: self.cards.views(),
            modal: self.edit.state(),
            draft: self.edit.draft().cloned(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }

    // ========================
    // Card Store
    // ========================

    pub fn add(&mut self) -> CardId {
        self.cards.add()
    }

    pub fn expand(&mut self, index: usize) -> CanvasResult<()> {
        self.cards.expand(index)
    }

    pub fn collapse(&mut self, index: usize) -> CanvasResult<()> {
        self.cards.collapse(index)
    }

    /// Remove a card. An open draft for that card is cancelled with it.
    pub fn delete(&mut self, index: usize) -> CanvasResult<CardId> {
        let (id, _) = self.cards.delete(index)?;
        if self.edit.invalidate(id) {
            log::info!("[SESSION] Cancelled open draft for deleted card {}", id);
        }
        Ok(id)
    }

    pub fn resize(&mut self, index: usize, size: CardSize) -> CanvasResult<CardSize> {
        self.cards.resize(index, size)
    }

    // ========================
    // Edit Session
    // ========================

    pub fn begin_edit(&mut self, index: usize) -> CanvasResult<&EditDraft> {
        self.edit.begin(&self.cards, index)
    }

    pub fn update_draft_title(&mut self, title: impl Into<String>) -> CanvasResult<()> {
        self.edit.update_title(title)
    }

    pub fn update_draft_text(&mut self, text: impl Into<String>) -> CanvasResult<()> {
        self.edit.update_text(text)
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn save_edit(&mut self) -> CanvasResult<CardId> {
        self.edit.save(&mut self.cards)
    }

    // ========================
    // Event contract
    // ========================

    /// Apply one intent event. A rejected event leaves the session unchanged,
    /// except that a failed save still closes the modal.
    pub fn apply(&mut self, event: CanvasEvent) -> CanvasResult<()> {
        log::debug!("[SESSION] {}", event.name());
        let result = match event {
            CanvasEvent::AddCardRequested => {
                self.add();
                Ok(())
            }
            CanvasEvent::ShowMoreRequested { index } => self.expand(index),
            CanvasEvent::ShowLessRequested { index } => self.collapse(index),
            CanvasEvent::EditRequested { index } => self.begin_edit(index).map(|_| ()),
            CanvasEvent::DeleteRequested { index } => self.delete(index).map(|_| ()),
            CanvasEvent::ResizeReported { index, size } => self.resize(index, size).map(|_| ()),
            CanvasEvent::DraftTitleChanged { text } => self.update_draft_title(text),
            CanvasEvent::DraftTextChanged { text } => self.update_draft_text(text),
            CanvasEvent::SaveRequested => self.save_edit().map(|_| ()),
            CanvasEvent::CancelRequested => {
                self.cancel_edit();
                Ok(())
            }
        };
        if let Err(err) = &result {
            log::warn!("[SESSION] Ignored event: {}", err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CARD_TEXT;
    use crate::error::CanvasError;

    #[test]
    fn test_new_session_is_seeded() {
        let session = CanvasSession::new();
        assert_eq!(session.cards().len(), 1);
        let card = session.cards().get(0).unwrap();
        assert_eq!(card.title, "Title");
        assert_eq!(card.text, DEFAULT_CARD_TEXT);
        assert_eq!(card.size, CardSize::new(300.0, 200.0));
        assert_eq!(session.modal_state(), ModalState::Closed);
    }

    #[test]
    fn test_empty_session() {
        let session = CanvasSession::empty(CanvasConfig::default());
        assert!(session.cards().is_empty());
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let config = CanvasConfig {
            min_size: CardSize::new(600.0, 100.0),
            ..CanvasConfig::default()
        };
        let mut session = CanvasSession::with_config(config);
        session.add();
        assert_eq!(session.cards().len(), 2);
        assert_eq!(session.cards().get(0).unwrap().size.width, 500.0);
    }

    #[test]
    fn test_snapshot_records_modal_state() {
        let mut session = CanvasSession::new();
        assert_eq!(session.snapshot().modal, ModalState::Closed);
        session.begin_edit(0).unwrap();
        let json = session.to_json().unwrap();
        assert!(json.contains(r#""modal":"Open""#));
    }

    #[test]
    fn test_delete_cancels_matching_draft() {
        let mut session = CanvasSession::new();
        session.add();
        session.begin_edit(1).unwrap();
        session.delete(1).unwrap();
        assert_eq!(session.modal_state(), ModalState::Closed);
    }

    #[test]
    fn test_draft_survives_delete_of_earlier_card() {
        let mut session = CanvasSession::new();
        session.add();
        session.add();
        session.begin_edit(2).unwrap();
        session.update_draft_title("Renamed").unwrap();
        session.delete(0).unwrap();
        assert_eq!(session.modal_state(), ModalState::Open);

        session.save_edit().unwrap();
        // The drafted card moved from index 2 to 1 and still got the edit
        assert_eq!(session.cards().get(1).unwrap().title, "Renamed");
        assert_eq!(session.cards().get(0).unwrap().title, "Title 2");
    }

    #[test]
    fn test_event_names() {
        assert_eq!(CanvasEvent::SaveRequested.name(), "SaveRequested");
        assert_eq!(CanvasEvent::DeleteRequested { index: 0 }.name(), "DeleteRequested");
    }

    #[test]
    fn test_event_json_shape() {
        let event: CanvasEvent = serde_json::from_str(
            r#"{"event":"resizeReported","index":0,"size":{"width":350.0,"height":250.0}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            CanvasEvent::ResizeReported { index: 0, size: CardSize::new(350.0, 250.0) }
        );
    }

    #[test]
    fn test_apply_reports_errors() {
        let mut session = CanvasSession::new();
        assert_eq!(
            session.apply(CanvasEvent::ShowMoreRequested { index: 4 }),
            Err(CanvasError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert_eq!(session.apply(CanvasEvent::SaveRequested), Err(CanvasError::NoOpenDraft));
        assert_eq!(session.apply(CanvasEvent::CancelRequested), Ok(()));
    }
}
