//! Edit Session
//!
//! Holds the single edit draft behind the modal. The draft is a detached copy
//! of the card's title and text; nothing reaches the collection until save.

use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::collection::CardCollection;
use crate::error::{CanvasError, CanvasResult};

/// Modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalState {
    Closed,
    Open,
}

/// Detached copy of a card's editable fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    card_id: CardId,
    /// Position of the card when the draft was opened
    opened_at: usize,
    pub title: String,
    pub text: String,
}

impl EditDraft {
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    pub fn opened_at(&self) -> usize {
        self.opened_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    draft: Option<EditDraft>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        if self.draft.is_some() {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Open the modal on the card at `index`, replacing any open draft
    pub fn begin(&mut self, cards: &CardCollection, index: usize) -> CanvasResult<&EditDraft> {
        let card_id = cards.id_at(index)?;
        let card = cards.get(index).ok_or(CanvasError::IndexOutOfRange { index, len: cards.len() })?;
        if let Some(previous) = &self.draft {
            log::debug!("[EDIT] Replacing draft for card {}", previous.card_id);
        }
        Ok(&*self.draft.insert(EditDraft {
            card_id,
            opened_at: index,
            title: card.title.clone(),
            text: card.text.clone(),
        }))
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> CanvasResult<()> {
        self.draft_mut()?.title = title.into();
        Ok(())
    }

    pub fn update_text(&mut self, text: impl Into<String>) -> CanvasResult<()> {
        self.draft_mut()?.text = text.into();
        Ok(())
    }

    /// Close the modal and drop the draft. Closing an already closed modal is fine.
    pub fn cancel(&mut self) -> Option<EditDraft> {
        self.draft.take()
    }

    /// Write the draft's title and text into its card and close the modal.
    ///
    /// The modal closes even when the card has gone; the collection is then
    /// left untouched and `StaleDraft` is returned.
    pub fn save(&mut self, cards: &mut CardCollection) -> CanvasResult<CardId> {
        let draft = self.draft.take().ok_or(CanvasError::NoOpenDraft)?;
        let id = draft.card_id;
        cards
            .set_content(id, draft.title, draft.text)
            .map_err(|_| CanvasError::StaleDraft(id))?;
        Ok(id)
    }

    /// Drop the draft if it belongs to `id`; returns whether it did
    pub fn invalidate(&mut self, id: CardId) -> bool {
        if self.draft.as_ref().is_some_and(|d| d.card_id == id) {
            self.draft = None;
            true
        } else {
            false
        }
    }

    fn draft_mut(&mut self) -> CanvasResult<&mut EditDraft> {
        self.draft.as_mut().ok_or(CanvasError::NoOpenDraft)
    }
}
