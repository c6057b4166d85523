//! Card Store
//!
//! Ordered card collection. Entries keep insertion order; each one carries a
//! stable `CardId` and an id -> position index is kept in step, so callers may
//! address cards either by current position or by id.

use std::collections::HashMap;

use crate::card::{display_text, Card, CardId, CardSize, CardView, ViewState};
use crate::config::CanvasConfig;
use crate::error::{CanvasError, CanvasResult};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: CardId,
    card: Card,
    view: ViewState,
}

/// Ordered, index-addressed collection of cards
#[derive(Debug, Clone)]
pub struct CardCollection {
    config: CanvasConfig,
    entries: Vec<Entry>,
    positions: HashMap<CardId, usize>,
    next_id: u32,
}

impl Default for CardCollection {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CardCollection {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            positions: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ========================
    // Lookup
    // ========================

    /// Card data at `index`
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.entries.get(index).map(|e| &e.card)
    }

    /// Card data by id
    pub fn get_by_id(&self, id: CardId) -> Option<&Card> {
        self.position_of(id).map(|pos| &self.entries[pos].card)
    }

    pub fn view_state(&self, index: usize) -> Option<ViewState> {
        self.entries.get(index).map(|e| e.view)
    }

    /// Current position of a card, `None` once it has been deleted
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Resolve a position into the id of the card currently there
    pub fn id_at(&self, index: usize) -> CanvasResult<CardId> {
        self.entries
            .get(index)
            .map(|e| e.id)
            .ok_or(CanvasError::IndexOutOfRange { index, len: self.len() })
    }

    /// Render-ready snapshot of the card at `index`
    pub fn card_view(&self, index: usize) -> Option<CardView> {
        self.entries.get(index).map(|e| CardView {
            id: e.id,
            index,
            card: e.card.clone(),
            view: e.view,
        })
    }

    pub fn card_view_by_id(&self, id: CardId) -> Option<CardView> {
        self.position_of(id).and_then(|pos| self.card_view(pos))
    }

    /// Snapshots of every card in render order
    pub fn views(&self) -> Vec<CardView> {
        (0..self.len()).filter_map(|i| self.card_view(i)).collect()
    }

    /// Iterate `(id, card, view state)` in render order
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card, ViewState)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.card, e.view))
    }

    /// Body text of the card at `index` as currently displayed
    pub fn display_text(&self, index: usize) -> CanvasResult<String> {
        let entry = self.entry(index)?;
        Ok(display_text(&entry.card.text, entry.view.show_full_text, &self.config))
    }

    // ========================
    // Mutation
    // ========================

    /// Append a card with the generated title `"Title {len + 1}"` and defaults
    pub fn add(&mut self) -> CardId {
        let title = self.config.generated_title(self.len() + 1);
        let card = Card::new(title, self.config.default_text.clone(), self.config.default_size);
        self.push(card)
    }

    /// Append an arbitrary card; its size is clamped into the configured bounds.
    /// A non-finite size is replaced by the default size.
    pub fn push(&mut self, mut card: Card) -> CardId {
        if !card.size.is_finite() {
            card.size = self.config.default_size;
        }
        card.size = self.config.clamp_size(card.size);
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.positions.insert(id, self.entries.len());
        self.entries.push(Entry {
            id,
            card,
            view: ViewState::default(),
        });
        id
    }

    pub fn expand(&mut self, index: usize) -> CanvasResult<()> {
        self.entry_mut(index)?.view.show_full_text = true;
        Ok(())
    }

    pub fn collapse(&mut self, index: usize) -> CanvasResult<()> {
        self.entry_mut(index)?.view.show_full_text = false;
        Ok(())
    }

    pub fn set_expanded_by_id(&mut self, id: CardId, expanded: bool) -> CanvasResult<()> {
        let pos = self.position_of(id).ok_or(CanvasError::UnknownCard(id))?;
        self.entries[pos].view.show_full_text = expanded;
        Ok(())
    }

    /// Remove the card at `index`; everything after it shifts down by one
    pub fn delete(&mut self, index: usize) -> CanvasResult<(CardId, Card)> {
        if index >= self.len() {
            return Err(CanvasError::IndexOutOfRange { index, len: self.len() });
        }
        let removed = self.entries.remove(index);
        self.positions.remove(&removed.id);
        for (pos, entry) in self.entries.iter().enumerate().skip(index) {
            self.positions.insert(entry.id, pos);
        }
        Ok((removed.id, removed.card))
    }

    pub fn delete_by_id(&mut self, id: CardId) -> CanvasResult<Card> {
        let pos = self.position_of(id).ok_or(CanvasError::UnknownCard(id))?;
        self.delete(pos).map(|(_, card)| card)
    }

    /// Set the card size. Out-of-bounds requests are clamped; the stored size
    /// is returned. Non-finite sizes are rejected and the card keeps its size.
    pub fn resize(&mut self, index: usize, size: CardSize) -> CanvasResult<CardSize> {
        let id = self.id_at(index)?;
        self.resize_by_id(id, size)
    }

    pub fn resize_by_id(&mut self, id: CardId, size: CardSize) -> CanvasResult<CardSize> {
        let pos = self.position_of(id).ok_or(CanvasError::UnknownCard(id))?;
        if !size.is_finite() {
            return Err(CanvasError::InvalidSize(id));
        }
        let clamped = self.config.clamp_size(size);
        if clamped != size {
            log::warn!(
                "[STORE] Resize of card {} to {}x{} clamped to {}x{}",
                id, size.width, size.height, clamped.width, clamped.height
            );
        }
        self.entries[pos].card.size = clamped;
        Ok(clamped)
    }

    /// Overwrite title and text, leaving size and view state alone
    pub(crate) fn set_content(&mut self, id: CardId, title: String, text: String) -> CanvasResult<()> {
        let pos = self.position_of(id).ok_or(CanvasError::UnknownCard(id))?;
        let card = &mut self.entries[pos].card;
        card.title = title;
        card.text = text;
        Ok(())
    }

    fn entry(&self, index: usize) -> CanvasResult<&Entry> {
        let len = self.len();
        self.entries.get(index).ok_or(CanvasError::IndexOutOfRange { index, len })
    }

    fn entry_mut(&mut self, index: usize) -> CanvasResult<&mut Entry> {
        let len = self.len();
        self.entries.get_mut(index).ok_or(CanvasError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_with(n: usize) -> CardCollection {
        let mut cards = CardCollection::default();
        for _ in 0..n {
            cards.add();
        }
        cards
    }

    #[test]
    fn test_add_generates_titles_and_defaults() {
        let mut cards = CardCollection::default();
        for n in 1..=5 {
            let before = cards.len();
            cards.add();
            assert_eq!(cards.len(), before + 1);
            let card = cards.get(n - 1).unwrap();
            assert_eq!(card.title, format!("Title {}", before + 1));
        }
        let card = cards.get(0).unwrap();
        assert_eq!(card.size, CardSize::new(300.0, 200.0));
        assert_eq!(card.text, cards.config().default_text);
        assert!(!cards.view_state(0).unwrap().show_full_text);
    }

    #[test]
    fn test_title_uses_current_length_after_delete() {
        let mut cards = collection_with(3);
        cards.delete(0).unwrap();
        cards.add();
        // Two cards remained, so the new one is the third
        assert_eq!(cards.get(2).unwrap().title, "Title 3");
    }

    #[test]
    fn test_expand_collapse_round_trip() {
        let mut cards = collection_with(1);
        let original = cards.view_state(0).unwrap();
        cards.expand(0).unwrap();
        assert!(cards.view_state(0).unwrap().show_full_text);
        cards.collapse(0).unwrap();
        assert_eq!(cards.view_state(0).unwrap(), original);
    }

    #[test]
    fn test_resize_rejects_non_finite() {
        let mut cards = collection_with(1);
        let id = cards.id_at(0).unwrap();
        for size in [
            CardSize::new(f64::NAN, 250.0),
            CardSize::new(350.0, f64::NAN),
            CardSize::new(f64::INFINITY, 250.0),
            CardSize::new(350.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(cards.resize(0, size), Err(CanvasError::InvalidSize(id)));
        }
        assert_eq!(cards.get(0).unwrap().size, CardSize::new(300.0, 200.0));
    }

    #[test]
    fn test_push_replaces_non_finite_size() {
        let mut cards = CardCollection::default();
        cards.push(Card::new("Odd", "text", CardSize::new(f64::NAN, 150.0)));
        assert_eq!(cards.get(0).unwrap().size, CardSize::new(300.0, 200.0));
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        let mut cards = collection_with(2);
        let before = cards.views();
        let err = CanvasError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(cards.expand(2), Err(err.clone()));
        assert_eq!(cards.collapse(2), Err(err.clone()));
        assert_eq!(cards.resize(2, CardSize::new(200.0, 200.0)), Err(err.clone()));
        assert_eq!(cards.display_text(2), Err(err.clone()));
        assert!(cards.delete(2).is_err());
        assert_eq!(cards.views(), before);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut cards = collection_with(4);
        let ids: Vec<CardId> = cards.iter().map(|(id, _, _)| id).collect();
        let titles: Vec<String> = cards.iter().map(|(_, c, _)| c.title.clone()).collect();

        let (removed, _) = cards.delete(1).unwrap();
        assert_eq!(removed, ids[1]);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards.get(0).unwrap().title, titles[0]);
        assert_eq!(cards.get(1).unwrap().title, titles[2]);
        assert_eq!(cards.get(2).unwrap().title, titles[3]);

        // Id index follows the shift
        assert_eq!(cards.position_of(ids[0]), Some(0));
        assert_eq!(cards.position_of(ids[1]), None);
        assert_eq!(cards.position_of(ids[2]), Some(1));
        assert_eq!(cards.position_of(ids[3]), Some(2));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut cards = collection_with(2);
        let (first, _) = cards.delete(1).unwrap();
        let next = cards.add();
        assert_ne!(first, next);
    }

    #[test]
    fn test_resize_in_bounds_is_exact() {
        let mut cards = collection_with(1);
        let stored = cards.resize(0, CardSize::new(350.0, 250.0)).unwrap();
        assert_eq!(stored, CardSize::new(350.0, 250.0));
        assert_eq!(cards.get(0).unwrap().size, CardSize::new(350.0, 250.0));
    }

    #[test]
    fn test_resize_out_of_bounds_is_clamped() {
        let mut cards = collection_with(1);
        let stored = cards.resize(0, CardSize::new(20.0, 1000.0)).unwrap();
        assert_eq!(stored, CardSize::new(100.0, 400.0));
        assert_eq!(cards.get(0).unwrap().size, stored);
    }

    #[test]
    fn test_resize_leaves_other_fields() {
        let mut cards = collection_with(2);
        cards.expand(0).unwrap();
        let before = cards.get(0).unwrap().clone();
        cards.resize(0, CardSize::new(120.0, 130.0)).unwrap();
        let after = cards.get(0).unwrap();
        assert_eq!(after.title, before.title);
        assert_eq!(after.text, before.text);
        assert!(cards.view_state(0).unwrap().show_full_text);
        assert_eq!(cards.get(1).unwrap().size, CardSize::new(300.0, 200.0));
    }

    #[test]
    fn test_push_clamps_size() {
        let mut cards = CardCollection::default();
        cards.push(Card::new("Big", "text", CardSize::new(900.0, 900.0)));
        assert_eq!(cards.get(0).unwrap().size, CardSize::new(500.0, 400.0));
    }

    #[test]
    fn test_id_addressed_operations() {
        let mut cards = collection_with(3);
        let id = cards.id_at(2).unwrap();
        cards.set_expanded_by_id(id, true).unwrap();
        assert!(cards.view_state(2).unwrap().show_full_text);
        cards.resize_by_id(id, CardSize::new(111.0, 222.0)).unwrap();
        assert_eq!(cards.get_by_id(id).unwrap().size, CardSize::new(111.0, 222.0));

        cards.delete_by_id(id).unwrap();
        assert!(!cards.contains(id));
        assert_eq!(cards.delete_by_id(id), Err(CanvasError::UnknownCard(id)));
        assert_eq!(cards.set_expanded_by_id(id, false), Err(CanvasError::UnknownCard(id)));
    }

    #[test]
    fn test_display_text_is_idempotent() {
        let cards = collection_with(1);
        assert_eq!(cards.display_text(0), cards.display_text(0));
    }
}
