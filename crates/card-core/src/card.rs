//! Card Entity
//!
//! Card data plus the presentation state kept next to it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;

/// Stable card identifier, assigned once and never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

impl CardSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Card data as the user edits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub text: String,
    pub size: CardSize,
}

impl Card {
    pub fn new(title: impl Into<String>, text: impl Into<String>, size: CardSize) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            size,
        }
    }
}

/// Per-card presentation state, not part of the card data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Whether the body text is fully expanded
    pub show_full_text: bool,
}

/// Owned, render-ready snapshot of one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub index: usize,
    pub card: Card,
    pub view: ViewState,
}

impl CardView {
    pub fn display_text(&self, config: &CanvasConfig) -> String {
        display_text(&self.card.text, self.view.show_full_text, config)
    }
}

/// Body text as shown on the card.
///
/// Collapsed cards show the first `preview_chars` characters followed by the
/// ellipsis marker. The cut is by character count and may split a word; the
/// marker is appended even when the text is already short.
pub fn display_text(text: &str, show_full_text: bool, config: &CanvasConfig) -> String {
    if show_full_text {
        return text.to_string();
    }
    let mut shown: String = text.chars().take(config.preview_chars).collect();
    shown.push_str(&config.ellipsis);
    shown
}
