//! Canvas Configuration
//!
//! Defaults for new cards, size bounds and the collapsed preview.

use serde::{Deserialize, Serialize};

use crate::card::CardSize;

/// Body text given to every new card
pub const DEFAULT_CARD_TEXT: &str = "This is some dummy text for the card. It will be shortened.";

/// Tunables shared by the store and the render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size of a freshly added card
    pub default_size: CardSize,
    /// Smallest size a card may be resized to
    pub min_size: CardSize,
    /// Largest size a card may be resized to
    pub max_size: CardSize,
    /// Number of characters shown while a card is collapsed
    pub preview_chars: usize,
    /// Appended to the preview of a collapsed card
    pub ellipsis: String,
    /// Generated titles are `"{title_prefix} {n}"`
    pub title_prefix: String,
    /// Body text of a freshly added card
    pub default_text: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_size: CardSize::new(300.0, 200.0),
            min_size: CardSize::new(100.0, 100.0),
            max_size: CardSize::new(500.0, 400.0),
            preview_chars: 20,
            ellipsis: " ...".to_string(),
            title_prefix: "Title".to_string(),
            default_text: DEFAULT_CARD_TEXT.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    /// Size bounds that are not finite, or whose minimum exceeds the maximum,
    /// are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Check that the size bounds describe a usable range
    pub fn validate(&self) -> Result<(), String> {
        for (name, size) in [
            ("default_size", self.default_size),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
        ] {
            if !size.is_finite() {
                return Err(format!("{} must be finite, got {}x{}", name, size.width, size.height));
            }
        }
        if self.min_size.width > self.max_size.width || self.min_size.height > self.max_size.height {
            return Err(format!(
                "min_size {}x{} exceeds max_size {}x{}",
                self.min_size.width, self.min_size.height, self.max_size.width, self.max_size.height
            ));
        }
        Ok(())
    }

    /// Title for the card that will become the `n`th (1-based) in the collection
    pub fn generated_title(&self, n: usize) -> String {
        format!("{} {}", self.title_prefix, n)
    }

    /// Clamp a requested size into `[min_size, max_size]`.
    /// Inverted bounds resolve to `max_size` instead of panicking.
    pub fn clamp_size(&self, size: CardSize) -> CardSize {
        CardSize {
            width: size.width.max(self.min_size.width).min(self.max_size.width),
            height: size.height.max(self.min_size.height).min(self.max_size.height),
        }
    }
}
