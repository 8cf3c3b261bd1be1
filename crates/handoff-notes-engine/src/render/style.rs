//! Visual constants for the presentation tree.
//!
//! The renderer itself only reads `label` and `spacer_height`; everything else
//! is for backends that turn the tree into styled output.

use serde::{Deserialize, Serialize};

use super::SizeTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Header shown above the notes.
    pub label: String,
    /// Body text size in px.
    pub font_size: u16,
    /// Inline code size in px.
    pub code_font_size: u16,
    /// Height of a blank-line spacer in px.
    pub spacer_height: u16,
    pub heading_sizes: HeadingSizes,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: "Handoff Notes".to_string(),
            font_size: 14,
            code_font_size: 12,
            spacer_height: 6,
            heading_sizes: HeadingSizes::default(),
        }
    }
}

impl Theme {
    /// Font size in px for a heading tier.
    pub fn heading_px(&self, size: SizeTier) -> u16 {
        match size {
            SizeTier::Large => self.heading_sizes.large,
            SizeTier::Medium => self.heading_sizes.medium,
            SizeTier::Small => self.heading_sizes.small,
        }
    }
}

/// Heading font sizes in px.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSizes {
    pub large: u16,
    pub medium: u16,
    pub small: u16,
}

impl Default for HeadingSizes {
    fn default() -> Self {
        Self {
            large: 18,
            medium: 16,
            small: 14,
        }
    }
}
