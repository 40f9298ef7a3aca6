//! Visual appearance of the payment form.
//!
//! These values are only carried through to the form builder. Applying them
//! to rendered components happens elsewhere.

use serde::{Deserialize, Serialize};

/// Appearance settings for the payment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub font: Font,
    pub colors: Colors,
    /// Corner radius of inputs and buttons, in points.
    pub corner_radius: f64,
    /// Border width of inputs, in points.
    pub border_width: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font: Font::default(),
            colors: Colors::default(),
            corner_radius: 6.0,
            border_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Font family used for all text. `None` means the system font.
    pub base_font_family: Option<String>,
    /// Multiplier applied to every font size.
    pub size_scale_factor: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            base_font_family: None,
            size_scale_factor: 1.0,
        }
    }
}

/// Colors as `#RRGGBB` or `#RRGGBBAA` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub background: String,
    pub component_background: String,
    pub component_border: String,
    pub component_divider: String,
    pub text: String,
    pub text_secondary: String,
    pub component_text: String,
    pub component_placeholder_text: String,
    pub icon: String,
    pub danger: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#007AFF".to_string(),
            background: "#FFFFFF".to_string(),
            component_background: "#FFFFFF".to_string(),
            component_border: "#C6C6C8".to_string(),
            component_divider: "#C6C6C8".to_string(),
            text: "#000000".to_string(),
            text_secondary: "#3C3C4399".to_string(),
            component_text: "#000000".to_string(),
            component_placeholder_text: "#3C3C434C".to_string(),
            icon: "#3C3C4399".to_string(),
            danger: "#FF3B30".to_string(),
        }
    }
}
