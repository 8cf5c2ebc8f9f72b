//! Symbolic icons and their terminal glyphs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Icon names, spelled the way icon sets usually spell them (`refresh-cw`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Zap,
    RefreshCw,
    Droplets,
    Sparkles,
    Lightbulb,
    X,
    ChevronDown,
    ChevronUp,
    ChevronLeft,
    ChevronRight,
    ArrowDown,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Zap => "⚡",
            Icon::RefreshCw => "↻",
            Icon::Droplets => "💧",
            Icon::Sparkles => "✨",
            Icon::Lightbulb => "💡",
            Icon::X => "✕",
            Icon::ChevronDown => "▾",
            Icon::ChevronUp => "▴",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
            Icon::ArrowDown => "↓",
        }
    }

    /// Look up a glyph by its symbolic name
    pub fn lookup(name: &str) -> Option<&'static str> {
        name.parse::<Icon>().ok().map(Icon::glyph)
    }
}
