//! Domain layer
//!
//! Pure, UI-independent building blocks:
//! - The immutable step catalog
//! - Radial layout geometry
//! - Icon glyph lookup
//! - Decorative motion frames

pub mod catalog;
pub mod geometry;
pub mod glyph;
pub mod motion;
