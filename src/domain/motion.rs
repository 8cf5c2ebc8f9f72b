//! Decorative step motifs
//!
//! Each step of the gallery has a small looping animation. Frames are plain
//! text rows computed from an animation phase. Nothing in the application
//! depends on these frames.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

const NEEDLE_DEPTH: [usize; 6] = [1, 2, 3, 4, 3, 2];
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Motif {
    Needle,
    Collagen,
    Serum,
    Result,
    Light,
}

impl Motif {
    /// Number of distinct frames in one loop
    pub const fn period(self) -> u64 {
        match self {
            Motif::Needle => NEEDLE_DEPTH.len() as u64,
            Motif::Collagen => 5,
            Motif::Serum => 3,
            Motif::Result => SPINNER.len() as u64,
            Motif::Light => 2,
        }
    }

    /// Text rows for the given phase
    pub fn frame(self, phase: u64) -> Vec<String> {
        let step = (phase % self.period()) as usize;
        match self {
            Motif::Needle => needle(step),
            Motif::Collagen => collagen(step),
            Motif::Serum => serum(step),
            Motif::Result => result(step),
            Motif::Light => light(step),
        }
    }
}

fn needle(step: usize) -> Vec<String> {
    let depth = NEEDLE_DEPTH[step];
    let mut rows = vec!["═══╦═══".to_string()];
    for row in 1..=4 {
        let cell = match row.cmp(&depth) {
            std::cmp::Ordering::Less => "║",
            std::cmp::Ordering::Equal => "▼",
            std::cmp::Ordering::Greater => " ",
        };
        rows.push(format!("   {cell}   "));
    }
    rows
}

fn collagen(step: usize) -> Vec<String> {
    let mut top = String::new();
    let mut bottom = String::new();
    for i in 0..5 {
        let raised = step == i;
        top.push_str(if raised { "●" } else { " " });
        bottom.push_str(if raised { " " } else { "•" });
        if i < 4 {
            top.push(' ');
            bottom.push(' ');
        }
    }
    vec![top, bottom]
}

fn serum(step: usize) -> Vec<String> {
    let mut rows = vec![
        "╭───╮".to_string(),
        "│░░░│".to_string(),
        "╰─┬─╯".to_string(),
    ];
    for row in 0..3 {
        let drop = step == row;
        rows.push(if drop { "  ⁘  ".to_string() } else { "     ".to_string() });
    }
    rows
}

fn result(step: usize) -> Vec<String> {
    let glyph = SPINNER[step];
    if step % 2 == 1 {
        vec![format!("(( {glyph} ))")]
    } else {
        vec![format!(" ( {glyph} ) ")]
    }
}

fn light(step: usize) -> Vec<String> {
    let rays: String = (0..6)
        .map(|i| if (i + step) % 2 == 0 { '╎' } else { ' ' })
        .collect();
    vec![rays.clone(), "▒▒▒▒▒▒".to_string(), rays]
}
