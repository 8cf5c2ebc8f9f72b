use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles for the chrome around the presenters
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse strings like `"bold white on #000435"`
pub fn parse_style(line: &str) -> Style {
    let lowered = line.to_lowercase();
    let mut words = lowered.split_whitespace();
    let foreground: Vec<&str> = words.by_ref().take_while(|word| *word != "on").collect();
    let background: Vec<&str> = words.collect();
    let (fg_modifiers, fg_color) = split_modifiers(&foreground);
    let (bg_modifiers, bg_color) = split_modifiers(&background);

    let mut style = Style::default();
    if let Some(fg) = fg_color.and_then(parse_color) {
        style = style.fg(fg);
    }
    if let Some(bg) = bg_color.and_then(parse_color) {
        style = style.bg(bg);
    }
    style.add_modifier(fg_modifiers | bg_modifiers)
}

fn split_modifiers<'a>(words: &[&'a str]) -> (Modifier, Option<&'a str>) {
    let mut modifiers = Modifier::empty();
    let mut color = None;
    for word in words {
        match *word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "reverse" | "reversed" => modifiers |= Modifier::REVERSED,
            other => color = Some(other),
        }
    }
    (modifiers, color)
}

fn parse_color(s: &str) -> Option<Color> {
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color::Rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ));
    }
    s.parse::<Color>().ok()
}
