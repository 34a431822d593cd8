use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the views, e.g. `"focused" => "bold yellow"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| {
                parse_style(&style)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered as `name`, or the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses `"[modifiers] [fg color] [on <bg color>]"`
pub fn parse_style(line: &str) -> Result<Style, String> {
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg.trim())),
        None => (line, None),
    };

    let mut style = Style::default();
    let mut color_words = Vec::new();
    for word in foreground.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" | "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "reverse" | "reversed" => style = style.add_modifier(Modifier::REVERSED),
            "strikethrough" | "crossed_out" => style = style.add_modifier(Modifier::CROSSED_OUT),
            _ => color_words.push(word),
        }
    }

    if !color_words.is_empty() {
        style = style.fg(parse_color(&color_words.join(" "))?);
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background)?);
    }
    Ok(style)
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_str(s).map_err(|_| format!("Unknown color `{s}`"))
}
