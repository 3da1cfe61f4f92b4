//! Display formats for primary items.
//!
//! A [`Format`] is a color plus a thickness. Formats are built up from style
//! tokens (`red`, `bold`, `shy`, ...) parsed into [`Attribute`]s, and applied
//! to a primary's name when the list is rendered.

use crate::error::{Result, TodoError};
use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => colored::Color::Black,
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Blue => colored::Color::Blue,
            Color::Magenta => colored::Color::Magenta,
            Color::Cyan => colored::Color::Cyan,
            Color::White => colored::Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Persisted as a plain boolean: `true` means bold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Thickness {
    #[default]
    Regular,
    Bold,
}

impl From<bool> for Thickness {
    fn from(bold: bool) -> Self {
        if bold {
            Thickness::Bold
        } else {
            Thickness::Regular
        }
    }
}

impl From<Thickness> for bool {
    fn from(thickness: Thickness) -> Self {
        thickness == Thickness::Bold
    }
}

/// A single parsed style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Color(Color),
    Thickness(Thickness),
}

const BOLD_TOKEN: &str = "bold";
const SHY_TOKEN: &str = "shy";

impl FromStr for Attribute {
    type Err = TodoError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            BOLD_TOKEN => Ok(Attribute::Thickness(Thickness::Bold)),
            SHY_TOKEN => Ok(Attribute::Thickness(Thickness::Regular)),
            _ => Color::ALL
                .iter()
                .find(|c| c.name() == token)
                .map(|c| Attribute::Color(*c))
                .ok_or_else(|| TodoError::InvalidStyleAttribute(token.to_string())),
        }
    }
}

/// Every token accepted by [`Attribute::from_str`], thickness tokens first.
pub fn attribute_names() -> Vec<&'static str> {
    let mut names = vec![BOLD_TOKEN, SHY_TOKEN];
    names.extend(Color::ALL.iter().map(Color::name));
    names
}

/// Parses all tokens, failing on the first one that is not a known attribute.
pub fn parse_attributes<I: AsRef<str>>(tokens: &[I]) -> Result<Vec<Attribute>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    #[serde(
        rename = "Color",
        default,
        deserialize_with = "deserialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,

    #[serde(rename = "Thickness", default)]
    pub thickness: Thickness,
}

impl Format {
    pub fn apply_attribute(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Color(color) => self.color = Some(color),
            Attribute::Thickness(thickness) => self.thickness = thickness,
        }
    }

    /// Renders `text` with this format's styling.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = text.normal();
        if let Some(color) = self.color {
            styled = styled.color(colored::Color::from(color));
        }
        if self.thickness == Thickness::Bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// Older data files write an empty string for "no color"; names this version
/// does not know are dropped rather than failing the whole load.
fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => {
            let color = Color::ALL.iter().find(|c| c.name() == name).copied();
            if color.is_none() {
                debug!(color = %name, "ignoring unknown persisted color");
            }
            Ok(color)
        }
    }
}
