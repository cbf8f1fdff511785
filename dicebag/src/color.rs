use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An opaque sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Expected a color like #rrggbb, got {s:?}");
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

/// Which of a set's two colors is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Face background.
    Dice,
    /// Pips and numerals.
    Number,
}

impl ColorRole {
    pub fn default_color(self) -> Color {
        match self {
            ColorRole::Dice => Color::WHITE,
            ColorRole::Number => Color::BLACK,
        }
    }
}

/// Outcome of asking the user for a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickedColor {
    Picked(Color),
    Cancelled,
}

impl PickedColor {
    /// The picked color, or `default` if the picker was dismissed.
    pub fn or(self, default: Color) -> Color {
        match self {
            PickedColor::Picked(color) => color,
            PickedColor::Cancelled => default,
        }
    }
}

impl From<Option<Color>> for PickedColor {
    fn from(value: Option<Color>) -> Self {
        value.map_or(PickedColor::Cancelled, PickedColor::Picked)
    }
}
