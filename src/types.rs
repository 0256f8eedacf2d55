use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{pretty_rgb, rgb_to_hex};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty_rgb(self.r, self.g, self.b))
    }
}

/// A named reference color. `hex` is always the canonical `#RRGGBB` of the channels.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ColorRecord {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub hex: String,
}

impl ColorRecord {
    /// Builds a record from channels, deriving the hex and, when `name` is
    /// blank, a `"Color #RRGGBB"` label.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        let hex = rgb.to_hex();
        let name = name.into();
        let name = match name.trim() {
            "" => format!("Color {hex}"),
            trimmed => trimmed.to_string(),
        };
        Self {
            name,
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            hex,
        }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: ColorRecord,
    pub distance: f64,
}

impl MatchResult {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn rgb(&self) -> Rgb {
        self.record.rgb()
    }

    pub fn hex(&self) -> &str {
        &self.record.hex
    }
}
