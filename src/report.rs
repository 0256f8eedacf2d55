use std::fmt;

use serde::Serialize;

use crate::color_table::ColorTable;
use crate::sample::{sample_pixel, PixelSource};
use crate::types::{MatchResult, Rgb};

/// Everything shown for one click.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PixelReport {
    pub x: u32,
    pub y: u32,
    pub rgb: Rgb,
    pub hex: String,
    pub nearest: Option<MatchResult>,
}

/// Samples `(x, y)` from `source` and looks the color up in `table`.
/// `None` means the image has no pixels to sample.
pub fn inspect<S: PixelSource + ?Sized>(
    table: &ColorTable,
    source: &S,
    x: i64,
    y: i64,
) -> Option<PixelReport> {
    let ((x, y), rgb) = sample_pixel(source, x, y)?;
    Some(PixelReport {
        x,
        y,
        rgb,
        hex: rgb.to_hex(),
        nearest: table.nearest(rgb),
    })
}

impl fmt::Display for PixelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clicked at image pixel coordinates: x={}, y={}", self.x, self.y)?;
        writeln!(f, "Exact colour at clicked pixel:")?;
        writeln!(f, "  RGB: {}", self.rgb)?;
        writeln!(f, "  HEX: {}", self.hex)?;
        match &self.nearest {
            Some(m) => {
                writeln!(f, "Nearest named colour: {}", m.name())?;
                write!(f, "{}", MatchLines(m))
            }
            None => writeln!(f, "No match: the reference dataset is empty"),
        }
    }
}

/// The indented RGB / HEX / distance block for one match.
pub struct MatchLines<'a>(pub &'a MatchResult);

impl fmt::Display for MatchLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  RGB: {}", self.0.rgb())?;
        writeln!(f, "  HEX: {}", self.0.hex())?;
        writeln!(f, "  Distance (RGB Euclidean): {:.2}", self.0.distance)
    }
}
