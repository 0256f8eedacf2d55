//! Exact pixel colors and nearest named-color lookup against a CSV reference table.

pub mod color_table;
pub mod distance;
pub mod error;
pub mod format;
pub mod loader;
pub mod report;
pub mod sample;
pub mod schema;
pub mod types;

pub use color_table::{nearest, ColorTable};
pub use error::{LoadError, RowError, SampleError, SchemaError};
pub use format::{parse_hex, pretty_rgb, rgb_to_hex};
pub use loader::load;
pub use report::{inspect, PixelReport};
pub use types::{ColorRecord, MatchResult, Rgb};
