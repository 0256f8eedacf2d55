use crate::error::SchemaError;

pub const NAME_ALIASES: &[&str] = &["name", "colorname", "colour", "colourname", "color_name"];
pub const RED_ALIASES: &[&str] = &["r", "red"];
pub const GREEN_ALIASES: &[&str] = &["g", "green"];
pub const BLUE_ALIASES: &[&str] = &["b", "blue"];
pub const HEX_ALIASES: &[&str] = &["hex", "hexcode", "hex_value", "hexvalue"];

/// Column indices resolved from a header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub r: Option<usize>,
    pub g: Option<usize>,
    pub b: Option<usize>,
    pub hex: Option<usize>,
}

impl ColumnMap {
    /// Resolves every logical field against `headers`. Aliases are tried in
    /// order; the first alias present in the header wins.
    pub fn resolve<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized: Vec<String> = headers
            .into_iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect();
        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias))
        };
        Self {
            name: find(NAME_ALIASES),
            r: find(RED_ALIASES),
            g: find(GREEN_ALIASES),
            b: find(BLUE_ALIASES),
            hex: find(HEX_ALIASES),
        }
    }

    pub fn rgb(&self) -> Option<(usize, usize, usize)> {
        Some((self.r?, self.g?, self.b?))
    }

    /// At least all of r, g, b or a hex column must be present.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.rgb().is_some() || self.hex.is_some() {
            return Ok(());
        }
        let mut missing = Vec::new();
        if self.r.is_none() {
            missing.push("r");
        }
        if self.g.is_none() {
            missing.push("g");
        }
        if self.b.is_none() {
            missing.push("b");
        }
        missing.push("hex");
        Err(SchemaError { missing })
    }
}
