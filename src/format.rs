use crate::types::Rgb;

/// `(r, g, b)` -> `"#RRGGBB"`, uppercase and zero-padded.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

pub fn pretty_rgb(r: u8, g: u8, b: u8) -> String {
    format!("({r}, {g}, {b})")
}

/// Decodes `#RRGGBB` or `RRGGBB` (any case, surrounding whitespace ignored).
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}
