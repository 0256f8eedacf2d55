use crate::types::Rgb;

/// Squared Euclidean distance in RGB space. At most `3 * 255^2`, so `u32` never overflows.
#[inline]
pub fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[inline]
pub fn euclidean(a: Rgb, b: Rgb) -> f64 {
    f64::from(distance_squared(a, b)).sqrt()
}
