use std::io::ErrorKind;
use std::path::Path;

use image::{ImageError, RgbImage};

use crate::error::SampleError;
use crate::types::Rgb;

/// Read access to a decoded RGB pixel grid.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// Pixel at `(x, y)`. Callers guarantee the coordinate is in bounds.
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(self.get_pixel(x, y).0)
    }
}

/// Decodes a PNG or JPEG file into an 8-bit RGB grid, dropping any alpha.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, SampleError> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(img) => Ok(img.to_rgb8()),
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            Err(SampleError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Clamps a reported coordinate into `[0, width-1] x [0, height-1]`.
/// Returns `None` only for an image with no pixels.
pub fn clamp_coords(x: i64, y: i64, width: u32, height: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let x = x.clamp(0, i64::from(width) - 1) as u32;
    let y = y.clamp(0, i64::from(height) - 1) as u32;
    Some((x, y))
}

/// Maps a click on a display surface of `display` size onto image pixel space.
/// A zero display dimension leaves that axis unscaled. The result may still
/// be out of bounds and must go through [`clamp_coords`].
pub fn scale_to_image(x: f64, y: f64, display: (u32, u32), image: (u32, u32)) -> (i64, i64) {
    let axis = |v: f64, shown: u32, native: u32| {
        let v = if shown == 0 {
            v
        } else {
            v * f64::from(native) / f64::from(shown)
        };
        // NaN saturates to 0, infinities to the i64 bounds
        v.floor() as i64
    };
    (axis(x, display.0, image.0), axis(y, display.1, image.1))
}

/// Samples the pixel under a click, clamping the coordinate first.
/// Returns the clamped coordinate together with its color.
pub fn sample_pixel<S: PixelSource + ?Sized>(
    source: &S,
    x: i64,
    y: i64,
) -> Option<((u32, u32), Rgb)> {
    let (width, height) = source.dimensions();
    let (x, y) = clamp_coords(x, y, width, height)?;
    Some(((x, y), source.pixel(x, y)))
}
