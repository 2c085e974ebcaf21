pub mod writer;

use fast_image_resize::images::Image;
use fast_image_resize::{IntoImageView, PixelType, ResizeOptions, Resizer, SrcCropping};
use image::RgbaImage;
use tracing::debug;

use crate::error::{CircleError, Result};
use crate::transform::Transformable;

pub use writer::*;


/// Horizontal and vertical centering of the crop window.
pub const CENTERING: (f64, f64) = (0.5, 0.5);

/// Crop the source around its center to the target aspect ratio and resample
/// it to exactly the target dimensions.
pub fn fit_image(transformable: &Transformable, original: &impl IntoImageView) -> Result<RgbaImage> {
    let (w, h) = transformable.dimensions();
    let fit_err = |e| CircleError::Fit { width: w, height: h, source: e };

    let mut options = ResizeOptions::new();
    options.cropping = SrcCropping::FitIntoDestination(CENTERING);

    let mut resized = Image::new(w, h, PixelType::U8x4);
    let mut resizer = Resizer::new();

    debug!("Fitting {:?} to width: {} and height: {}...", transformable.source_path, w, h);

    resizer.resize(original, &mut resized, &options).map_err(fit_err)?;

    rgba_from_buffer(w, h, resized.buffer().to_vec())
}

fn rgba_from_buffer(w: u32, h: u32, buf: Vec<u8>) -> Result<RgbaImage> {
    let len = buf.len();

    RgbaImage::from_raw(w, h, buf).ok_or(CircleError::FitBuffer { width: w, height: h, len })
}
