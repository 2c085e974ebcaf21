mod round;

use std::{num::NonZeroU32, path::{Path, PathBuf}};
use image::{DynamicImage, GrayImage, ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{CircleError, Result};

pub use round::*;


#[derive(Clone, Debug)]
pub struct Transformable {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

impl Transformable {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width.get(), self.height.get())
    }
}

/// Read source image as RGBA. Fit target is a `size` sided square or the
/// source dimensions when no size is given.
pub fn transformable_img(importable: &Path, target_path: &Path, size: Option<NonZeroU32>)
-> Result<(Transformable, DynamicImage)> {
    let open_err = |e| CircleError::Open { path: importable.to_owned(), source: e };

    let reader = ImageReader::open(importable)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let format = reader.format();

    let img = reader.decode().map_err(|e|
        CircleError::Decode { path: importable.to_owned(), source: e }
    )?;

    // Everything downstream works on 4 channels
    let img = DynamicImage::ImageRgba8(img.into_rgba8());

    let (width, height) = match size {
        Some(s) => (s, s),
        None => {
            let zero = CircleError::Mask { width: img.width(), height: img.height() };

            match (NonZeroU32::new(img.width()), NonZeroU32::new(img.height())) {
                (Some(w), Some(h)) => (w, h),
                _ => return Err(zero),
            }
        }
    };

    debug!(
        "Loaded {:?} image {:?} of width: {} and height: {}, fit target {}x{}",
        format, importable, img.width(), img.height(), width, height
    );

    let transformable = Transformable {
        width,
        height,
        source_path: importable.to_owned(),
        target_path: target_path.to_owned(),
    };

    Ok((transformable, img))
}

/// Scale alpha of every pixel by the mask value. A binary mask keeps the
/// source alpha inside the shape and clears everything outside.
pub fn apply_alpha_mask(target: &mut RgbaImage, mask: &GrayImage) -> Result<()> {
    if target.dimensions() != mask.dimensions() {
        return Err(CircleError::Composite {
            mask: mask.dimensions(),
            image: target.dimensions(),
        });
    }

    for (x, y, p) in target.enumerate_pixels_mut() {
        let m = mask.get_pixel(x, y).0[0] as u16;

        p.0[3] = (p.0[3] as u16 * m / 255) as u8;
    }

    Ok(())
}
