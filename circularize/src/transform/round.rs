use std::num::NonZeroU32;
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_ellipse_mut;


pub const MASK_CLEAR: Luma<u8> = Luma([0]);
pub const MASK_OPAQUE: Luma<u8> = Luma([255]);

/// Single channel mask with an opaque ellipse inscribed in the full bounding box.
pub fn round_mask(width: NonZeroU32, height: NonZeroU32) -> GrayImage {
    let (w, h) = (width.get(), height.get());

    // Half of a u32 is at most i32::MAX
    let center = ((w / 2) as i32, (h / 2) as i32);
    let mut mask = GrayImage::from_pixel(w, h, MASK_CLEAR);

    // Radii equal to the half sizes, ellipse touches every edge of the box
    draw_filled_ellipse_mut(&mut mask, center, center.0, center.1, MASK_OPAQUE);

    mask
}
