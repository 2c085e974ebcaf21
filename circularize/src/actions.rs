use std::{num::NonZeroU32, path::Path};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::resize::{fit_image, save_image};
use crate::transform::{apply_alpha_mask, round_mask, transformable_img};


/// Produce a circular icon from `importable` into `target`. Every failure is
/// reported through the log only, callers carry on regardless.
pub fn make_circle(importable: &Path, target: &Path, size: Option<NonZeroU32>) {
    match circle_action(importable, target, size) {
        Ok(()) => info!("Created circular icon at {}", target.display()),
        Err(e) => error!("Failed to create circular icon {}: {}", target.display(), e),
    }
}

pub fn circle_action(importable: &Path, target: &Path, size: Option<NonZeroU32>) -> Result<()> {
    let (transformable, img) = transformable_img(importable, target, size)?;

    let mask = round_mask(transformable.width, transformable.height);
    debug!("Drew {}x{} round mask", mask.width(), mask.height());

    let mut output = fit_image(&transformable, &img)?;
    apply_alpha_mask(&mut output, &mask)?;

    save_image(&output, &transformable.target_path)
}
