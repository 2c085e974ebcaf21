use std::{fs::{create_dir_all, write}, io::Cursor, path::Path};
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{CircleError, Result};


/// Encode image with a format inferred from the target file extension.
pub fn encode_for(image: &RgbaImage, target: &Path) -> Result<Vec<u8>> {
    let format = ImageFormat::from_path(target).map_err(|_|
        CircleError::UnsupportedFormat { path: target.to_owned() }
    )?;

    let mut buf = Cursor::new(vec![]);

    image.write_to(&mut buf, format).map_err(|e|
        CircleError::Encode { path: target.to_owned(), source: e }
    )?;

    Ok(buf.into_inner())
}

pub fn save_image(image: &RgbaImage, target: &Path) -> Result<()> {
    let write_err = |e| CircleError::Write { path: target.to_owned(), source: e };
    let buf = encode_for(image, target)?;

    if let Some(dir) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.is_dir() {
            create_dir_all(dir).map_err(write_err)?;

            debug!("Created target dir {:?}", dir);
        }
    }

    write(target, &buf).map_err(write_err)
}
