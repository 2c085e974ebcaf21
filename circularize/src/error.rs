use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CircleError>;

/// Failures of a single circular icon run, one variant per stage.
#[derive(Debug, Error)]
pub enum CircleError {
    #[error("Unable to open source image {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode source image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Can't draw a mask of size {width}x{height}")]
    Mask { width: u32, height: u32 },

    #[error("Failed to fit image to {width}x{height}: {source}")]
    Fit {
        width: u32,
        height: u32,
        #[source]
        source: fast_image_resize::ResizeError,
    },

    #[error("Fitted buffer of {len} bytes doesn't hold a {width}x{height} RGBA image")]
    FitBuffer { width: u32, height: u32, len: usize },

    #[error("Mask {mask:?} doesn't match image {image:?}")]
    Composite { mask: (u32, u32), image: (u32, u32) },

    #[error("Unable to infer image format from {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to encode image for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
