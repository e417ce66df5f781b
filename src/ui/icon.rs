//! Window icon loading.

use std::path::Path;

use tao::window::{BadIcon, Icon};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot decode icon: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid icon data: {0}")]
    BadIcon(#[from] BadIcon),
}

/// Decodes an image file (PNG) into a window icon.
pub fn load_icon(path: &Path) -> Result<Icon, IconError> {
    let rgba = image::open(path)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Icon::from_rgba(rgba.into_raw(), width, height)?)
}
