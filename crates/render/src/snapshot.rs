//! PNG export of a [`Canvas`].
//!
//! Feature-gated behind `png` (default on) so consumers that only need the
//! in-memory canvas do not pull in the `image` crate.

use potential_nav_core::NavError;
use std::path::Path;

use crate::canvas::Canvas;

/// Writes the canvas as an RGB8 PNG.
///
/// Returns `NavError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `NavError::Io` on write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), NavError> {
    let w = u32::try_from(canvas.width()).map_err(|_| NavError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| NavError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, canvas.data().to_vec())
        .ok_or_else(|| NavError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NavError::Io(e.to_string()))
}
