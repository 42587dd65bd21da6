use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::FilmstripResult;

#[derive(Clone, Debug)]
/// Decoded raster frame in straight (non-premultiplied) RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major RGBA8, tightly packed.
    pub rgba8: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Dimensions as a float size.
    pub fn size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) into a [`PreparedImage`].
pub fn decode_image(bytes: &[u8]) -> FilmstripResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}
