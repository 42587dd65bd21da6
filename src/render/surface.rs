use kurbo::Rect;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::FrameIndex;
use crate::render::cover::cover_crop;
use crate::sequence::store::SequenceStore;

/// Drawing surface capability.
///
/// The engine draws one frame at a time and always fills the whole surface;
/// implementations only need a clear and a scaled blit of a source rectangle.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Clear the whole surface to transparent black.
    fn clear(&mut self);

    /// Draw `src` (a rectangle in image pixel space) scaled to fill the whole
    /// surface.
    fn draw_cover(&mut self, image: &PreparedImage, src: Rect);
}

/// Draw the given frame into the surface with cover-fit cropping.
///
/// A silent no-op when the frame has not loaded (or failed): the last drawn
/// frame remains on the surface.
pub fn render_frame(surface: &mut dyn Surface, store: &SequenceStore, frame: FrameIndex) {
    let Some(image) = store.get(frame) else {
        return;
    };
    let target = kurbo::Size::new(f64::from(surface.width()), f64::from(surface.height()));
    let src = cover_crop(target, image.size());
    surface.clear();
    surface.draw_cover(image, src);
}

#[derive(Clone, Debug)]
/// Owned RGBA8 surface with nearest-neighbor sampling.
///
/// Used by the CLI and tests; a real display surface implements [`Surface`]
/// over its platform drawing API instead.
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SoftwareSurface {
    /// Create a cleared surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Pixel bytes in row-major RGBA8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA8 pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

impl Surface for SoftwareSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn draw_cover(&mut self, image: &PreparedImage, src: Rect) {
        if self.width == 0 || self.height == 0 || src.width() <= 0.0 || src.height() <= 0.0 {
            return;
        }

        let iw = image.width as usize;
        let ih = image.height as usize;
        if iw == 0 || ih == 0 {
            return;
        }

        let sx_per_px = src.width() / f64::from(self.width);
        let sy_per_px = src.height() / f64::from(self.height);

        for y in 0..self.height as usize {
            let sy = src.y0 + (y as f64 + 0.5) * sy_per_px;
            let syi = (sy.floor().max(0.0) as usize).min(ih - 1);
            let src_row = &image.rgba8[syi * iw * 4..(syi + 1) * iw * 4];
            let dst_row = &mut self.data[y * self.width as usize * 4..];

            for x in 0..self.width as usize {
                let sx = src.x0 + (x as f64 + 0.5) * sx_per_px;
                let sxi = (sx.floor().max(0.0) as usize).min(iw - 1);
                dst_row[x * 4..x * 4 + 4].copy_from_slice(&src_row[sxi * 4..sxi * 4 + 4]);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
