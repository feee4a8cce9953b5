//! Decoded RGBA pixels that seed the point cloud.
//!
//! The sampler only ever reads the alpha channel, addressed the same way a
//! canvas `ImageData` buffer is: `rgba[(y * width + x) * 4 + channel]`.

use crate::error::BitmapError;
use std::path::Path;

/// Row-major RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    /// Wrap raw RGBA bytes (4 per pixel).
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::EmptyImage);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(BitmapError::SizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A fully transparent bitmap.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Decode an encoded image (PNG) held in memory.
    pub fn decode(bytes: &[u8]) -> Result<Self, BitmapError> {
        let img = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_raw())
    }

    /// Read and decode an image file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BitmapError> {
        let bytes = std::fs::read(path.as_ref())?;
        let bitmap = Self::decode(&bytes)?;
        log::debug!(
            "[bitmap] {} decoded at {}x{}",
            path.as_ref().display(),
            bitmap.width,
            bitmap.height
        );
        Ok(bitmap)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.rgba[(y as usize * self.width as usize + x as usize) * 4 + 3]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[i..i + 4].copy_from_slice(&rgba);
    }

    /// Draw this image at the origin of a transparent `width` x `height`
    /// canvas. Larger images are cropped, smaller ones padded.
    pub fn onto_canvas(&self, width: u32, height: u32) -> Bitmap {
        if self.width == width && self.height == height {
            return self.clone();
        }
        let mut canvas = Bitmap::transparent(width, height);
        let copy_w = self.width.min(width) as usize;
        for y in 0..self.height.min(height) as usize {
            let src = y * self.width as usize * 4;
            let dst = y * width as usize * 4;
            canvas.rgba[dst..dst + copy_w * 4].copy_from_slice(&self.rgba[src..src + copy_w * 4]);
        }
        canvas
    }

    /// Procedural shield used when no logo asset is available.
    ///
    /// Rows grow downward in the image but upward once sampled, so the point
    /// sits at low `y` and the flat edge at high `y`.
    pub fn shield(width: u32, height: u32) -> Bitmap {
        let mut bmp = Bitmap::transparent(width, height);
        let w = width as f32;
        let h = height as f32;
        let cx = w * 0.5;
        let (tip, shoulder, top) = (h * 0.1, h * 0.42, h * 0.9);
        let half = w * 0.36;
        let rim = w * 0.05;

        let half_width_at = |y: f32, inset: f32| -> f32 {
            if y < tip + inset || y > top - inset {
                return -1.0;
            }
            let full = half - inset;
            if y >= shoulder {
                full
            } else {
                let t = (y - tip - inset) / (shoulder - tip - inset);
                full * t.clamp(0.0, 1.0).sqrt()
            }
        };

        for y in 0..height {
            for x in 0..width {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;
                let dx = (fx - cx).abs();
                let outer = dx <= half_width_at(fy, 0.0);
                let inner = dx <= half_width_at(fy, rim);
                let bar = (fy - h * 0.62).abs() < rim * 0.8 && inner;
                let post = dx < rim * 0.8 && inner && fy > shoulder * 0.8;
                if (outer && !inner) || bar || post {
                    bmp.set_pixel(x, y, [20, 20, 20, 255]);
                }
            }
        }
        bmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let err = Bitmap::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::SizeMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn from_rgba_rejects_empty() {
        assert!(matches!(
            Bitmap::from_rgba(0, 4, Vec::new()),
            Err(BitmapError::EmptyImage)
        ));
    }

    #[test]
    fn onto_canvas_crops_and_pads() {
        let mut small = Bitmap::transparent(3, 2);
        small.set_pixel(2, 1, [1, 2, 3, 200]);
        let canvas = small.onto_canvas(4, 4);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.alpha(2, 1), 200);
        assert_eq!(canvas.alpha(3, 3), 0);

        let cropped = canvas.onto_canvas(3, 2);
        assert_eq!(cropped, small);
    }

    #[test]
    fn shield_has_opaque_and_clear_pixels() {
        let bmp = Bitmap::shield(100, 100);
        let opaque = bmp.as_rgba().chunks(4).filter(|p| p[3] > 0).count();
        assert!(opaque > 0);
        assert!(opaque < 100 * 100);
        // corners are always outside the shield
        assert_eq!(bmp.alpha(0, 0), 0);
        assert_eq!(bmp.alpha(99, 99), 0);
    }
}
