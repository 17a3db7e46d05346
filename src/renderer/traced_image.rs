use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::error::RenderError;
use crate::float::*;

use super::coordinator::Block;

/// Number of channels stored per pixel
pub const CHANNELS: usize = 4;

/// Linear RGBA image that averages every block written to it
pub struct TracedImage {
    raw_image: Vec<f32>,
    n_samples: Vec<u32>,
    width: u32,
    height: u32,
}

impl TracedImage {
    pub fn empty(width: u32, height: u32) -> TracedImage {
        let n_pixels = width as usize * height as usize;
        let raw_image = vec![0.0; CHANNELS * n_pixels];
        let n_samples = vec![0; n_pixels];
        TracedImage {
            raw_image,
            n_samples,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fold a block of RGBA values into the running average
    pub fn update_block(&mut self, block: Block, data: &[f32]) {
        for h in 0..block.height {
            for w in 0..block.width {
                let row = (h + block.top) as usize;
                let i_image = row * self.width as usize + (w + block.left) as usize;
                let i_block = h as usize * block.width as usize + w as usize;
                let n = self.n_samples[i_image] + 1;
                self.n_samples[i_image] = n;
                for c in 0..CHANNELS {
                    let old_val = self.raw_image[CHANNELS * i_image + c];
                    let new_val =
                        old_val + 1.0 / (n as f32) * (data[CHANNELS * i_block + c] - old_val);
                    self.raw_image[CHANNELS * i_image + c] = new_val;
                }
            }
        }
    }

    /// Linear color and alpha of a pixel
    pub fn pixel(&self, x: u32, y: u32) -> (Color, Float) {
        let i = CHANNELS * (y as usize * self.width as usize + x as usize);
        let px = &self.raw_image[i..i + CHANNELS];
        (
            Color::from([px[0], px[1], px[2]]),
            px[3].to_float(),
        )
    }

    /// Clamp to displayable range
    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let (c, alpha) = self.pixel(x, y);
            Rgba(c.to_rgba8(alpha))
        })
    }

    pub fn save_image(&self, path: &Path) -> Result<(), RenderError> {
        self.to_rgba8().save(path)?;
        Ok(())
    }
}
