use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::RenderConfig;

/// Rectangular region of the image, rows counted from the top
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Block {
    pub fn n_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Hands out image blocks to the render workers
pub struct RenderCoordinator {
    pub width: u32,
    pub height: u32,
    max_blocks: usize,
    current_block: AtomicUsize,
    block_width: u32,
    block_height: u32,
    x_blocks: usize,
    y_blocks: usize,
}

impl RenderCoordinator {
    pub fn new(config: &RenderConfig) -> RenderCoordinator {
        let width = config.width;
        let height = config.height;
        let block_height = 32;
        let block_width = 32;
        let x_blocks = (f64::from(width) / f64::from(block_width)).ceil() as usize;
        let y_blocks = (f64::from(height) / f64::from(block_height)).ceil() as usize;
        let blocks_per_iter = x_blocks * y_blocks;
        let max_blocks = config.iterations * blocks_per_iter;
        RenderCoordinator {
            width,
            height,
            max_blocks,
            current_block: AtomicUsize::new(0),
            block_width,
            block_height,
            x_blocks,
            y_blocks,
        }
    }

    pub fn next_block(&self) -> Option<Block> {
        let block_i = self.current_block.fetch_add(1, Ordering::Relaxed);
        if block_i >= self.max_blocks {
            return None;
        }
        let iter_i = block_i % (self.x_blocks * self.y_blocks);
        let x_i = (iter_i % self.x_blocks) as u32;
        let y_i = (iter_i / self.x_blocks) as u32;
        let start_x = self.block_width * x_i;
        let end_x = (self.block_width * (x_i + 1)).min(self.width);
        let start_y = self.block_height * y_i;
        let end_y = (self.block_height * (y_i + 1)).min(self.height);
        Some(Block {
            left: start_x,
            top: start_y,
            width: end_x - start_x,
            height: end_y - start_y,
        })
    }
}
