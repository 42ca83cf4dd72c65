//! Drawing surface abstraction and an in-memory software implementation.

use brickyard_core::types::{Color, Rect};

/// What a Render system draws onto. Backends provide one per frame.
pub trait Surface {
    /// (width, height) in pixels.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    /// Fill `rect` with `color`, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// RGBA pixel buffer. Fills overwrite; there is no blending.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fill_calls: usize,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            fill_calls: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of `fill_rect` calls since the last `clear`.
    pub fn fill_calls(&self) -> usize {
        self.fill_calls
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        self.fill_calls = 0;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_calls += 1;
        let Some(clipped) = rect.intersect(&self.bounds()) else {
            return;
        };
        let min = clipped.min();
        let max = clipped.max();
        let (x0, y0) = (min.x as usize, min.y as usize);
        let (x1, y1) = (max.x as usize, max.y as usize);
        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(color);
        }
    }
}
