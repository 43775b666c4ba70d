//! Film-grain overlay: a full-viewport RGBA buffer of uniform random gray,
//! regenerated every few frames so the grain visibly crawls.

use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct NoiseOptions {
    /// Regenerate the grain every this many frames
    pub refresh_interval: u64,
    /// Alpha byte written to every pixel
    pub alpha: u8,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self {
            refresh_interval: 2,
            alpha: 25,
        }
    }
}

impl NoiseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_interval(mut self, frames: u64) -> Self {
        self.refresh_interval = frames;
        self
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Grain state for one overlay surface. The host blits [`Noise::pattern`]
/// after each [`Noise::advance_frame`] that returns true.
pub struct Noise {
    options: NoiseOptions,
    width: u32,
    height: u32,
    pattern: Vec<u8>,
    frame: u64,
}

impl Noise {
    pub fn new(width: u32, height: u32, options: NoiseOptions) -> Self {
        let mut noise = Self {
            options,
            width: 0,
            height: 0,
            pattern: Vec::new(),
            frame: 0,
        };
        noise.resize(width, height);
        noise
    }

    /// Reallocate the buffer for a new surface size. The next redraw fills it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pattern = vec![0; width as usize * height as usize * 4];
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes, row-major
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Advance one frame, redrawing the grain on the configured cadence.
    /// Returns true when the buffer changed.
    pub fn advance_frame<R: Rng>(&mut self, rng: &mut R) -> bool {
        let interval = self.options.refresh_interval.max(1);
        let redraw = self.frame % interval == 0 && !self.pattern.is_empty();
        if redraw {
            self.draw_grain(rng);
        }
        self.frame = self.frame.wrapping_add(1);
        redraw
    }

    fn draw_grain<R: Rng>(&mut self, rng: &mut R) {
        let alpha = self.options.alpha;
        for pixel in self.pattern.chunks_exact_mut(4) {
            let value = rng.gen::<u8>();
            pixel[0] = value;
            pixel[1] = value;
            pixel[2] = value;
            pixel[3] = alpha;
        }
    }
}
