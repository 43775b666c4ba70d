//! Self-contained page effects alongside the target cursor. Each consumes the
//! shared scene/scheduler vocabulary but none of the cursor engine's state.

mod blur_text;
mod magnet;
mod noise;
mod scramble;
mod starfield;

pub use blur_text::{word_style, BlurReveal, BlurRevealOptions, SlideFrom, WordStyle};
pub use magnet::{Magnet, MagnetOptions};
pub use noise::{Noise, NoiseOptions};
pub use scramble::{RevealFrom, ScrambleOptions, ScrambleText};
pub use starfield::{Sprite, Starfield, StarfieldConfig};
