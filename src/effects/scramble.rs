//! Scrambled text reveal: characters flicker through random stand-ins and
//! settle on the real text, either all at once or one index at a time.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+";

/// Order in which sequential mode uncovers characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealFrom {
    /// Left to right
    Start,
    /// Right to left
    End,
    /// Middle outward, alternating sides
    Center,
}

#[derive(Debug, Clone)]
pub struct ScrambleOptions {
    /// Seconds between scramble steps
    pub step_interval: f32,
    /// Whole-text rescrambles before settling (non-sequential mode)
    pub max_iterations: u32,
    /// Reveal one character per step instead of rescrambling everything
    pub sequential: bool,
    pub reveal_from: RevealFrom,
    /// Draw stand-ins from the text's own characters instead of the charset
    pub use_original_chars: bool,
    pub charset: Vec<char>,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            step_interval: 0.05,
            max_iterations: 10,
            sequential: false,
            reveal_from: RevealFrom::Start,
            use_original_chars: false,
            charset: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl ScrambleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_interval(mut self, seconds: f32) -> Self {
        self.step_interval = seconds;
        self
    }

    pub fn max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn reveal_from(mut self, direction: RevealFrom) -> Self {
        self.reveal_from = direction;
        self
    }

    pub fn use_original_chars(mut self, use_original: bool) -> Self {
        self.use_original_chars = use_original;
        self
    }

    pub fn charset(mut self, charset: impl AsRef<str>) -> Self {
        self.charset = charset.as_ref().chars().collect();
        self
    }
}

/// One piece of text with a scramble-reveal lifecycle. Starts settled;
/// [`ScrambleText::start`] kicks off scrambling (hover-enter in the original
/// styling), [`ScrambleText::reset`] snaps back to the settled text.
pub struct ScrambleText {
    original: Vec<char>,
    display: String,
    revealed: HashSet<usize>,
    options: ScrambleOptions,
    running: bool,
    accumulator: f32,
    iterations: u32,
}

impl ScrambleText {
    pub fn new(text: &str, options: ScrambleOptions) -> Self {
        Self {
            original: text.chars().collect(),
            display: text.to_string(),
            revealed: HashSet::new(),
            options,
            running: false,
            accumulator: 0.0,
            iterations: 0,
        }
    }

    /// Current text to draw.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a fresh scramble cycle.
    pub fn start(&mut self) {
        self.running = true;
        self.revealed.clear();
        self.iterations = 0;
        self.accumulator = 0.0;
    }

    /// Abort and show the settled text.
    pub fn reset(&mut self) {
        self.running = false;
        self.revealed.clear();
        self.display = self.original.iter().collect();
    }

    /// Step the effect; returns true when the displayed text changed.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        if !self.running {
            return false;
        }
        let interval = self.options.step_interval.max(0.001);
        self.accumulator += dt;
        let mut changed = false;
        while self.running && self.accumulator >= interval {
            self.accumulator -= interval;
            self.step(rng);
            changed = true;
        }
        changed
    }

    fn step<R: Rng>(&mut self, rng: &mut R) {
        if self.options.sequential {
            if self.revealed.len() < self.original.len() {
                let next = self.next_index();
                self.revealed.insert(next);
                self.display = self.scrambled(rng);
            } else {
                self.running = false;
            }
        } else {
            self.display = self.scrambled(rng);
            self.iterations += 1;
            if self.iterations >= self.options.max_iterations {
                self.running = false;
                self.display = self.original.iter().collect();
            }
        }
    }

    /// Next character position to uncover. Center order alternates outward
    /// from the middle and falls back to the first covered index once a side
    /// runs out.
    fn next_index(&self) -> usize {
        let len = self.original.len();
        match self.options.reveal_from {
            RevealFrom::Start => self.revealed.len(),
            RevealFrom::End => len - 1 - self.revealed.len(),
            RevealFrom::Center => {
                let middle = len / 2;
                let offset = self.revealed.len() / 2;
                let candidate = if self.revealed.len() % 2 == 0 {
                    Some(middle + offset)
                } else {
                    middle.checked_sub(offset + 1)
                };
                match candidate {
                    Some(index) if index < len && !self.revealed.contains(&index) => index,
                    _ => (0..len)
                        .find(|index| !self.revealed.contains(index))
                        .unwrap_or(0),
                }
            }
        }
    }

    fn scrambled<R: Rng>(&self, rng: &mut R) -> String {
        if self.options.use_original_chars {
            let mut pool: Vec<char> = self
                .original
                .iter()
                .copied()
                .filter(|c| *c != ' ')
                .collect();
            pool.shuffle(rng);
            let mut stand_ins = pool.into_iter();
            self.original
                .iter()
                .enumerate()
                .map(|(index, &c)| {
                    if c == ' ' || self.revealed.contains(&index) {
                        c
                    } else {
                        stand_ins.next().unwrap_or(c)
                    }
                })
                .collect()
        } else {
            let charset = &self.options.charset;
            self.original
                .iter()
                .enumerate()
                .map(|(index, &c)| {
                    if c == ' ' || self.revealed.contains(&index) || charset.is_empty() {
                        c
                    } else {
                        charset[rng.gen_range(0..charset.len())]
                    }
                })
                .collect()
        }
    }
}
