//! Flythrough particle cloud: a deep field of stars drifting toward the
//! camera, with a pointer-driven parallax tilt and occasional fast
//! "shooters" drawn as streaks.

use rand::Rng;

use crate::geometry::Point;

/// Trail tip overshoot past the projected point, as a fraction of the
/// point's distance from screen center
const TRAIL_STRETCH: f32 = 0.2;
/// Streak stroke width at scale 1
const TRAIL_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct StarfieldConfig {
    pub particle_count: usize,
    pub focal_length: f32,
    /// Far plane; particles live at z in (0, depth]
    pub depth: f32,
    /// Per-step z decrement for ordinary stars
    pub drift: f32,
    /// Pointer easing factor per step
    pub camera_ease: f32,
    /// Parallax tilt multiplier on the pointer offset from center
    pub camera_strength: f32,
    /// Spawn area multiplier over the viewport, to survive parallax shifts
    pub spread: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 800,
            focal_length: 400.0,
            depth: 2000.0,
            drift: 2.0,
            camera_ease: 0.05,
            camera_strength: 5.0,
            spread: 8.0,
        }
    }
}

impl StarfieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn focal_length(mut self, focal: f32) -> Self {
        self.focal_length = focal;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn drift(mut self, drift: f32) -> Self {
        self.drift = drift;
        self
    }

    pub fn camera_ease(mut self, ease: f32) -> Self {
        self.camera_ease = ease;
        self
    }

    pub fn camera_strength(mut self, strength: f32) -> Self {
        self.camera_strength = strength;
        self
    }

    pub fn spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    z: f32,
    size: f32,
    bright: bool,
    shooter: bool,
    vel_z: f32,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, config: &StarfieldConfig) -> Self {
        let shooter = rng.gen::<f32>() > 0.95;
        Self {
            x: (rng.gen::<f32>() - 0.5) * width * config.spread,
            y: (rng.gen::<f32>() - 0.5) * height * config.spread,
            z: rng.gen::<f32>() * config.depth,
            size: rng.gen::<f32>() * 3.0 + 1.5,
            bright: rng.gen::<f32>() > 0.5,
            shooter,
            vel_z: if shooter {
                rng.gen::<f32>() * 20.0 + 10.0
            } else {
                0.0
            },
        }
    }
}

/// One projected particle, ready to draw. `trail` carries the streak tip
/// and stroke width for shooters; ordinary stars are dots of `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    /// White star when true, gray otherwise
    pub bright: bool,
    pub trail: Option<(Point, f32)>,
}

pub struct Starfield {
    config: StarfieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Point,
    pointer_target: Point,
}

impl Starfield {
    pub fn new<R: Rng>(width: f32, height: f32, config: StarfieldConfig, rng: &mut R) -> Self {
        let center = Point {
            x: width / 2.0,
            y: height / 2.0,
        };
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(rng, width, height, &config))
            .collect();
        Self {
            config,
            width,
            height,
            particles,
            pointer: center,
            pointer_target: center,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Eased pointer position driving the camera tilt
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Respawn the whole field for a new viewport size.
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::spawn(rng, width, height, &self.config))
            .collect();
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer_target = Point { x, y };
    }

    /// Drift the camera back to a straight-ahead view.
    pub fn pointer_left(&mut self) {
        self.pointer_target = Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        };
    }

    /// Advance one frame: ease the camera toward the pointer, move every
    /// particle toward the viewer, respawn those that pass the near plane
    /// at the far end.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let ease = self.config.camera_ease;
        self.pointer.x += (self.pointer_target.x - self.pointer.x) * ease;
        self.pointer.y += (self.pointer_target.y - self.pointer.y) * ease;

        for particle in &mut self.particles {
            let speed = if particle.shooter {
                particle.vel_z
            } else {
                self.config.drift
            };
            particle.z -= speed;
            if particle.z <= 0.0 {
                *particle = Particle::spawn(rng, self.width, self.height, &self.config);
                particle.z = self.config.depth;
            }
        }
    }

    /// Project the field to screen space. Nearer particles shift harder
    /// against the camera tilt, scale up, and lose the depth fog.
    pub fn project(&self) -> Vec<Sprite> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let camera_x = (self.pointer.x - half_w) * self.config.camera_strength;
        let camera_y = (self.pointer.y - half_h) * self.config.camera_strength;
        let focal = self.config.focal_length;
        let depth = self.config.depth;

        self.particles
            .iter()
            .map(|particle| {
                let shift_x = camera_x * (depth - particle.z) / depth;
                let shift_y = camera_y * (depth - particle.z) / depth;
                let scale = focal / (focal + particle.z);
                let x = (particle.x - shift_x) * scale + half_w;
                let y = (particle.y - shift_y) * scale + half_h;
                let trail = particle.shooter.then(|| {
                    let tip = Point {
                        x: x + (x - half_w) * TRAIL_STRETCH,
                        y: y + (y - half_h) * TRAIL_STRETCH,
                    };
                    (tip, TRAIL_WIDTH * scale)
                });
                Sprite {
                    x,
                    y,
                    radius: particle.size * scale,
                    alpha: (scale * 2.0).min(1.0),
                    bright: particle.bright,
                    trail,
                }
            })
            .collect()
    }
}
