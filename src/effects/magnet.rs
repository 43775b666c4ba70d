//! Magnetic hover: an element leans toward the pointer once it comes near.

use crate::animation::{Channel, NodeId, Scheduler, TimingFunction, Transition};
use crate::geometry::Point;
use crate::scene::{ElementId, Scene};

/// CSS `ease-out`, used while the magnet is attracting
const ATTRACT_TIMING: TimingFunction = TimingFunction::CubicBezier(0.0, 0.0, 0.58, 1.0);
/// CSS `ease-in-out`, used while the offset relaxes back to zero
const RELEASE_TIMING: TimingFunction = TimingFunction::CubicBezier(0.42, 0.0, 0.58, 1.0);

#[derive(Debug, Clone)]
pub struct MagnetOptions {
    /// Distance beyond the element's rectangle where attraction starts
    pub padding: f32,
    /// Divisor applied to the pointer's distance from center; higher is weaker
    pub strength: f32,
    /// Seconds for the offset to follow the pointer while attracting
    pub attract_duration: f32,
    /// Seconds for the offset to settle back to zero on release
    pub release_duration: f32,
    pub disabled: bool,
}

impl Default for MagnetOptions {
    fn default() -> Self {
        Self {
            padding: 100.0,
            strength: 2.0,
            attract_duration: 0.3,
            release_duration: 0.5,
            disabled: false,
        }
    }
}

impl MagnetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Per-element magnetic pull. The offset lives on a scheduler node's X/Y
/// channels; hosts apply it as a translation when drawing the element.
pub struct Magnet {
    element: ElementId,
    node: NodeId,
    options: MagnetOptions,
    active: bool,
}

impl Magnet {
    pub fn new(scheduler: &mut Scheduler, element: ElementId, options: MagnetOptions) -> Self {
        let node = scheduler.node();
        scheduler.set(node, Channel::X, 0.0);
        scheduler.set(node, Channel::Y, 0.0);
        Self {
            element,
            node,
            options,
            active: false,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn offset(&self, scheduler: &Scheduler) -> Point {
        Point::new(
            scheduler.get(self.node, Channel::X),
            scheduler.get(self.node, Channel::Y),
        )
    }

    /// Feed a pointer position; eases the offset toward
    /// `(pointer − center) / strength` inside the padded rectangle and back
    /// to zero outside it.
    pub fn pointer_move<S>(&mut self, scheduler: &mut Scheduler, scene: &S, x: f32, y: f32)
    where
        S: Scene + ?Sized,
    {
        if self.options.disabled {
            self.pin(scheduler);
            return;
        }
        let Some(rect) = scene.bounds(self.element) else {
            if self.active {
                self.release(scheduler);
            }
            return;
        };
        let center = rect.center();
        let within = (x - center.x).abs() < rect.width / 2.0 + self.options.padding
            && (y - center.y).abs() < rect.height / 2.0 + self.options.padding;
        if within {
            self.active = true;
            let offset_x = (x - center.x) / self.options.strength;
            let offset_y = (y - center.y) / self.options.strength;
            scheduler.to(
                self.node,
                &[(Channel::X, offset_x), (Channel::Y, offset_y)],
                Transition::new(self.options.attract_duration, ATTRACT_TIMING),
            );
        } else if self.active {
            self.release(scheduler);
        }
    }

    /// Ease the offset back to zero (pointer gone or out of range).
    pub fn release(&mut self, scheduler: &mut Scheduler) {
        self.active = false;
        scheduler.to(
            self.node,
            &[(Channel::X, 0.0), (Channel::Y, 0.0)],
            Transition::new(self.options.release_duration, RELEASE_TIMING),
        );
    }

    /// Snap to zero with no animation.
    fn pin(&mut self, scheduler: &mut Scheduler) {
        self.active = false;
        scheduler.kill(self.node);
        scheduler.set(self.node, Channel::X, 0.0);
        scheduler.set(self.node, Channel::Y, 0.0);
    }
}
