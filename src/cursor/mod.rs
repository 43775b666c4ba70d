//! The target cursor engine.
//!
//! A pointer-driven state machine that tracks which scene element is
//! "targeted", swings four corner markers out to frame it, and blends between
//! a free-spinning idle cursor and the locked-on frame. The engine owns no
//! clock and no event loop: the host forwards [`Event`]s to
//! [`TargetCursor::handle_event`] and drives time through
//! [`TargetCursor::advance`], then reads the visual state (wrapper position,
//! rotation, scale, corner offsets) back out of the [`Scheduler`] for
//! rendering.

mod corners;
mod resolver;
mod tracker;

pub use corners::{frame_corners, idle_offsets, CORNER_COUNT};
pub use resolver::resolve_target;
pub use tracker::PointerTracker;

use crate::animation::{
    Channel, NodeId, Scheduler, TickerId, TimelineId, TimingFunction, Transition,
};
use crate::event::{Event, EventResponse};
use crate::geometry::Point;
use crate::platform::Platform;
use crate::scene::{ElementId, Scene};

/// Seconds the corners take to swing out toward a fresh target
const ENTER_DURATION: f32 = 0.2;
/// Seconds the corners take to fall back to their idle offsets
const LEAVE_DURATION: f32 = 0.3;
/// Seconds after deactivation before the idle spin resumes
const SETTLE_DELAY: f32 = 0.05;

const PRESS_DOT_SCALE: f32 = 0.7;
const PRESS_CURSOR_SCALE: f32 = 0.9;
const DOT_PRESS_DURATION: f32 = 0.3;
const CURSOR_PRESS_DURATION: f32 = 0.2;

/// Fixed-at-install tuning for the cursor engine.
#[derive(Debug, Clone)]
pub struct CursorConfig {
    /// Seconds per full idle revolution
    pub spin_duration: f32,
    /// Seconds for activation strength to ease from 0 to 1
    pub hover_duration: f32,
    /// How far the frame sits outside the target's rectangle
    pub border_width: f32,
    /// Edge length of one corner marker
    pub corner_size: f32,
    /// Whether the host should hide its native pointer while installed
    pub hide_native_cursor: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            spin_duration: 1.0,
            hover_duration: 0.8,
            border_width: 3.0,
            corner_size: 12.0,
            hide_native_cursor: true,
        }
    }
}

impl CursorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin_duration(mut self, seconds: f32) -> Self {
        self.spin_duration = seconds;
        self
    }

    pub fn hover_duration(mut self, seconds: f32) -> Self {
        self.hover_duration = seconds;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn corner_size(mut self, size: f32) -> Self {
        self.corner_size = size;
        self
    }

    pub fn hide_native_cursor(mut self, hide: bool) -> Self {
        self.hide_native_cursor = hide;
        self
    }
}

/// Scheduler nodes making up the cursor visual.
///
/// The wrapper carries position (viewport pixels), rotation (degrees,
/// unbounded) and scale; the dot carries scale; each corner carries its
/// offset relative to the wrapper; the strength node carries the activation
/// scalar on [`Channel::Value`].
#[derive(Debug, Clone, Copy)]
pub struct CursorVisual {
    pub wrapper: NodeId,
    pub dot: NodeId,
    pub corners: [NodeId; CORNER_COUNT],
    pub strength: NodeId,
}

impl CursorVisual {
    fn new(scheduler: &mut Scheduler) -> Self {
        Self {
            wrapper: scheduler.node(),
            dot: scheduler.node(),
            corners: [
                scheduler.node(),
                scheduler.node(),
                scheduler.node(),
                scheduler.node(),
            ],
            strength: scheduler.node(),
        }
    }
}

/// Where the engine currently is in its activation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    /// No target; the cursor spins freely
    Idle,
    /// A target is acquired and strength is still easing toward 1
    Entering,
    /// Fully locked onto the active target
    Locked,
}

pub struct TargetCursor {
    config: CursorConfig,
    visual: CursorVisual,
    tracker: PointerTracker,
    spin: TimelineId,
    blend_ticker: Option<TickerId>,
    active: Option<ElementId>,
    frame: Option<[Point; CORNER_COUNT]>,
    settle_deadline: Option<f64>,
}

impl TargetCursor {
    /// Set up the cursor visual and start the idle spin. Returns `None` on
    /// platforms where the effect is disabled (see [`Platform::is_mobile`]).
    pub fn install(
        config: CursorConfig,
        platform: &Platform,
        scheduler: &mut Scheduler,
    ) -> Option<Self> {
        if platform.is_mobile() {
            log::info!("target cursor disabled: mobile environment");
            return None;
        }

        let visual = CursorVisual::new(scheduler);
        let center = platform.viewport_center();
        scheduler.set(visual.wrapper, Channel::X, center.x);
        scheduler.set(visual.wrapper, Channel::Y, center.y);
        scheduler.set(visual.wrapper, Channel::Scale, 1.0);
        scheduler.set(visual.dot, Channel::Scale, 1.0);
        for (node, rest) in visual.corners.iter().zip(idle_offsets(config.corner_size)) {
            scheduler.set(*node, Channel::X, rest.x);
            scheduler.set(*node, Channel::Y, rest.y);
        }
        let spin = scheduler.repeat(visual.wrapper, Channel::Rotation, 360.0, config.spin_duration);

        log::info!(
            "target cursor installed (spin {}s, hover {}s)",
            config.spin_duration,
            config.hover_duration
        );
        Some(Self {
            tracker: PointerTracker::new(visual.wrapper, center),
            config,
            visual,
            spin,
            blend_ticker: None,
            active: None,
            frame: None,
            settle_deadline: None,
        })
    }

    /// Feed one host event through the state machine.
    pub fn handle_event<S>(
        &mut self,
        scheduler: &mut Scheduler,
        scene: &S,
        event: &Event,
    ) -> EventResponse
    where
        S: Scene + ?Sized,
    {
        match *event {
            Event::MouseMove { x, y } => {
                self.tracker.move_to(scheduler, x, y);
                EventResponse::Handled
            }
            Event::MouseOver { element } => match resolve_target(scene, element) {
                Some(target) if self.active != Some(target) => {
                    self.activate(scheduler, scene, target);
                    EventResponse::Handled
                }
                // Hovering deeper into the active target changes nothing.
                Some(_) => EventResponse::Handled,
                None => EventResponse::Ignored,
            },
            Event::MouseLeave { element } => {
                if self.active == Some(element) {
                    self.deactivate(scheduler);
                    EventResponse::Handled
                } else {
                    EventResponse::Ignored
                }
            }
            Event::MouseDown { .. } => {
                self.press(scheduler);
                EventResponse::Handled
            }
            Event::MouseUp { .. } => {
                self.release(scheduler);
                EventResponse::Handled
            }
            Event::Scroll { .. } => self.revalidate_after_scroll(scheduler, scene),
        }
    }

    /// Advance the scheduler by `dt` seconds, then run the settle timer.
    /// Call once per frame.
    pub fn advance(&mut self, scheduler: &mut Scheduler, dt: f32) {
        scheduler.advance(dt);
        if let Some(deadline) = self.settle_deadline {
            if scheduler.now() >= deadline {
                self.settle_deadline = None;
                if self.active.is_none() {
                    self.resume_spin(scheduler);
                }
            }
        }
    }

    pub fn phase(&self, scheduler: &Scheduler) -> CursorPhase {
        match self.active {
            None => CursorPhase::Idle,
            Some(_) if scheduler.get(self.visual.strength, Channel::Value) >= 1.0 => {
                CursorPhase::Locked
            }
            Some(_) => CursorPhase::Entering,
        }
    }

    pub fn active_target(&self) -> Option<ElementId> {
        self.active
    }

    /// Captured frame corner positions for the active target, if any.
    pub fn frame(&self) -> Option<[Point; CORNER_COUNT]> {
        self.frame
    }

    pub fn visual(&self) -> &CursorVisual {
        &self.visual
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn hides_native_cursor(&self) -> bool {
        self.config.hide_native_cursor
    }

    /// Lock onto `target`, tearing down whatever was active first.
    fn activate<S>(&mut self, scheduler: &mut Scheduler, scene: &S, target: ElementId)
    where
        S: Scene + ?Sized,
    {
        let Some(rect) = scene.bounds(target) else {
            return;
        };
        log::debug!("targeting {target:?}");
        self.settle_deadline = None;

        if let Some(ticker) = self.blend_ticker.take() {
            scheduler.remove_ticker(ticker);
        }
        for node in self.visual.corners {
            scheduler.kill(node);
        }
        scheduler.kill_channel(self.visual.wrapper, Channel::Rotation);
        scheduler.pause_timeline(self.spin);
        scheduler.set(self.visual.wrapper, Channel::Rotation, 0.0);
        scheduler.kill_channel(self.visual.strength, Channel::Value);
        scheduler.set(self.visual.strength, Channel::Value, 0.0);

        let targets = frame_corners(rect, self.config.border_width, self.config.corner_size);
        self.frame = Some(targets);
        self.active = Some(target);

        let wrapper = self.visual.wrapper;
        let strength = self.visual.strength;
        let corner_nodes = self.visual.corners;
        self.blend_ticker = Some(scheduler.add_ticker(move |s| {
            let blend = s.get(strength, Channel::Value);
            let cx = s.get(wrapper, Channel::X);
            let cy = s.get(wrapper, Channel::Y);
            for (node, target) in corner_nodes.iter().zip(targets.iter()) {
                let desired_x = target.x - cx;
                let desired_y = target.y - cy;
                let current_x = s.get(*node, Channel::X);
                let current_y = s.get(*node, Channel::Y);
                s.set(*node, Channel::X, current_x + (desired_x - current_x) * blend);
                s.set(*node, Channel::Y, current_y + (desired_y - current_y) * blend);
            }
        }));

        scheduler.to(
            strength,
            &[(Channel::Value, 1.0)],
            Transition::new(self.config.hover_duration, TimingFunction::QuadOut),
        );

        let cx = scheduler.get(wrapper, Channel::X);
        let cy = scheduler.get(wrapper, Channel::Y);
        for (node, corner) in corner_nodes.iter().zip(targets.iter()) {
            scheduler.to(
                *node,
                &[(Channel::X, corner.x - cx), (Channel::Y, corner.y - cy)],
                Transition::new(ENTER_DURATION, TimingFunction::QuadOut),
            );
        }
    }

    /// Drop the active target and fall back toward the idle visual.
    fn deactivate(&mut self, scheduler: &mut Scheduler) {
        let Some(target) = self.active.take() else {
            return;
        };
        log::debug!("releasing {target:?}");

        if let Some(ticker) = self.blend_ticker.take() {
            scheduler.remove_ticker(ticker);
        }
        scheduler.kill_channel(self.visual.strength, Channel::Value);
        scheduler.set(self.visual.strength, Channel::Value, 0.0);
        self.frame = None;

        for (node, rest) in self
            .visual
            .corners
            .iter()
            .zip(idle_offsets(self.config.corner_size))
        {
            scheduler.kill(*node);
            scheduler.to(
                *node,
                &[(Channel::X, rest.x), (Channel::Y, rest.y)],
                Transition::new(LEAVE_DURATION, TimingFunction::QuartOut),
            );
        }

        self.settle_deadline = Some(scheduler.now() + f64::from(SETTLE_DELAY));
    }

    /// Rebuild the spin timeline and glide rotation forward to the next
    /// 0° boundary so the restarted spin is phase-aligned.
    fn resume_spin(&mut self, scheduler: &mut Scheduler) {
        let rotation = scheduler.get(self.visual.wrapper, Channel::Rotation);
        scheduler.kill_timeline(self.spin);
        let spin = scheduler.repeat(
            self.visual.wrapper,
            Channel::Rotation,
            360.0,
            self.config.spin_duration,
        );
        scheduler.pause_timeline(spin);
        self.spin = spin;

        let remainder = rotation.rem_euclid(360.0);
        let goal = rotation - remainder + 360.0;
        let duration = self.config.spin_duration * (1.0 - remainder / 360.0);
        log::debug!("spin resuming from {rotation:.1}° toward {goal:.1}°");
        scheduler.to_with(
            self.visual.wrapper,
            &[(Channel::Rotation, goal)],
            Transition::new(duration, TimingFunction::Linear),
            move |s| s.resume_timeline(spin),
        );
    }

    /// After a scroll, check whether the cursor's visual position still sits
    /// over the active target (or a descendant); deactivate if not.
    fn revalidate_after_scroll<S>(&mut self, scheduler: &mut Scheduler, scene: &S) -> EventResponse
    where
        S: Scene + ?Sized,
    {
        let Some(active) = self.active else {
            return EventResponse::Ignored;
        };
        let x = scheduler.get(self.visual.wrapper, Channel::X);
        let y = scheduler.get(self.visual.wrapper, Channel::Y);
        let still_over = scene
            .element_at(x, y)
            .and_then(|element| resolve_target(scene, element))
            == Some(active);
        if still_over {
            EventResponse::Ignored
        } else {
            self.deactivate(scheduler);
            EventResponse::Handled
        }
    }

    fn press(&mut self, scheduler: &mut Scheduler) {
        scheduler.to(
            self.visual.dot,
            &[(Channel::Scale, PRESS_DOT_SCALE)],
            Transition::new(DOT_PRESS_DURATION, TimingFunction::QuadOut),
        );
        scheduler.to(
            self.visual.wrapper,
            &[(Channel::Scale, PRESS_CURSOR_SCALE)],
            Transition::new(CURSOR_PRESS_DURATION, TimingFunction::QuadOut),
        );
    }

    fn release(&mut self, scheduler: &mut Scheduler) {
        scheduler.to(
            self.visual.dot,
            &[(Channel::Scale, 1.0)],
            Transition::new(DOT_PRESS_DURATION, TimingFunction::QuadOut),
        );
        scheduler.to(
            self.visual.wrapper,
            &[(Channel::Scale, 1.0)],
            Transition::new(CURSOR_PRESS_DURATION, TimingFunction::QuadOut),
        );
    }
}
