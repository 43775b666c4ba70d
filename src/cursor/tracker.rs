//! Last-known pointer position, plus the eased follow of the cursor visual.

use crate::animation::{Channel, NodeId, Scheduler, TimingFunction, Transition};
use crate::geometry::Point;

/// Seconds the cursor visual takes to catch up to the pointer
const FOLLOW_DURATION: f32 = 0.1;

pub struct PointerTracker {
    node: NodeId,
    position: Point,
}

impl PointerTracker {
    pub fn new(node: NodeId, position: Point) -> Self {
        Self { node, position }
    }

    /// Raw pointer position from the most recent move event. The visual lags
    /// behind this; read the node's channels for the on-screen position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn move_to(&mut self, scheduler: &mut Scheduler, x: f32, y: f32) {
        self.position = Point::new(x, y);
        scheduler.to(
            self.node,
            &[(Channel::X, x), (Channel::Y, y)],
            Transition::new(FOLLOW_DURATION, TimingFunction::QuartOut),
        );
    }
}
