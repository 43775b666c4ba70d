pub mod animation;
pub mod cursor;
pub mod effects;

// These modules are public so hosts can feed input and scene state
pub mod event;
pub mod geometry;
pub mod platform;
pub mod scene;

pub mod prelude {
    pub use crate::animation::{
        Channel, NodeId, Scheduler, TickerId, TimelineId, TimingFunction, Transition,
    };
    pub use crate::cursor::{CursorConfig, CursorPhase, TargetCursor};
    pub use crate::effects::{
        BlurReveal, BlurRevealOptions, Magnet, MagnetOptions, Noise, NoiseOptions, RevealFrom,
        ScrambleOptions, ScrambleText, SlideFrom, Sprite, Starfield, StarfieldConfig, WordStyle,
    };
    pub use crate::event::{Event, EventResponse, MouseButton};
    pub use crate::geometry::{Point, Rect};
    pub use crate::platform::Platform;
    pub use crate::scene::{ElementFlags, ElementId, Scene, SceneGraph};
}
