//! Staggered word reveal: once its element first scrolls into view, each
//! word of a text block fades in from a blur, one after another.

use crate::animation::{Channel, NodeId, Scheduler, TimingFunction, Transition};
use crate::geometry::Rect;
use crate::scene::{ElementId, Scene};

/// Which side the words slide in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct BlurRevealOptions {
    /// Stagger between consecutive words, in seconds
    pub word_delay: f32,
    /// Seconds per keyframe segment (a word animates over two segments)
    pub step_duration: f32,
    pub slide_from: SlideFrom,
}

impl Default for BlurRevealOptions {
    fn default() -> Self {
        Self {
            word_delay: 0.2,
            step_duration: 0.35,
            slide_from: SlideFrom::Top,
        }
    }
}

impl BlurRevealOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_delay(mut self, seconds: f32) -> Self {
        self.word_delay = seconds;
        self
    }

    pub fn step_duration(mut self, seconds: f32) -> Self {
        self.step_duration = seconds;
        self
    }

    pub fn slide_from(mut self, side: SlideFrom) -> Self {
        self.slide_from = side;
        self
    }
}

/// Render state of one word at a given reveal progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStyle {
    /// Blur radius in pixels
    pub blur: f32,
    pub opacity: f32,
    /// Vertical offset from the word's resting position
    pub shift_y: f32,
}

/// Map reveal progress (0..1) onto the blur/opacity/offset keyframes:
/// fully blurred and shifted at 0, half-sharp and slightly overshot at 0.5,
/// settled at 1.
pub fn word_style(progress: f32, slide_from: SlideFrom) -> WordStyle {
    let (start_y, overshoot_y) = match slide_from {
        SlideFrom::Top => (-50.0, 5.0),
        SlideFrom::Bottom => (50.0, -5.0),
    };
    let t = progress.clamp(0.0, 1.0);
    if t <= 0.5 {
        let u = t * 2.0;
        WordStyle {
            blur: 10.0 - 5.0 * u,
            opacity: 0.5 * u,
            shift_y: start_y + (overshoot_y - start_y) * u,
        }
    } else {
        let u = (t - 0.5) * 2.0;
        WordStyle {
            blur: 5.0 - 5.0 * u,
            opacity: 0.5 + 0.5 * u,
            shift_y: overshoot_y * (1.0 - u),
        }
    }
}

/// One text block with a viewport-triggered staggered reveal. Progress is a
/// scheduler channel per word; hosts read it back through
/// [`BlurReveal::style`] when drawing.
pub struct BlurReveal {
    element: ElementId,
    words: Vec<String>,
    nodes: Vec<NodeId>,
    options: BlurRevealOptions,
    triggered: bool,
}

impl BlurReveal {
    pub fn new(
        scheduler: &mut Scheduler,
        element: ElementId,
        text: &str,
        options: BlurRevealOptions,
    ) -> Self {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let nodes = words.iter().map(|_| scheduler.node()).collect();
        Self {
            element,
            words,
            nodes,
            options,
            triggered: false,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Check visibility and start the reveal the first time the element's
    /// rectangle intersects the viewport. Later calls are no-ops.
    pub fn update<S>(&mut self, scheduler: &mut Scheduler, scene: &S, viewport: Rect)
    where
        S: Scene + ?Sized,
    {
        if self.triggered {
            return;
        }
        let Some(rect) = scene.bounds(self.element) else {
            return;
        };
        if !rect.intersects(&viewport) {
            return;
        }
        self.triggered = true;
        log::debug!("revealing {} words", self.words.len());
        let duration = self.options.step_duration * 2.0;
        for (index, node) in self.nodes.iter().enumerate() {
            scheduler.to(
                *node,
                &[(Channel::Value, 1.0)],
                Transition::new(duration, TimingFunction::Linear)
                    .delay(index as f32 * self.options.word_delay),
            );
        }
    }

    /// Reveal progress of one word, 0 (hidden) to 1 (settled).
    pub fn progress(&self, scheduler: &Scheduler, word: usize) -> f32 {
        self.nodes
            .get(word)
            .map_or(0.0, |node| scheduler.get(*node, Channel::Value))
    }

    pub fn style(&self, scheduler: &Scheduler, word: usize) -> WordStyle {
        word_style(self.progress(scheduler, word), self.options.slide_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ElementFlags, SceneGraph};

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn below_fold_scene() -> (SceneGraph, ElementId) {
        let mut scene = SceneGraph::new();
        let el = scene.insert(
            None,
            Rect::new(100.0, 900.0, 400.0, 60.0),
            ElementFlags::empty(),
        );
        (scene, el)
    }

    #[test]
    fn test_does_not_trigger_off_screen() {
        let mut scheduler = Scheduler::new();
        let (scene, el) = below_fold_scene();
        let mut reveal = BlurReveal::new(&mut scheduler, el, "hello brave world", Default::default());

        reveal.update(&mut scheduler, &scene, VIEWPORT);
        scheduler.advance(5.0);
        assert!(!reveal.is_triggered());
        assert_eq!(reveal.progress(&scheduler, 0), 0.0);
    }

    #[test]
    fn test_triggers_when_scrolled_into_view() {
        let mut scheduler = Scheduler::new();
        let (mut scene, el) = below_fold_scene();
        let mut reveal = BlurReveal::new(&mut scheduler, el, "hello brave world", Default::default());

        scene.scroll_by(0.0, 400.0);
        reveal.update(&mut scheduler, &scene, VIEWPORT);
        assert!(reveal.is_triggered());
        assert_eq!(reveal.words().len(), 3);

        // Words finish in stagger order: 0.7s duration, 0.2s apart.
        scheduler.advance(0.7);
        assert_eq!(reveal.progress(&scheduler, 0), 1.0);
        assert!(reveal.progress(&scheduler, 1) < 1.0);
        assert!(reveal.progress(&scheduler, 2) < reveal.progress(&scheduler, 1));

        scheduler.advance(0.4);
        assert_eq!(reveal.progress(&scheduler, 2), 1.0);
    }

    #[test]
    fn test_triggers_only_once() {
        let mut scheduler = Scheduler::new();
        let (mut scene, el) = below_fold_scene();
        let mut reveal = BlurReveal::new(&mut scheduler, el, "once only", Default::default());

        scene.scroll_by(0.0, 400.0);
        reveal.update(&mut scheduler, &scene, VIEWPORT);
        scheduler.advance(2.0);

        // Scrolling away and back must not restart the reveal.
        scene.scroll_by(0.0, -400.0);
        reveal.update(&mut scheduler, &scene, VIEWPORT);
        scene.scroll_by(0.0, 400.0);
        reveal.update(&mut scheduler, &scene, VIEWPORT);
        assert_eq!(reveal.progress(&scheduler, 0), 1.0);
        assert_eq!(reveal.progress(&scheduler, 1), 1.0);
    }

    #[test]
    fn test_word_style_keyframes_from_top() {
        let start = word_style(0.0, SlideFrom::Top);
        assert_eq!(start.blur, 10.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.shift_y, -50.0);

        let mid = word_style(0.5, SlideFrom::Top);
        assert_eq!(mid.blur, 5.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.shift_y, 5.0);

        let done = word_style(1.0, SlideFrom::Top);
        assert_eq!(done.blur, 0.0);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.shift_y, 0.0);
    }

    #[test]
    fn test_word_style_overshoots_from_bottom() {
        let start = word_style(0.0, SlideFrom::Bottom);
        assert_eq!(start.shift_y, 50.0);
        let mid = word_style(0.5, SlideFrom::Bottom);
        assert_eq!(mid.shift_y, -5.0);
    }
}
