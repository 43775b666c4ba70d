//! Goal-directed property animation driven by a host-advanced clock.
//!
//! The scheduler owns a store of numeric properties keyed by (node, channel).
//! Callers register a [`NodeId`] per animated thing, then either write
//! channels directly ([`Scheduler::set`]) or hand the scheduler a goal and a
//! [`Transition`] ([`Scheduler::to`]) and let it interpolate as the host
//! calls [`Scheduler::advance`]. On top of tweens sit two primitives the
//! cursor engine needs: repeating timelines (a channel that accumulates a
//! fixed step per cycle until paused) and per-frame tickers (callbacks run at
//! the end of every `advance`, after all values have settled).
//!
//! Contracts:
//!
//! - Starting a tween on a channel that already has one replaces it; the
//!   replaced tween's completion hook is discarded, never fired.
//! - A tween's start value is captured when it is scheduled, not after its
//!   delay elapses.
//! - Per `advance`: tweens update, timelines update, completion hooks run,
//!   tickers run. Hooks and tickers may freely mutate the scheduler; tickers
//!   added during a frame first run on the next one.

use std::collections::HashMap;

use super::{TimingFunction, Transition};

/// Handle to an animated entity; channels on it default to 0.0
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u64);

/// Handle to a registered per-frame callback
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickerId(u64);

/// Handle to a repeating timeline
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimelineId(u64);

/// Numeric property lanes every node carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Channel {
    X,
    Y,
    Rotation,
    Scale,
    Value,
}

type CompletionFn = Box<dyn FnOnce(&mut Scheduler)>;

struct ActiveTween {
    node: NodeId,
    channel: Channel,
    from: f32,
    to: f32,
    /// Absolute start time; the configured delay is already folded in
    start: f64,
    duration: f32,
    timing: TimingFunction,
    on_complete: Option<CompletionFn>,
}

struct Timeline {
    id: TimelineId,
    node: NodeId,
    channel: Channel,
    /// Value added to the channel per full cycle
    step: f32,
    /// Seconds per cycle
    duration: f32,
    paused: bool,
}

struct Ticker {
    id: TickerId,
    callback: Box<dyn FnMut(&mut Scheduler)>,
}

#[derive(Default)]
pub struct Scheduler {
    now: f64,
    next_id: u64,
    values: HashMap<(NodeId, Channel), f32>,
    tweens: Vec<ActiveTween>,
    timelines: Vec<Timeline>,
    tickers: Vec<Ticker>,
    /// Tickers removed while the registry is mid-run (swapped out)
    retired_tickers: Vec<TickerId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time in seconds since creation
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Register a new animation target
    pub fn node(&mut self) -> NodeId {
        NodeId(self.bump_id())
    }

    /// Read a channel; channels never written read as 0.0
    pub fn get(&self, node: NodeId, channel: Channel) -> f32 {
        self.values.get(&(node, channel)).copied().unwrap_or(0.0)
    }

    /// Write a channel immediately. Does not cancel tweens on the channel;
    /// an active tween will overwrite the value on the next `advance`.
    pub fn set(&mut self, node: NodeId, channel: Channel, value: f32) {
        self.values.insert((node, channel), value);
    }

    /// Animate the given channels of `node` toward their goals.
    pub fn to(&mut self, node: NodeId, props: &[(Channel, f32)], transition: Transition) {
        for &(channel, goal) in props {
            self.start_tween(node, channel, goal, &transition, None);
        }
    }

    /// Like [`Scheduler::to`], with a hook that runs once the animation
    /// completes (attached to the last channel; all channels share the same
    /// duration so they complete together).
    pub fn to_with<F>(
        &mut self,
        node: NodeId,
        props: &[(Channel, f32)],
        transition: Transition,
        on_complete: F,
    ) where
        F: FnOnce(&mut Scheduler) + 'static,
    {
        debug_assert!(!props.is_empty(), "to_with requires at least one channel");
        let mut hook = Some(Box::new(on_complete) as CompletionFn);
        for (index, &(channel, goal)) in props.iter().enumerate() {
            let hook = if index + 1 == props.len() {
                hook.take()
            } else {
                None
            };
            self.start_tween(node, channel, goal, &transition, hook);
        }
    }

    /// Cancel all tweens on `node`, across every channel.
    pub fn kill(&mut self, node: NodeId) {
        self.tweens.retain(|tween| tween.node != node);
    }

    /// Cancel tweens on one channel of `node`.
    pub fn kill_channel(&mut self, node: NodeId, channel: Channel) {
        self.tweens
            .retain(|tween| tween.node != node || tween.channel != channel);
    }

    /// Start a repeating timeline that adds `step` to the channel per
    /// `duration` seconds, linearly, until paused or killed.
    pub fn repeat(
        &mut self,
        node: NodeId,
        channel: Channel,
        step: f32,
        duration: f32,
    ) -> TimelineId {
        let id = TimelineId(self.bump_id());
        self.timelines.push(Timeline {
            id,
            node,
            channel,
            step,
            duration,
            paused: false,
        });
        id
    }

    /// Pause a timeline; the channel holds its current value.
    pub fn pause_timeline(&mut self, id: TimelineId) {
        if let Some(timeline) = self.timelines.iter_mut().find(|t| t.id == id) {
            timeline.paused = true;
        }
    }

    /// Resume a paused timeline from wherever its channel currently sits.
    pub fn resume_timeline(&mut self, id: TimelineId) {
        if let Some(timeline) = self.timelines.iter_mut().find(|t| t.id == id) {
            timeline.paused = false;
        }
    }

    pub fn kill_timeline(&mut self, id: TimelineId) {
        self.timelines.retain(|timeline| timeline.id != id);
    }

    /// Whether the timeline exists and is currently playing
    pub fn timeline_running(&self, id: TimelineId) -> bool {
        self.timelines
            .iter()
            .any(|timeline| timeline.id == id && !timeline.paused)
    }

    /// Register a callback run at the end of every `advance`.
    pub fn add_ticker<F>(&mut self, callback: F) -> TickerId
    where
        F: FnMut(&mut Scheduler) + 'static,
    {
        let id = TickerId(self.bump_id());
        self.tickers.push(Ticker {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn remove_ticker(&mut self, id: TickerId) {
        let resident = self.tickers.len();
        self.tickers.retain(|ticker| ticker.id != id);
        if self.tickers.len() == resident {
            // Mid-run removal: the registry is swapped out right now.
            self.retired_tickers.push(id);
        }
    }

    pub fn ticker_count(&self) -> usize {
        self.tickers.len()
    }

    /// Whether any tween or playing timeline is active
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty() || self.timelines.iter().any(|timeline| !timeline.paused)
    }

    /// Advance time by `dt` seconds and settle every animated value.
    pub fn advance(&mut self, dt: f32) {
        self.now += f64::from(dt);
        let completed = self.step_tweens();
        self.step_timelines(dt);
        for hook in completed {
            hook(self);
        }
        self.run_tickers();
    }

    fn bump_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn start_tween(
        &mut self,
        node: NodeId,
        channel: Channel,
        goal: f32,
        transition: &Transition,
        on_complete: Option<CompletionFn>,
    ) {
        self.kill_channel(node, channel);
        let from = self.get(node, channel);
        self.tweens.push(ActiveTween {
            node,
            channel,
            from,
            to: goal,
            start: self.now + f64::from(transition.delay),
            duration: transition.duration,
            timing: transition.timing.clone(),
            on_complete,
        });
    }

    fn step_tweens(&mut self) -> Vec<CompletionFn> {
        let mut completed = Vec::new();
        let now = self.now;
        let mut index = 0;
        while index < self.tweens.len() {
            let tween = &self.tweens[index];
            if now < tween.start {
                index += 1;
                continue;
            }
            let t = if tween.duration <= 0.0 {
                1.0
            } else {
                (((now - tween.start) / f64::from(tween.duration)) as f32).min(1.0)
            };
            // Land exactly on the goal so completion is bit-precise.
            let value = if t >= 1.0 {
                tween.to
            } else {
                tween.from + (tween.to - tween.from) * tween.timing.evaluate(t)
            };
            let key = (tween.node, tween.channel);
            self.values.insert(key, value);
            if t >= 1.0 {
                let mut done = self.tweens.remove(index);
                if let Some(hook) = done.on_complete.take() {
                    completed.push(hook);
                }
            } else {
                index += 1;
            }
        }
        completed
    }

    fn step_timelines(&mut self, dt: f32) {
        for timeline in &self.timelines {
            if timeline.paused || timeline.duration <= 0.0 {
                continue;
            }
            let delta = timeline.step * (dt / timeline.duration);
            let entry = self
                .values
                .entry((timeline.node, timeline.channel))
                .or_insert(0.0);
            *entry += delta;
        }
    }

    fn run_tickers(&mut self) {
        if self.tickers.is_empty() {
            return;
        }
        let mut running = std::mem::take(&mut self.tickers);
        for ticker in &mut running {
            if self.retired_tickers.contains(&ticker.id) {
                continue;
            }
            (ticker.callback)(self);
        }
        // Tickers registered during the run landed in self.tickers.
        running.append(&mut self.tickers);
        running.retain(|ticker| !self.retired_tickers.contains(&ticker.id));
        self.retired_tickers.clear();
        self.tickers = running;
    }
}
