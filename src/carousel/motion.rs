//! Tick-driven motion on top of the pure rail: glide animation, settle
//! snapping after a free drag, and the autoplay timer for the hero banner.

use std::time::{Duration, Instant};

use super::rail::Rail;

/// Fraction of the remaining distance covered per tick while gliding.
const GLIDE_EASE: f32 = 0.35;
/// Minimum glide speed in cells per tick so animations always terminate.
const GLIDE_MIN_STEP: f32 = 1.0;
/// Distance under which a glide snaps onto its target.
const GLIDE_ARRIVE: f32 = 0.5;
/// Ticks of scroll silence before a free drag snaps to the nearest slot.
const SETTLE_TICKS: u8 = 5;

/// A rail plus its in-flight animation state.
///
/// All mutation happens on the UI task: input handlers call the
/// navigation methods, and the frame tick calls [`Carousel::tick`] to
/// advance motion. The one-frame deferral of the teleport release lives
/// here too, so boundary logic never runs twice within one event.
#[derive(Clone, Debug)]
pub struct Carousel {
    /// The pure scroll arena.
    pub rail: Rail,
    /// Glide destination offset, when an animation is in flight.
    target: Option<f32>,
    /// Physical slot the current glide is headed for.
    intent: Option<usize>,
    /// Countdown to the post-drag settle snap.
    settle: Option<u8>,
    reduced_motion: bool,
}

impl Carousel {
    /// Create a carousel over `n` items with the given per-side clone padding.
    pub fn new(n: usize, clones: usize) -> Self {
        Self {
            rail: Rail::new(n, clones),
            target: None,
            intent: None,
            settle: None,
            reduced_motion: false,
        }
    }

    /// Honor the visitor's reduced-motion preference: navigation lands
    /// instantly instead of gliding.
    pub const fn set_reduced_motion(&mut self, on: bool) {
        self.reduced_motion = on;
    }

    /// Record measured dimensions; the focused index survives a resize.
    pub fn layout(&mut self, item_width: f32, gap: f32, rail_width: f32) {
        self.rail.layout(item_width, gap, rail_width);
        self.target = None;
        self.intent = None;
        self.settle = None;
    }

    /// What: Re-measure only when dimensions actually changed.
    ///
    /// Inputs:
    /// - `item_width`, `gap`, `rail_width`: this frame's measurements
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Rendering calls this every frame; a full [`Carousel::layout`]
    ///   would re-anchor and cancel in-flight motion, so it only runs on a
    ///   real change (first layout or a terminal resize).
    pub fn ensure_layout(&mut self, item_width: f32, gap: f32, rail_width: f32) {
        let same = self.rail.is_ready()
            && (self.rail.item_width() - item_width).abs() < f32::EPSILON
            && (self.rail.snap() - (item_width + gap.max(0.0))).abs() < f32::EPSILON
            && (self.rail.rail_width() - rail_width).abs() < f32::EPSILON;
        if !same {
            self.layout(item_width, gap, rail_width);
        }
    }

    /// Logical index to display on the pagination dots.
    pub fn current(&self) -> usize {
        self.rail.logical_index()
    }

    /// Whether a glide or settle is still in flight.
    pub const fn is_moving(&self) -> bool {
        self.target.is_some() || self.settle.is_some()
    }

    /// What: Navigate one card in the given direction.
    ///
    /// Inputs:
    /// - `direction`: `-1` or `+1`
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Steps are relative to the in-flight glide destination when one
    ///   exists, so rapid key presses advance one card each.
    /// - Crossing into the far clone buffer triggers the rail's invisible
    ///   pre-step teleport; the visitor sees a single smooth move.
    /// - A no-op before layout has produced real dimensions.
    pub fn step_one(&mut self, direction: i32) {
        let from = self.intent.unwrap_or_else(|| self.rail.nearest_slot());
        let Some(to) = self.rail.pre_step(from, direction) else {
            return;
        };
        self.glide_to_slot(to);
    }

    /// What: Navigate straight to a logical index.
    ///
    /// Inputs:
    /// - `logical`: destination index (wrapped into `[0, n)`)
    ///
    /// Output: none; no-op before layout.
    pub fn go_to(&mut self, logical: usize) {
        if !self.rail.is_ready() {
            return;
        }
        let slot = self.rail.home_slot(logical % self.rail.n());
        self.glide_to_slot(slot);
    }

    /// What: Apply a user scroll delta (wheel / drag) in cells.
    ///
    /// Inputs:
    /// - `delta`: signed cell distance
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Cancels any in-flight glide (the visitor took over), runs the
    ///   boundary teleport check, and schedules the settle snap.
    pub fn scroll_by(&mut self, delta: f32) {
        if !self.rail.is_ready() {
            return;
        }
        self.target = None;
        self.intent = None;
        self.rail.scroll_by(delta);
        if let Some(jump) = self.rail.boundary_teleport() {
            tracing::trace!(jump, "carousel boundary teleport");
        }
        self.settle = Some(SETTLE_TICKS);
    }

    /// What: Advance one animation frame.
    ///
    /// Inputs: none.
    ///
    /// Output: `true` when the offset changed (a redraw is worth it).
    ///
    /// Details:
    /// - Releases a held teleport first: the release is deferred exactly
    ///   one frame so the teleporting offset write can never re-enter the
    ///   boundary check within its own event.
    /// - Then eases toward the glide target, or counts down to the settle
    ///   snap after a free drag.
    pub fn tick(&mut self) -> bool {
        self.rail.release_teleport();
        if let Some(t) = self.target {
            let delta = t - self.rail.offset();
            if delta.abs() <= GLIDE_ARRIVE {
                self.rail.set_offset(t);
                self.target = None;
                self.intent = None;
            } else {
                let step = (delta * GLIDE_EASE).abs().max(GLIDE_MIN_STEP);
                self.rail.scroll_by(step.copysign(delta));
            }
            return true;
        }
        if let Some(remaining) = self.settle {
            if remaining == 0 {
                self.settle = None;
                let slot = self.rail.nearest_slot();
                self.glide_to_slot(slot);
            } else {
                self.settle = Some(remaining - 1);
            }
        }
        false
    }

    fn glide_to_slot(&mut self, slot: usize) {
        let offset = self.rail.target_offset_for_slot(slot);
        if self.reduced_motion {
            self.rail.set_offset(offset);
            self.target = None;
            self.intent = None;
        } else {
            self.target = Some(offset);
            self.intent = Some(slot);
        }
        self.settle = None;
    }
}

/// Fixed-interval autoplay for the hero banner.
///
/// A plain timer: fires `go_to(next)` material when due, pauses while the
/// visitor is engaged with the banner, and restarts its interval after any
/// manual navigation. An interval of zero (or reduced motion upstream)
/// disables it entirely.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval: Duration,
    next_at: Option<Instant>,
    engaged: bool,
}

impl Autoplay {
    /// Create an autoplay timer firing every `secs` seconds; 0 disables.
    pub fn new(secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(secs),
            next_at: None,
            engaged: false,
        }
    }

    /// Whether this timer ever fires.
    pub const fn enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Start (or restart) the interval from `now`.
    pub fn arm(&mut self, now: Instant) {
        if self.enabled() {
            self.next_at = Some(now + self.interval);
        }
    }

    /// The visitor engaged the banner: hold fire until they disengage.
    pub const fn engage(&mut self) {
        self.engaged = true;
    }

    /// The visitor disengaged: resume with a full interval.
    pub fn disengage(&mut self, now: Instant) {
        self.engaged = false;
        self.arm(now);
    }

    /// Manual navigation happened: push the next automatic advance out a
    /// full interval so it never fights the visitor.
    pub fn interact(&mut self, now: Instant) {
        self.arm(now);
    }

    /// What: Check whether an automatic advance is due.
    ///
    /// Inputs:
    /// - `now`: current instant
    ///
    /// Output: `true` at most once per interval, never while engaged.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.enabled() || self.engaged {
            return false;
        }
        match self.next_at {
            Some(at) if now >= at => {
                self.next_at = Some(now + self.interval);
                true
            }
            Some(_) => false,
            None => {
                self.arm(now);
                false
            }
        }
    }
}
