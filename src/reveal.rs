//! Entrance animation primitives.
//!
//! Screens taller than the terminal scroll vertically; sections fade in
//! the first time they come into view. [`Reveal`] owns that contract: a
//! section is observed against the viewport at most once per frame, and on
//! first visibility it transitions from hidden to shown over a configured
//! delay and duration. With `once` (the default) it never reverts;
//! otherwise scrolling away re-arms it. Under reduced motion everything
//! renders in its final state immediately.
//!
//! The hero banner's staged entrance is a small explicit state machine
//! ([`StagedReveal`]) driven by the same frame tick rather than chained
//! timers, so teardown can never fire a stale callback. [`CountUp`] animates
//! the about-screen statistics while their section reveals.

use std::time::{Duration, Instant};

/// Tuning for one reveal instance.
#[derive(Clone, Copy, Debug)]
pub struct RevealConfig {
    /// Fraction of the section that must be inside the viewport to count
    /// as visible.
    pub threshold: f32,
    /// Extra rows added around the viewport before the check (a negative
    /// margin demands deeper entry).
    pub margin: i16,
    /// Wait after first visibility before the transition starts.
    pub delay: Duration,
    /// Transition length.
    pub duration: Duration,
    /// Reveal only once (never revert when scrolled away).
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            margin: 0,
            delay: Duration::ZERO,
            duration: Duration::from_millis(450),
            once: true,
        }
    }
}

/// Lifecycle of a revealed section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    Waiting { since: Instant },
    Revealing { started: Instant },
    Shown,
}

/// Scroll-triggered entrance animation for one section.
#[derive(Clone, Debug)]
pub struct Reveal {
    cfg: RevealConfig,
    phase: Phase,
    reduced_motion: bool,
}

impl Reveal {
    /// Create a hidden reveal with the given config.
    pub const fn new(cfg: RevealConfig) -> Self {
        Self {
            cfg,
            phase: Phase::Hidden,
            reduced_motion: false,
        }
    }

    /// Reveal with default tuning.
    pub fn defaults() -> Self {
        Self::new(RevealConfig::default())
    }

    /// Skip transitions entirely when the visitor prefers reduced motion.
    pub const fn set_reduced_motion(&mut self, on: bool) {
        self.reduced_motion = on;
    }

    /// Whether the section has fully entered.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Shown)
    }

    /// Whether the entrance has at least begun.
    pub fn is_started(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    /// Viewport margin this reveal was configured with.
    pub const fn margin(&self) -> i16 {
        self.cfg.margin
    }

    /// What: Feed one frame's visibility observation.
    ///
    /// Inputs:
    /// - `now`: current instant
    /// - `visible_fraction`: portion of the section inside the (margin
    ///   adjusted) viewport, `0.0..=1.0`
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Called at most once per rendered frame by the tick handler; the
    ///   primitive itself never schedules anything, so tearing a screen
    ///   down cancels all pending animation by construction.
    /// - `once = false` reverts to hidden when visibility is lost, allowing
    ///   a re-trigger on the next entry.
    pub fn observe(&mut self, now: Instant, visible_fraction: f32) {
        let visible = visible_fraction >= self.cfg.threshold;
        match self.phase {
            Phase::Hidden if visible => {
                if self.reduced_motion {
                    self.phase = Phase::Shown;
                } else if self.cfg.delay.is_zero() {
                    self.phase = Phase::Revealing { started: now };
                } else {
                    self.phase = Phase::Waiting { since: now };
                }
            }
            Phase::Waiting { since } => {
                if !visible && !self.cfg.once {
                    self.phase = Phase::Hidden;
                } else if now.duration_since(since) >= self.cfg.delay {
                    self.phase = Phase::Revealing { started: now };
                }
            }
            Phase::Revealing { started } => {
                if now.duration_since(started) >= self.cfg.duration {
                    self.phase = Phase::Shown;
                }
            }
            Phase::Shown if !visible && !self.cfg.once => {
                self.phase = Phase::Hidden;
            }
            _ => {}
        }
    }

    /// What: Entrance progress for rendering.
    ///
    /// Inputs:
    /// - `now`: current instant
    ///
    /// Output:
    /// - `0.0` while hidden/waiting, eased `0.0..1.0` mid-transition,
    ///   `1.0` once shown.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden | Phase::Waiting { .. } => 0.0,
            Phase::Revealing { started } => {
                let t = now.duration_since(started).as_secs_f32()
                    / self.cfg.duration.as_secs_f32().max(f32::EPSILON);
                ease_out(t.clamp(0.0, 1.0))
            }
            Phase::Shown => 1.0,
        }
    }
}

/// Cubic ease-out, the entrance curve used across the screens.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// What: Fraction of a section visible inside the scrolled viewport.
///
/// Inputs:
/// - `section_top`: row of the section within the full page
/// - `section_height`: rows the section occupies
/// - `scroll_top`: first page row currently shown
/// - `viewport_height`: rows the terminal shows
/// - `margin`: rows added (or, negative, removed) around the viewport
///
/// Output:
/// - Visible fraction in `0.0..=1.0`; degenerate heights yield 0.
pub fn visible_fraction(
    section_top: u16,
    section_height: u16,
    scroll_top: u16,
    viewport_height: u16,
    margin: i16,
) -> f32 {
    if section_height == 0 || viewport_height == 0 {
        return 0.0;
    }
    let top = i32::from(section_top);
    let bottom = top + i32::from(section_height);
    let view_top = i32::from(scroll_top) - i32::from(margin);
    let view_bottom = i32::from(scroll_top) + i32::from(viewport_height) + i32::from(margin);
    let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0);
    overlap as f32 / f32::from(section_height)
}

/// Stages of the hero banner entrance, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeroStage {
    /// Nothing shown yet.
    Idle,
    /// The small eyebrow line is in.
    Eyebrow,
    /// Headline visible.
    Headline,
    /// Body copy visible.
    Body,
    /// Calls to action visible; the sequence is complete.
    Ctas,
}

/// The hero banner's staged entrance, advanced by the frame tick.
#[derive(Clone, Debug)]
pub struct StagedReveal {
    stage: HeroStage,
    next_at: Option<Instant>,
    step: Duration,
}

impl StagedReveal {
    /// A sequence that advances one stage every `step`.
    pub const fn new(step: Duration) -> Self {
        Self {
            stage: HeroStage::Idle,
            next_at: None,
            step,
        }
    }

    /// Current stage.
    pub const fn stage(&self) -> HeroStage {
        self.stage
    }

    /// Whether a given stage (and everything before it) is visible.
    pub fn shows(&self, stage: HeroStage) -> bool {
        self.stage >= stage
    }

    /// Begin the sequence; under reduced motion it completes immediately.
    pub fn start(&mut self, now: Instant, reduced_motion: bool) {
        if reduced_motion {
            self.stage = HeroStage::Ctas;
            self.next_at = None;
        } else {
            self.stage = HeroStage::Idle;
            self.next_at = Some(now + self.step);
        }
    }

    /// Jump to the end (any visitor input skips the choreography).
    pub const fn finish(&mut self) {
        self.stage = HeroStage::Ctas;
        self.next_at = None;
    }

    /// What: Advance the sequence if its next stage is due.
    ///
    /// Inputs:
    /// - `now`: current instant
    ///
    /// Output: `true` when the stage changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(at) = self.next_at else {
            return false;
        };
        if now < at {
            return false;
        }
        self.stage = match self.stage {
            HeroStage::Idle => HeroStage::Eyebrow,
            HeroStage::Eyebrow => HeroStage::Headline,
            HeroStage::Headline => HeroStage::Body,
            HeroStage::Body | HeroStage::Ctas => HeroStage::Ctas,
        };
        self.next_at = if self.stage == HeroStage::Ctas {
            None
        } else {
            Some(now + self.step)
        };
        true
    }
}

/// A number that counts up from zero while its section reveals.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: u64,
    started: Option<Instant>,
    duration: Duration,
}

impl CountUp {
    /// Counter toward `target` over `duration`.
    pub const fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            started: None,
            duration,
        }
    }

    /// Begin counting (idempotent); reduced motion lands instantly.
    pub fn start(&mut self, now: Instant, reduced_motion: bool) {
        if self.started.is_none() {
            if reduced_motion {
                self.duration = Duration::ZERO;
            }
            self.started = Some(now);
        }
    }

    /// Current value to render.
    pub fn value(&self, now: Instant) -> u64 {
        let Some(started) = self.started else {
            return 0;
        };
        if self.duration.is_zero() {
            return self.target;
        }
        let t = now.duration_since(started).as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out(t.clamp(0.0, 1.0));
        (self.target as f32 * eased).round() as u64
    }

    /// Whether the count has reached its target.
    pub fn done(&self, now: Instant) -> bool {
        self.value(now) == self.target
    }
}
