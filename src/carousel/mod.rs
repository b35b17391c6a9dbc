//! Infinite horizontal carousel engine.
//!
//! Both the services rail and the gallery photo strip scroll through a
//! fixed set of cards with seamless wraparound. The trick is an
//! arena-and-index scheme: the scrollable range holds clone copies of the
//! boundary cards on each side, and whenever the viewport drifts past a
//! boundary threshold the raw offset is teleported by exactly one logical
//! revolution, landing on the equivalent card in the opposite clone
//! buffer. Done between frames, the jump is invisible.
//!
//! [`rail::Rail`] is the pure core (offset math, wrap mapping, teleport
//! decisions) and holds no timing state, so every invariant is unit
//! testable with injected offsets. [`motion::Carousel`] layers tick-driven
//! glide animation, settle snapping, and the autoplay timer on top.

pub mod motion;
pub mod rail;

pub use motion::{Autoplay, Carousel};
pub use rail::Rail;
