//! Kiosko application runtime: terminal lifecycle, channels, background
//! workers, and the event loop.

mod runtime;
mod terminal;

pub use runtime::{run, spawn_submit_worker};
