//! Viewport-aware tooltip placement
//!
//! Places a tooltip below its trigger, flips it above when it would run
//! off the bottom edge, and shifts it left when it would run off the right
//! edge. Results are viewport-relative, meant for `position: fixed`.

mod position_engine;

pub use position_engine::{DEFAULT_PADDING, Placement, compute_position};
