//! Hover timing
//!
//! Decides *when* a tooltip should be asked to open or close in response to
//! pointer movement over its trigger and over the tooltip itself. The show
//! delay keeps passing pointers from popping tooltips; the shorter hide
//! delay lets the pointer cross the gap from trigger to tooltip.

mod hover_controller;
mod hover_state;

pub use hover_controller::{FireOutcome, HoverTimingController};
pub use hover_state::{HoverPhase, TimerKind, TimerPair, TimerTask};
