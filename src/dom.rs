//! In-memory document substrate
//!
//! A small DOM-like model standing in for the host page: an element tree
//! with ids, classes and attributes, per-element bounding boxes and inline
//! styles, popover open state, and an ordered queue of pending events.
//! Listeners live in a separate [`EventBus`] so each component registers
//! only the handlers it owns.

mod document;
mod event_bus;
mod events;
mod style;

pub use document::{Document, Element, NodeId};
pub use event_bus::EventBus;
pub use events::{DomEvent, EventKind, ToggleState};
pub use style::{InlineStyle, PositionMode};
