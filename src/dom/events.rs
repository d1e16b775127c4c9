use serde::Serialize;

use super::NodeId;

/// Popover visibility carried by toggle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    Open,
    Closed,
}

/// Event categories listeners subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    BeforeToggle,
    Toggle,
}

/// Events delivered to a single target element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    PointerEnter {
        target: NodeId,
    },
    PointerLeave {
        target: NodeId,
    },
    /// Fired before a popover's visibility changes
    BeforeToggle {
        target: NodeId,
        new_state: ToggleState,
    },
    /// Fired after a popover's visibility changed
    Toggle {
        target: NodeId,
        new_state: ToggleState,
    },
}

impl DomEvent {
    pub fn target(&self) -> NodeId {
        match *self {
            DomEvent::PointerEnter { target }
            | DomEvent::PointerLeave { target }
            | DomEvent::BeforeToggle { target, .. }
            | DomEvent::Toggle { target, .. } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::PointerEnter { .. } => EventKind::PointerEnter,
            DomEvent::PointerLeave { .. } => EventKind::PointerLeave,
            DomEvent::BeforeToggle { .. } => EventKind::BeforeToggle,
            DomEvent::Toggle { .. } => EventKind::Toggle,
        }
    }
}
