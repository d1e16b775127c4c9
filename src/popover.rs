//! Popover capability
//!
//! The host's show/hide primitive. Requests may fail when the host lacks
//! popover support; callers log and continue, never propagate.

use thiserror::Error;

use crate::dom::NodeId;

/// Failures reported by a popover request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopoverError {
    #[error("Popover API not supported")]
    Unsupported,

    #[error("element is not a popover")]
    NotAPopover,

    #[error("no such element")]
    UnknownElement,
}

/// Open/close primitive provided by the host document
///
/// A successful request announces the change with a `beforetoggle` event
/// before it takes effect. Requesting the current state is a no-op.
pub trait PopoverHost {
    fn supports_popover(&self) -> bool;

    fn show_popover(&mut self, node: NodeId) -> Result<(), PopoverError>;

    fn hide_popover(&mut self, node: NodeId) -> Result<(), PopoverError>;
}

/// Capability flag evaluated once when the page is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverSupport {
    Supported,
    Unsupported,
}

impl PopoverSupport {
    pub fn detect(host: &impl PopoverHost) -> Self {
        if host.supports_popover() {
            PopoverSupport::Supported
        } else {
            PopoverSupport::Unsupported
        }
    }

    pub fn is_supported(self) -> bool {
        self == PopoverSupport::Supported
    }
}

#[cfg(test)]
#[path = "popover_tests.rs"]
mod popover_tests;
