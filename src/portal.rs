//! Shared tooltip container
//!
//! Tooltips are moved out of wherever they were declared into one
//! top-level container the first time they open, so ancestor clipping or
//! transforms cannot distort their fixed-position coordinates.

use crate::dom::{Document, NodeId};

pub const PORTAL_ID: &str = "tooltip-portal";

#[derive(Debug, Clone, Copy)]
pub struct PortalRelocator {
    container: NodeId,
}

impl PortalRelocator {
    /// Create the portal container and append it to `<body>`
    pub fn install(doc: &mut Document) -> Self {
        let container = doc.create_element("div");
        doc.set_id(container, PORTAL_ID);
        let body = doc.body();
        doc.append_child(body, container);
        Self { container }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn contains(&self, doc: &Document, tooltip: NodeId) -> bool {
        doc.parent(tooltip) == Some(self.container)
    }

    /// Reparent `tooltip` into the portal unless it is already there
    ///
    /// Returns whether the document was mutated.
    pub fn ensure_portal(&self, doc: &mut Document, tooltip: NodeId) -> bool {
        if self.contains(doc, tooltip) {
            return false;
        }
        let moved = doc.append_child(self.container, tooltip);
        if moved {
            log::debug!("Moved tooltip {:?} into portal", tooltip);
        }
        moved
    }
}

#[cfg(test)]
#[path = "portal_tests.rs"]
mod portal_tests;
