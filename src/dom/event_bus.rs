use std::collections::HashMap;

use super::{DomEvent, EventKind, NodeId};

/// Per-element listener registry
///
/// Listeners are plain values (usually an enum naming the handler and the
/// tooltip it belongs to). Dispatch only reaches listeners registered on the
/// event's own target, in registration order.
#[derive(Debug)]
pub struct EventBus<L> {
    listeners: HashMap<(NodeId, EventKind), Vec<L>>,
}

impl<L: Clone> EventBus<L> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    pub fn add_listener(&mut self, target: NodeId, kind: EventKind, listener: L) {
        self.listeners
            .entry((target, kind))
            .or_default()
            .push(listener);
    }

    /// Listeners that should receive `event`
    pub fn listeners_for(&self, event: &DomEvent) -> Vec<L> {
        self.listeners
            .get(&(event.target(), event.kind()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }
}

impl<L: Clone> Default for EventBus<L> {
    fn default() -> Self {
        Self::new()
    }
}
