use std::collections::{BTreeMap, VecDeque};

use super::{DomEvent, InlineStyle, ToggleState};
use crate::geometry::{Rect, Viewport};
use crate::popover::{PopoverError, PopoverHost};

/// Handle to an element owned by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Box the element occupies when not positioned by inline style
    pub layout: Rect,
    pub style: InlineStyle,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    popover_open: bool,
    pending_toggle: Option<ToggleState>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            layout: Rect::default(),
            style: InlineStyle::default(),
            parent: None,
            children: Vec::new(),
            popover_open: false,
            pending_toggle: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_popover(&self) -> bool {
        self.attributes.contains_key("popover")
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_popover_open(&self) -> bool {
        self.popover_open
    }
}

/// Element tree plus the host-side state tooltips interact with
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    viewport: Viewport,
    popover_supported: bool,
    queue: VecDeque<DomEvent>,
    mutations: usize,
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            viewport,
            popover_supported: true,
            queue: VecDeque::new(),
            mutations: 0,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Read fresh on every positioning pass
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_popover_supported(&mut self, supported: bool) {
        self.popover_supported = supported;
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.element_mut(node) {
            el.id = Some(id.to_string());
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node)
            && !el.has_class(class)
        {
            el.classes.push(class.to_string());
        }
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_layout(&mut self, node: NodeId, rect: Rect) {
        if let Some(el) = self.element_mut(node) {
            el.layout = rect;
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }

    /// Move `child` to the end of `parent`'s children
    ///
    /// Returns false without mutating when either node is unknown or when
    /// the move would make an element its own ancestor.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.element(parent).is_none() || self.element(child).is_none() {
            return false;
        }
        if self.is_inclusive_ancestor(child, parent) {
            return false;
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.mutations += 1;
        true
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    #[cfg(test)]
    /// Whether the element is attached under `<body>`
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.element(node).is_some() && self.is_inclusive_ancestor(self.body, node)
    }

    /// Connected elements in pre-order, starting with `<body>`
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        order
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&n| self.nodes[n.0].id.as_deref() == Some(id))
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&n| self.nodes[n.0].has_class(class))
            .collect()
    }

    /// First element whose `popovertarget` names `tooltip_id`
    pub fn query_popover_target(&self, tooltip_id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&n| self.nodes[n.0].attribute("popovertarget") == Some(tooltip_id))
    }

    /// Current box in viewport coordinates, honoring a fixed inline position
    pub fn bounding_client_rect(&self, node: NodeId) -> Option<Rect> {
        let el = self.element(node)?;
        Some(match el.style.fixed_offset() {
            Some((top, left)) => el.layout.moved_to(left, top),
            None => el.layout,
        })
    }

    pub fn style(&self, node: NodeId) -> Option<&InlineStyle> {
        self.element(node).map(|el| &el.style)
    }

    pub fn style_mut(&mut self, node: NodeId) -> Option<&mut InlineStyle> {
        self.element_mut(node).map(|el| &mut el.style)
    }

    /// Number of structural mutations (reparents) performed so far
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    pub fn is_popover_open(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(Element::is_popover_open)
    }

    pub fn queue_event(&mut self, event: DomEvent) {
        self.queue.push_back(event);
    }

    pub fn next_event(&mut self) -> Option<DomEvent> {
        self.queue.pop_front()
    }

    #[cfg(test)]
    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Apply a toggle announced by `beforetoggle` and queue the `toggle` event
    ///
    /// Called once the `beforetoggle` listeners have run.
    pub fn commit_toggle(&mut self, node: NodeId) -> Option<ToggleState> {
        let el = self.element_mut(node)?;
        let new_state = el.pending_toggle.take()?;
        el.popover_open = new_state == ToggleState::Open;
        self.queue.push_back(DomEvent::Toggle {
            target: node,
            new_state,
        });
        Some(new_state)
    }

    fn request_toggle(&mut self, node: NodeId, new_state: ToggleState) -> Result<(), PopoverError> {
        if !self.popover_supported {
            return Err(PopoverError::Unsupported);
        }
        let el = self
            .nodes
            .get_mut(node.0)
            .ok_or(PopoverError::UnknownElement)?;
        if !el.is_popover() {
            return Err(PopoverError::NotAPopover);
        }

        let current = if el.popover_open {
            ToggleState::Open
        } else {
            ToggleState::Closed
        };
        if current == new_state || el.pending_toggle.is_some() {
            return Ok(());
        }

        el.pending_toggle = Some(new_state);
        self.queue.push_back(DomEvent::BeforeToggle {
            target: node,
            new_state,
        });
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl PopoverHost for Document {
    fn supports_popover(&self) -> bool {
        self.popover_supported
    }

    fn show_popover(&mut self, node: NodeId) -> Result<(), PopoverError> {
        self.request_toggle(node, ToggleState::Open)
    }

    fn hide_popover(&mut self, node: NodeId) -> Result<(), PopoverError> {
        self.request_toggle(node, ToggleState::Closed)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
