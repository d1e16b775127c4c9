//! Page-level tooltip wiring
//!
//! [`TooltipPage`] is created once the document is interactive. It installs
//! the portal, checks popover support, binds every tooltip to its trigger
//! and routes pointer and toggle events to the hover controller, the portal
//! and the position engine.
//!
//! Flow for a hover-opened tooltip:
//! 1. pointer enters trigger, show delay starts
//! 2. show fires, open is requested from the document
//! 3. `beforetoggle(open)`: portal, then placement applied as `position: fixed`
//! 4. document commits the open state

mod activity;

pub use activity::{Activity, ActivityKind};

use crate::config::TooltipConfig;
use crate::dom::{Document, DomEvent, EventBus, EventKind, NodeId, ToggleState};
use crate::geometry::Viewport;
use crate::hover::{FireOutcome, HoverPhase, HoverTimingController, TimerTask};
use crate::popover::{PopoverError, PopoverHost, PopoverSupport};
use crate::portal::PortalRelocator;
use crate::position::{Placement, compute_position};

/// Class marking an element as a managed tooltip
pub const TOOLTIP_CLASS: &str = "tooltip-popover";

/// Handler registered on an element, tagged with the tooltip it serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    TriggerEnter(NodeId),
    TooltipEnter(NodeId),
    Leave(NodeId),
    BeforeToggle(NodeId),
}

#[derive(Debug, Clone)]
pub struct TooltipBinding {
    pub tooltip: NodeId,
    pub dom_id: String,
    /// Trigger bound for hover at init, if one was found
    pub trigger: Option<NodeId>,
    pub last_placement: Option<Placement>,
}

pub struct TooltipPage {
    document: Document,
    portal: PortalRelocator,
    controller: HoverTimingController,
    bus: EventBus<Listener>,
    bindings: Vec<TooltipBinding>,
    support: PopoverSupport,
    config: TooltipConfig,
    /// Only kept when enabled with [`TooltipPage::with_activity_log`]
    activity: Option<Vec<Activity>>,
}

impl TooltipPage {
    pub fn new(document: Document, config: TooltipConfig) -> Self {
        let mut document = document;
        let portal = PortalRelocator::install(&mut document);
        let support = PopoverSupport::detect(&document);
        if !support.is_supported() {
            log::warn!("Popover API not supported, tooltips will not open on hover");
        }

        let mut page = Self {
            document,
            portal,
            controller: HoverTimingController::new(&config),
            bus: EventBus::new(),
            bindings: Vec::new(),
            support,
            config,
            activity: None,
        };
        for tooltip in page.document.elements_by_class(TOOLTIP_CLASS) {
            page.bind(tooltip);
        }
        page
    }

    /// Record every request, placement and toggle for later inspection
    ///
    /// The log grows with each hover cycle, so it is meant for replays and
    /// tests rather than long-lived pages.
    pub fn with_activity_log(mut self) -> Self {
        self.activity = Some(Vec::new());
        self
    }

    fn bind(&mut self, tooltip: NodeId) {
        let Some(el) = self.document.element(tooltip) else {
            return;
        };
        let Some(dom_id) = el.id.clone() else {
            log::debug!("Skipping tooltip {:?} without id", tooltip);
            return;
        };
        if !el.is_popover() {
            log::debug!("Skipping '{}': not a popover", dom_id);
            return;
        }

        let trigger = self.document.query_popover_target(&dom_id);
        self.controller.register(tooltip);
        self.bus
            .add_listener(tooltip, EventKind::BeforeToggle, Listener::BeforeToggle(tooltip));

        match trigger {
            Some(trigger) => {
                self.bus
                    .add_listener(trigger, EventKind::PointerEnter, Listener::TriggerEnter(tooltip));
                self.bus
                    .add_listener(trigger, EventKind::PointerLeave, Listener::Leave(tooltip));
                self.bus
                    .add_listener(tooltip, EventKind::PointerEnter, Listener::TooltipEnter(tooltip));
                self.bus
                    .add_listener(tooltip, EventKind::PointerLeave, Listener::Leave(tooltip));
            }
            None => log::debug!("Tooltip '{}' has no trigger, hover disabled", dom_id),
        }

        self.bindings.push(TooltipBinding {
            tooltip,
            dom_id,
            trigger,
            last_placement: None,
        });
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn portal(&self) -> PortalRelocator {
        self.portal
    }

    pub fn support(&self) -> PopoverSupport {
        self.support
    }

    pub fn now(&self) -> u64 {
        self.controller.now()
    }

    pub fn phase(&self, tooltip: NodeId) -> HoverPhase {
        self.controller.phase(tooltip)
    }

    pub fn bindings(&self) -> &[TooltipBinding] {
        &self.bindings
    }

    pub fn binding(&self, tooltip: NodeId) -> Option<&TooltipBinding> {
        self.bindings.iter().find(|b| b.tooltip == tooltip)
    }

    /// Recorded activity, empty unless the log was enabled
    pub fn activity(&self) -> &[Activity] {
        self.activity.as_deref().unwrap_or_default()
    }

    pub fn listener_count(&self) -> usize {
        self.bus.listener_count()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.document.set_viewport(viewport);
    }

    pub fn pointer_enter(&mut self, target: NodeId) {
        self.dispatch(DomEvent::PointerEnter { target });
    }

    pub fn pointer_leave(&mut self, target: NodeId) {
        self.dispatch(DomEvent::PointerLeave { target });
    }

    /// Open a tooltip outside the hover path (focus, click, script)
    pub fn show_popover(&mut self, tooltip: NodeId) -> Result<(), PopoverError> {
        self.document.show_popover(tooltip)?;
        self.pump();
        Ok(())
    }

    pub fn hide_popover(&mut self, tooltip: NodeId) -> Result<(), PopoverError> {
        self.document.hide_popover(tooltip)?;
        self.pump();
        Ok(())
    }

    /// Deliver an event and everything it causes
    pub fn dispatch(&mut self, event: DomEvent) {
        self.document.queue_event(event);
        self.pump();
    }

    /// Let `ms` milliseconds pass, firing due timers in order
    pub fn advance(&mut self, ms: u64) {
        let until = self.controller.now().saturating_add(ms);
        while let Some(task) = self.controller.next_due(until) {
            self.run_task(task);
            self.pump();
        }
        self.controller.settle(until);
    }

    fn run_task(&mut self, task: TimerTask) {
        let outcome = self.controller.fire(task, &mut self.document, self.support);
        let kind = match outcome {
            FireOutcome::OpenRequested => ActivityKind::OpenRequested,
            FireOutcome::CloseRequested => ActivityKind::CloseRequested,
            FireOutcome::Skipped => ActivityKind::RequestSkipped { timer: task.kind },
            FireOutcome::Failed(e) => ActivityKind::RequestFailed {
                timer: task.kind,
                error: e.to_string(),
            },
            FireOutcome::Stale => return,
        };
        self.record(task.tooltip, kind);
    }

    fn pump(&mut self) {
        while let Some(event) = self.document.next_event() {
            for listener in self.bus.listeners_for(&event) {
                self.handle(listener, event);
            }
            if let DomEvent::BeforeToggle { target, .. } = event
                && let Some(state) = self.document.commit_toggle(target)
            {
                self.record(target, ActivityKind::Toggled { state });
            }
        }
    }

    fn handle(&mut self, listener: Listener, event: DomEvent) {
        match listener {
            Listener::TriggerEnter(tooltip) => self.controller.on_trigger_enter(tooltip),
            Listener::TooltipEnter(tooltip) => self.controller.on_tooltip_enter(tooltip),
            Listener::Leave(tooltip) => self.controller.on_leave(tooltip),
            Listener::BeforeToggle(tooltip) => {
                if let DomEvent::BeforeToggle { new_state, .. } = event {
                    if new_state == ToggleState::Open {
                        self.prepare_open(tooltip);
                    }
                    self.controller.on_before_toggle(tooltip, new_state);
                }
            }
        }
    }

    fn prepare_open(&mut self, tooltip: NodeId) {
        if self.portal.ensure_portal(&mut self.document, tooltip) {
            self.record(tooltip, ActivityKind::Relocated);
        }
        if let Some(placement) = self.position(tooltip) {
            self.record(
                tooltip,
                ActivityKind::Positioned {
                    top: placement.top,
                    left: placement.left,
                },
            );
        }
    }

    /// Compute and apply the tooltip's placement against the current viewport
    fn position(&mut self, tooltip: NodeId) -> Option<Placement> {
        let index = self.bindings.iter().position(|b| b.tooltip == tooltip)?;
        let Some(trigger) = self
            .document
            .query_popover_target(&self.bindings[index].dom_id)
        else {
            log::debug!(
                "No trigger for '{}', skipping positioning",
                self.bindings[index].dom_id
            );
            self.record(tooltip, ActivityKind::MissingTrigger);
            return None;
        };

        let trigger_rect = self.document.bounding_client_rect(trigger)?;
        let tooltip_rect = self.document.bounding_client_rect(tooltip)?;
        let viewport = self.document.viewport();
        let placement = compute_position(trigger_rect, tooltip_rect, viewport, self.config.padding);
        if !viewport.contains_with_padding(placement.to_rect(tooltip_rect), self.config.padding) {
            log::debug!(
                "'{}' does not fit the viewport, placed at best effort",
                self.bindings[index].dom_id
            );
        }

        self.document
            .style_mut(tooltip)?
            .set_fixed(placement.top, placement.left);
        self.bindings[index].last_placement = Some(placement);
        Some(placement)
    }

    fn record(&mut self, tooltip: NodeId, kind: ActivityKind) {
        if self.activity.is_none() {
            return;
        }
        let name = self
            .binding(tooltip)
            .map(|b| b.dom_id.clone())
            .unwrap_or_else(|| format!("#{}", tooltip.index()));
        let at = self.controller.now();
        if let Some(log) = self.activity.as_mut() {
            log.push(Activity {
                at,
                tooltip: name,
                kind,
            });
        }
    }
}


#[cfg(test)]
#[path = "page/property_tests.rs"]
mod property_tests;
