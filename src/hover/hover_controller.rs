use std::collections::HashMap;

use super::hover_state::{HoverPhase, TimerKind, TimerTask, TooltipTimers};
use crate::config::TooltipConfig;
use crate::dom::{NodeId, ToggleState};
use crate::popover::{PopoverError, PopoverHost, PopoverSupport};
use crate::timeline::{TimerHandle, Timeline};

/// Result of running a fired timer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    OpenRequested,
    CloseRequested,
    /// Capability unsupported, no request attempted
    Skipped,
    /// The host rejected the request; logged and dropped
    Failed(PopoverError),
    /// Task belonged to a tooltip the controller does not know
    Stale,
}

/// Owns the show/hide timers of every registered tooltip
#[derive(Debug)]
pub struct HoverTimingController {
    timeline: Timeline<TimerTask>,
    tooltips: HashMap<NodeId, TooltipTimers>,
    show_delay_ms: u64,
    hide_delay_ms: u64,
}

impl HoverTimingController {
    pub fn new(config: &TooltipConfig) -> Self {
        Self {
            timeline: Timeline::new(),
            tooltips: HashMap::new(),
            show_delay_ms: config.show_delay_ms,
            hide_delay_ms: config.hide_delay_ms,
        }
    }

    pub fn register(&mut self, tooltip: NodeId) {
        self.tooltips.entry(tooltip).or_default();
    }

    pub fn is_registered(&self, tooltip: NodeId) -> bool {
        self.tooltips.contains_key(&tooltip)
    }

    pub fn phase(&self, tooltip: NodeId) -> HoverPhase {
        self.tooltips
            .get(&tooltip)
            .map_or(HoverPhase::Idle, TooltipTimers::phase)
    }

    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.pending_count()
    }

    /// Pointer entered the trigger: keep a shown tooltip, otherwise start the show delay
    pub fn on_trigger_enter(&mut self, tooltip: NodeId) {
        let Some(entry) = self.tooltips.get_mut(&tooltip) else {
            return;
        };
        cancel(&mut self.timeline, &mut entry.timers.hide);

        if entry.timers.show.is_none() && !entry.shown {
            entry.timers.show = Some(self.timeline.schedule(
                self.show_delay_ms,
                TimerTask {
                    tooltip,
                    kind: TimerKind::Show,
                },
            ));
        }
    }

    /// Pointer entered the tooltip itself
    pub fn on_tooltip_enter(&mut self, tooltip: NodeId) {
        if let Some(entry) = self.tooltips.get_mut(&tooltip) {
            cancel(&mut self.timeline, &mut entry.timers.hide);
        }
    }

    /// Pointer left the trigger or the tooltip
    pub fn on_leave(&mut self, tooltip: NodeId) {
        let Some(entry) = self.tooltips.get_mut(&tooltip) else {
            return;
        };
        cancel(&mut self.timeline, &mut entry.timers.show);
        cancel(&mut self.timeline, &mut entry.timers.hide);
        entry.timers.hide = Some(self.timeline.schedule(
            self.hide_delay_ms,
            TimerTask {
                tooltip,
                kind: TimerKind::Hide,
            },
        ));
    }

    /// Host announced a visibility change, whichever path requested it
    pub fn on_before_toggle(&mut self, tooltip: NodeId, new_state: ToggleState) {
        let Some(entry) = self.tooltips.get_mut(&tooltip) else {
            return;
        };
        match new_state {
            ToggleState::Open => {
                cancel(&mut self.timeline, &mut entry.timers.show);
                cancel(&mut self.timeline, &mut entry.timers.hide);
                entry.shown = true;
            }
            ToggleState::Closed => entry.shown = false,
        }
    }

    /// Pop the next task due at or before `until`
    ///
    /// The clock moves to the task's due time. Call [`Self::fire`] with the
    /// result before asking for the next one.
    pub fn next_due(&mut self, until: u64) -> Option<TimerTask> {
        let (handle, task) = self.timeline.pop_due(until)?;
        if let Some(entry) = self.tooltips.get_mut(&task.tooltip) {
            let slot = entry.timers.slot_mut(task.kind);
            if *slot == Some(handle) {
                *slot = None;
            }
        }
        Some(task)
    }

    /// Move the clock to `until` once no more tasks are due
    pub fn settle(&mut self, until: u64) {
        self.timeline.settle(until);
    }

    /// Run a fired task against the host
    pub fn fire(
        &mut self,
        task: TimerTask,
        host: &mut impl PopoverHost,
        support: PopoverSupport,
    ) -> FireOutcome {
        if !self.is_registered(task.tooltip) {
            return FireOutcome::Stale;
        }
        if !support.is_supported() {
            log::debug!(
                "Popover API not supported, skipping {:?} for {:?}",
                task.kind,
                task.tooltip
            );
            return FireOutcome::Skipped;
        }

        let (result, requested) = match task.kind {
            TimerKind::Show => (host.show_popover(task.tooltip), FireOutcome::OpenRequested),
            TimerKind::Hide => (host.hide_popover(task.tooltip), FireOutcome::CloseRequested),
        };

        match result {
            Ok(()) => requested,
            Err(e) => {
                log::warn!("{:?} request for {:?} failed: {}", task.kind, task.tooltip, e);
                FireOutcome::Failed(e)
            }
        }
    }
}

fn cancel(timeline: &mut Timeline<TimerTask>, slot: &mut Option<TimerHandle>) {
    if let Some(handle) = slot.take() {
        timeline.cancel(handle);
    }
}

#[cfg(test)]
#[path = "hover_controller_tests.rs"]
mod hover_controller_tests;
