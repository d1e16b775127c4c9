use std::fmt;

use serde::Serialize;

use crate::dom::NodeId;
use crate::timeline::TimerHandle;

/// Where a tooltip is in the hover cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverPhase {
    Idle,
    PendingShow,
    Shown,
    PendingHide,
}

impl fmt::Display for HoverPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverPhase::Idle => write!(f, "idle"),
            HoverPhase::PendingShow => write!(f, "pending_show"),
            HoverPhase::Shown => write!(f, "shown"),
            HoverPhase::PendingHide => write!(f, "pending_hide"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Show,
    Hide,
}

/// Delayed action queued on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTask {
    pub tooltip: NodeId,
    pub kind: TimerKind,
}

/// At most one pending show and one pending hide for a tooltip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerPair {
    pub show: Option<TimerHandle>,
    pub hide: Option<TimerHandle>,
}

impl TimerPair {
    pub fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<TimerHandle> {
        match kind {
            TimerKind::Show => &mut self.show,
            TimerKind::Hide => &mut self.hide,
        }
    }
}

/// Per-tooltip record owned by the controller
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TooltipTimers {
    pub timers: TimerPair,
    /// Host-confirmed open state, tracked from toggle notifications
    pub shown: bool,
}

impl TooltipTimers {
    pub fn phase(&self) -> HoverPhase {
        if self.timers.show.is_some() {
            HoverPhase::PendingShow
        } else if self.timers.hide.is_some() {
            HoverPhase::PendingHide
        } else if self.shown {
            HoverPhase::Shown
        } else {
            HoverPhase::Idle
        }
    }
}

#[cfg(test)]
#[path = "hover_state_tests.rs"]
mod hover_state_tests;
