use serde::Serialize;

use crate::dom::ToggleState;
use crate::hover::TimerKind;

/// Something observable the page did, stamped with timeline time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub at: u64,
    pub tooltip: String,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityKind {
    OpenRequested,
    CloseRequested,
    /// Capability unsupported, nothing was requested
    RequestSkipped { timer: TimerKind },
    RequestFailed { timer: TimerKind, error: String },
    Relocated,
    Positioned { top: f64, left: f64 },
    /// Positioning skipped because no trigger references the tooltip
    MissingTrigger,
    Toggled { state: ToggleState },
}

impl ActivityKind {
    pub fn is_open_request(&self) -> bool {
        matches!(self, ActivityKind::OpenRequested)
    }

    pub fn is_close_request(&self) -> bool {
        matches!(self, ActivityKind::CloseRequested)
    }
}
