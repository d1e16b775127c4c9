use std::fmt;

use serde::Serialize;

use crate::hover::{HoverPhase, TimerKind};
use crate::page::{Activity, ActivityKind};
use crate::position::Placement;

/// Outcome of replaying a scenario
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub elapsed_ms: u64,
    pub activity: Vec<Activity>,
    pub tooltips: Vec<TooltipSummary>,
}

/// Final state of one tooltip
#[derive(Debug, Clone, Serialize)]
pub struct TooltipSummary {
    pub id: String,
    pub open: bool,
    pub phase: HoverPhase,
    pub in_portal: bool,
    pub placement: Option<Placement>,
}

impl ReplayReport {
    /// Activity rendered one entry per line
    pub fn activity_lines(&self) -> Vec<String> {
        self.activity.iter().map(describe).collect()
    }
}

fn describe(activity: &Activity) -> String {
    let what = match &activity.kind {
        ActivityKind::OpenRequested => "open requested".to_string(),
        ActivityKind::CloseRequested => "close requested".to_string(),
        ActivityKind::RequestSkipped { timer } => {
            format!("{} skipped (popover unsupported)", timer_name(*timer))
        }
        ActivityKind::RequestFailed { timer, error } => {
            format!("{} failed ({})", timer_name(*timer), error)
        }
        ActivityKind::Relocated => "moved to portal".to_string(),
        ActivityKind::Positioned { top, left } => {
            format!("positioned at top={} left={}", top, left)
        }
        ActivityKind::MissingTrigger => "no trigger, positioning skipped".to_string(),
        ActivityKind::Toggled { state } => match state {
            crate::dom::ToggleState::Open => "opened".to_string(),
            crate::dom::ToggleState::Closed => "closed".to_string(),
        },
    };
    format!("t={}ms {} {}", activity.at, activity.tooltip, what)
}

fn timer_name(kind: TimerKind) -> &'static str {
    match kind {
        TimerKind::Show => "show",
        TimerKind::Hide => "hide",
    }
}

impl fmt::Display for TooltipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.open { "open" } else { "closed" };
        write!(f, "{}: {}, phase={}", self.id, state, self.phase)?;
        if let Some(placement) = self.placement {
            write!(f, ", top={} left={}", placement.top, placement.left)?;
        }
        if self.in_portal {
            write!(f, ", in portal")?;
        }
        Ok(())
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.activity_lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        for tooltip in &self.tooltips {
            writeln!(f, "{}", tooltip)?;
        }
        writeln!(f, "elapsed: {}ms", self.elapsed_ms)
    }
}
