use serde::Deserialize;

use crate::geometry::{Rect, Viewport};

fn default_true() -> bool {
    true
}

fn default_tag() -> String {
    "div".to_string()
}

/// Page layout plus a script of pointer activity
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: Viewport,
    #[serde(default = "default_true")]
    pub popover_supported: bool,
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One element of the page; attached to `<body>` unless `parent` is given
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub popover: bool,
    #[serde(default)]
    pub popovertarget: Option<String>,
    #[serde(default)]
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Enter { target: String },
    Leave { target: String },
    Wait { ms: u64 },
    /// Programmatic open, bypassing hover timing
    Open { target: String },
    Close { target: String },
    Resize { width: f64, height: f64 },
}

impl Step {
    pub fn target(&self) -> Option<&str> {
        match self {
            Step::Enter { target }
            | Step::Leave { target }
            | Step::Open { target }
            | Step::Close { target } => Some(target),
            Step::Wait { .. } | Step::Resize { .. } => None,
        }
    }
}
