use serde::Serialize;

use crate::geometry::{Rect, Viewport};

/// Gap between trigger and tooltip, also used as the viewport inset
pub const DEFAULT_PADDING: f64 = 8.0;

/// Fixed-position offset for a tooltip, relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    /// Box the tooltip occupies once this placement is applied
    pub fn to_rect(self, tooltip: Rect) -> Rect {
        tooltip.moved_to(self.left, self.top)
    }
}

/// Compute where a tooltip should be shown for the given trigger
///
/// Pure and deterministic. Tooltips larger than the padded viewport get a
/// best-effort placement that may partially overflow; this never fails.
///
/// # Arguments
/// * `trigger` - Bounding box of the trigger element
/// * `tooltip` - Bounding box of the tooltip (only its size is used)
/// * `viewport` - Current viewport dimensions
/// * `padding` - Gap below/above the trigger and inset from viewport edges
pub fn compute_position(
    trigger: Rect,
    tooltip: Rect,
    viewport: Viewport,
    padding: f64,
) -> Placement {
    Placement {
        top: vertical_position(trigger, tooltip.height, viewport.height, padding),
        left: horizontal_position(trigger.left(), tooltip.width, viewport.width, padding),
    }
}

fn vertical_position(trigger: Rect, tooltip_height: f64, viewport_height: f64, padding: f64) -> f64 {
    let below = trigger.bottom() + padding;
    if below + tooltip_height <= viewport_height - padding {
        return below;
    }

    let above = trigger.top() - tooltip_height - padding;
    if above >= padding {
        above
    } else {
        // Fits neither way: pin to the top edge and let the bottom overflow
        padding
    }
}

fn horizontal_position(anchor_left: f64, tooltip_width: f64, viewport_width: f64, padding: f64) -> f64 {
    let mut left = anchor_left;
    if left + tooltip_width > viewport_width - padding {
        left = viewport_width - tooltip_width - padding;
    }
    if left < padding {
        left = padding;
    }
    left
}

#[cfg(test)]
#[path = "position_engine_tests.rs"]
mod position_engine_tests;
