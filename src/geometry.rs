//! Viewport-space geometry
//!
//! Rectangles follow the browser's `getBoundingClientRect()` convention:
//! origin at the viewport's top-left corner, y growing downwards, values in
//! CSS pixels.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Same size, moved so its top-left corner sits at `(left, top)`
    pub fn moved_to(&self, left: f64, top: f64) -> Self {
        Self {
            x: left,
            y: top,
            ..*self
        }
    }
}

/// Visible rendering area used as the positioning boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `rect` lies fully inside the viewport inset by `padding`
    pub fn contains_with_padding(&self, rect: Rect, padding: f64) -> bool {
        rect.left() >= padding
            && rect.top() >= padding
            && rect.right() <= self.width - padding
            && rect.bottom() <= self.height - padding
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
