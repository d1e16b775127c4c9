use std::fmt;

/// CSS `position` values the tooltip code cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    #[default]
    Static,
    Fixed,
}

/// Inline style properties written by the positioning code
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineStyle {
    pub position: PositionMode,
    pub top: Option<f64>,
    pub left: Option<f64>,
}

impl InlineStyle {
    /// Pin the element at a viewport offset
    pub fn set_fixed(&mut self, top: f64, left: f64) {
        self.position = PositionMode::Fixed;
        self.top = Some(top);
        self.left = Some(left);
    }

    /// Viewport offset if the element is fixed and both offsets are set
    pub fn fixed_offset(&self) -> Option<(f64, f64)> {
        match (self.position, self.top, self.left) {
            (PositionMode::Fixed, Some(top), Some(left)) => Some((top, left)),
            _ => None,
        }
    }
}

/// Renders as a CSS declaration list, e.g. `position: fixed; top: 108px; left: 50px;`
impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decls = Vec::new();
        if self.position == PositionMode::Fixed {
            decls.push("position: fixed;".to_string());
        }
        if let Some(top) = self.top {
            decls.push(format!("top: {}px;", top));
        }
        if let Some(left) = self.left {
            decls.push(format!("left: {}px;", left));
        }
        write!(f, "{}", decls.join(" "))
    }
}
