// Configuration type definitions

use serde::Deserialize;

use crate::position::DEFAULT_PADDING;

pub const DEFAULT_SHOW_DELAY_MS: u64 = 300;
pub const DEFAULT_HIDE_DELAY_MS: u64 = 100;

fn default_show_delay_ms() -> u64 {
    DEFAULT_SHOW_DELAY_MS
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY_MS
}

fn default_padding() -> f64 {
    DEFAULT_PADDING
}

/// Tooltip timing and placement section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TooltipConfig {
    /// Hover time before a tooltip opens (300ms keeps passing pointers from triggering it)
    #[serde(default = "default_show_delay_ms")]
    pub show_delay_ms: u64,
    /// Grace period after the pointer leaves before the tooltip closes
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
    /// Gap from the trigger and inset from the viewport edges
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
}
