//! Application-wide constants.
//!
//! Centralizes timing and layout values for maintainability.

use std::time::Duration;

/// Tick period for the fast variant.
pub const FAST_TICK_INTERVAL: Duration = Duration::from_millis(600);

/// Tick period for the eased variant.
pub const EASED_TICK_INTERVAL: Duration = Duration::from_millis(1200);

/// Animation frame period while an eased bar is still moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Number of cells in every progress bar.
pub const BAR_WIDTH: usize = 30;

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Blank line above everything.
    pub const TOP_MARGIN: u16 = 1;
    /// Banner height (one row per line of art).
    pub const BANNER_HEIGHT: u16 = 6;
    /// Banner width in terminal columns.
    pub const BANNER_WIDTH: u16 = 76;
    /// Title bar height.
    pub const TITLE_HEIGHT: u16 = 1;
    /// Bordered body: two border rows plus the panel content.
    pub const BODY_HEIGHT: u16 = 18;
    /// Width of one metric panel.
    pub const PANEL_WIDTH: u16 = 42;
    /// Width of the horizontal rules inside a panel.
    pub const RULE_WIDTH: u16 = 36;
    /// Status line height.
    pub const STATUS_HEIGHT: u16 = 1;
    /// Help line height, including its top margin.
    pub const HELP_HEIGHT: u16 = 2;
}
