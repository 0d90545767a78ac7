//! Presentation variants.

use std::fmt;
use std::time::Duration;

use crate::constants::{EASED_TICK_INTERVAL, FAST_TICK_INTERVAL};
use crate::metrics::Seeds;

/// How the dashboard animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Quick ticks, bars snap to their value, gradient banner on top.
    #[default]
    Fast,
    /// Slower ticks, bars glide toward their value, no banner.
    Eased,
}

impl Variant {
    pub fn tick_interval(self) -> Duration {
        match self {
            Variant::Fast => FAST_TICK_INTERVAL,
            Variant::Eased => EASED_TICK_INTERVAL,
        }
    }

    pub fn initial_seeds(self) -> Seeds {
        match self {
            Variant::Fast => Seeds::BASELINE,
            Variant::Eased => Seeds::HEAD_START,
        }
    }

    pub fn reset_seeds(self) -> Seeds {
        Seeds::BASELINE
    }

    pub fn shows_banner(self) -> bool {
        self == Variant::Fast
    }

    pub fn is_animated(self) -> bool {
        self == Variant::Eased
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Fast => f.write_str("fast"),
            Variant::Eased => f.write_str("eased"),
        }
    }
}
