//! Scalar brightness applied uniformly to every LED in the cluster.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BRIGHTNESS_CEILING;

/// Brightness percentage, always within 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    pub const OFF: Self = Self(0);
    pub const FULL: Self = Self(BRIGHTNESS_CEILING);

    /// Clamp `percent` into the 0-100 domain.
    pub const fn new(percent: u8) -> Self {
        if percent > BRIGHTNESS_CEILING {
            Self(BRIGHTNESS_CEILING)
        } else {
            Self(percent)
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl From<u8> for Brightness {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Brightness> for u8 {
    fn from(level: Brightness) -> Self {
        level.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
