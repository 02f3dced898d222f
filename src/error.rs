//! Unified error types for the indicator controller.
//!
//! A single `Error` enum that every subsystem converts into. All variants
//! are `Copy` so they can be passed through the work-queue handlers without
//! allocation. None of these ever escape the controller at runtime; they are
//! logged where they occur and the loop keeps going.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The LED output device failed.
    Device(DeviceError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(e) => write!(f, "device: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Output device errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The LED controller did not pass its readiness check.
    NotReady,
    /// A single channel rejected a brightness write.
    ChannelWrite { channel: usize, code: i32 },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "LED device not ready"),
            Self::ChannelWrite { channel, code } => {
                write!(f, "LED[{channel}] brightness write failed: {code}")
            }
        }
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Self::Device(e)
    }
}

// ---------------------------------------------------------------------------
// Underglow query errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderglowError {
    /// The board has no underglow subsystem (or it is compiled out).
    Unsupported,
    /// The subsystem exists but the state read failed.
    QueryFailed(i32),
}

impl fmt::Display for UnderglowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "underglow not available"),
            Self::QueryFailed(code) => write!(f, "underglow state query failed: {code}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
