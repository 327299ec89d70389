//! Observable orchestrator state.

use std::fmt;

/// Where the orchestrator is in a `process` call.
///
/// `Idle` until the first call; each call moves through `Submitting`, then
/// `Remote` or `Fallback` (or both, in that order), and ends in `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Remote,
    Fallback,
    Done,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Remote => "remote",
            Self::Fallback => "fallback",
            Self::Done => "done",
        }
    }

    /// Whether a call is currently in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting | Self::Remote | Self::Fallback)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
