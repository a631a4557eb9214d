use std::time::Duration;

/// Configuration errors raised when a cycler is built.
///
/// Cycling itself never fails once these checks pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CyclerError {
    #[error("tagline list must contain at least one entry")]
    EmptyTaglines,

    #[error("cycle period must be greater than zero")]
    ZeroPeriod,

    #[error("hide delay ({hide_delay:?}) must be shorter than the period ({period:?})")]
    HideDelayTooLong { hide_delay: Duration, period: Duration },
}
