//! Variants and their timing constants.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::CyclerError;

/// Cosmetic variant of the tagline display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Hide, swap while hidden, reveal.
    #[default]
    Fade,
    /// All taglines stacked, only the active one opaque.
    CrossFade,
    /// Like `Fade`, with a color gradient and a blur-ish exit.
    Gradient,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Fade, Variant::CrossFade, Variant::Gradient];

    pub fn mode(self) -> Mode {
        match self {
            Variant::Fade | Variant::Gradient => Mode::Fade,
            Variant::CrossFade => Mode::CrossFade,
        }
    }

    pub fn default_period(self) -> Duration {
        match self {
            Variant::Fade | Variant::CrossFade => Duration::from_millis(4000),
            Variant::Gradient => Duration::from_millis(4500),
        }
    }

    /// Time spent hidden between two taglines. `None` in cross-fade mode.
    pub fn default_hide_delay(self) -> Option<Duration> {
        match self {
            Variant::Fade => Some(Duration::from_millis(500)),
            Variant::CrossFade => None,
            Variant::Gradient => Some(Duration::from_millis(600)),
        }
    }

    /// Length of the renderer's enter/exit animation.
    pub fn transition(self) -> Duration {
        match self {
            Variant::Fade => Duration::from_millis(500),
            Variant::CrossFade => Duration::from_millis(700),
            Variant::Gradient => Duration::from_millis(600),
        }
    }

    pub fn next(self) -> Variant {
        match self {
            Variant::Fade => Variant::CrossFade,
            Variant::CrossFade => Variant::Gradient,
            Variant::Gradient => Variant::Fade,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Fade => "fade",
            Variant::CrossFade => "cross-fade",
            Variant::Gradient => "gradient",
        };
        f.write_str(name)
    }
}

/// How the cycler mutates its state on each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fade,
    CrossFade,
}

/// Validated timer settings for one mounted cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub variant: Variant,
    pub period: Duration,
    /// Present only in fade mode; always shorter than `period`.
    pub hide_delay: Option<Duration>,
}

impl Timing {
    /// Variant defaults with no overrides.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            period: variant.default_period(),
            hide_delay: variant.default_hide_delay(),
        }
    }

    /// Variant defaults with optional overrides, checked so cycles cannot
    /// overlap.
    pub fn with_overrides(
        variant: Variant,
        period: Option<Duration>,
        hide_delay: Option<Duration>,
    ) -> Result<Self, CyclerError> {
        let defaults = Self::for_variant(variant);
        let period = period.unwrap_or(defaults.period);
        if period.is_zero() {
            return Err(CyclerError::ZeroPeriod);
        }

        let hide_delay = match variant.mode() {
            Mode::CrossFade => None,
            Mode::Fade => {
                let delay = hide_delay.or(defaults.hide_delay).unwrap_or_default();
                if delay >= period {
                    return Err(CyclerError::HideDelayTooLong {
                        hide_delay: delay,
                        period,
                    });
                }
                Some(delay)
            }
        };

        Ok(Self {
            variant,
            period,
            hide_delay,
        })
    }

    pub fn mode(&self) -> Mode {
        self.variant.mode()
    }
}
