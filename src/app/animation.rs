//! Opacity transitions driven by cycler state changes.
//!
//! The cycler only says *what* is visible. These faders turn each change
//! into a timed opacity ramp that the renderer samples on every tick.

use std::time::{Duration, Instant};

use crate::cycler::{CyclerState, Mode, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single value ramping from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Fader {
    from: f32,
    to: f32,
    started: Instant,
}

impl Fader {
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
        }
    }

    pub fn value(&self, now: Instant, duration: Duration, easing: Easing) -> f32 {
        if duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        self.from + (self.to - self.from) * easing.apply(t)
    }

    /// Start a new ramp from wherever the current one is right now.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration, easing: Easing) {
        if self.to == to {
            return;
        }
        self.from = self.value(now, duration, easing);
        self.to = to;
        self.started = now;
    }

    pub fn is_settled(&self, now: Instant, duration: Duration) -> bool {
        self.from == self.to || now.saturating_duration_since(self.started) >= duration
    }
}

/// Per-item opacity for the mounted variant.
///
/// Fade mode keeps one fader for the single displayed tagline. Cross-fade
/// keeps one per tagline, since every item stays on screen.
#[derive(Debug, Clone)]
pub struct TaglineAnimation {
    mode: Mode,
    duration: Duration,
    easing: Easing,
    faders: Vec<Fader>,
}

impl TaglineAnimation {
    /// Starting point right after mount: the first tagline fully shown.
    pub fn new(variant: Variant, tagline_count: usize, now: Instant) -> Self {
        let mode = variant.mode();
        let easing = match mode {
            Mode::Fade => Easing::EaseOut,
            Mode::CrossFade => Easing::EaseInOut,
        };
        let faders = match mode {
            Mode::Fade => vec![Fader::settled(1.0, now)],
            Mode::CrossFade => (0..tagline_count)
                .map(|i| Fader::settled(if i == 0 { 1.0 } else { 0.0 }, now))
                .collect(),
        };
        Self {
            mode,
            duration: variant.transition(),
            easing,
            faders,
        }
    }

    pub fn sync(&mut self, state: &CyclerState, now: Instant) {
        let (duration, easing) = (self.duration, self.easing);
        match self.mode {
            Mode::Fade => {
                let target = if state.visible { 1.0 } else { 0.0 };
                for fader in &mut self.faders {
                    fader.retarget(target, now, duration, easing);
                }
            }
            Mode::CrossFade => {
                for (i, fader) in self.faders.iter_mut().enumerate() {
                    let target = if i == state.position { 1.0 } else { 0.0 };
                    fader.retarget(target, now, duration, easing);
                }
            }
        }
    }

    /// Opacity of the single tagline in fade mode.
    pub fn opacity(&self, now: Instant) -> f32 {
        self.opacity_of(0, now)
    }

    pub fn opacity_of(&self, index: usize, now: Instant) -> f32 {
        self.faders
            .get(index)
            .map(|f| f.value(now, self.duration, self.easing))
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.faders
            .iter()
            .any(|f| !f.is_settled(now, self.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::EaseOut, Easing::EaseInOut] {
            assert!(close(easing.apply(0.0), 0.0));
            assert!(close(easing.apply(1.0), 1.0));
            assert!(close(easing.apply(2.0), 1.0));
        }
        assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_fade_ramps_down_and_up() {
        let t0 = Instant::now();
        let mut anim = TaglineAnimation::new(Variant::Fade, 12, t0);
        assert!(!anim.is_animating(t0));
        assert!(close(anim.opacity(t0), 1.0));

        anim.sync(&CyclerState { position: 0, visible: false }, t0);
        assert!(anim.is_animating(t0 + Duration::from_millis(100)));
        let mid = anim.opacity(t0 + Duration::from_millis(250));
        assert!(mid > 0.0 && mid < 1.0);
        assert!(close(anim.opacity(t0 + Duration::from_millis(500)), 0.0));
        assert!(!anim.is_animating(t0 + Duration::from_millis(500)));

        let t1 = t0 + Duration::from_millis(500);
        anim.sync(&CyclerState { position: 1, visible: true }, t1);
        assert!(close(anim.opacity(t1 + Duration::from_secs(1)), 1.0));
    }

    #[test]
    fn test_cross_fade_swaps_opacity() {
        let t0 = Instant::now();
        let mut anim = TaglineAnimation::new(Variant::CrossFade, 3, t0);
        assert!(close(anim.opacity_of(0, t0), 1.0));
        assert!(close(anim.opacity_of(1, t0), 0.0));

        anim.sync(&CyclerState { position: 1, visible: true }, t0);
        let half = t0 + Duration::from_millis(350);
        assert!(close(anim.opacity_of(0, half), 0.5));
        assert!(close(anim.opacity_of(1, half), 0.5));

        let done = t0 + Duration::from_millis(700);
        assert!(close(anim.opacity_of(0, done), 0.0));
        assert!(close(anim.opacity_of(1, done), 1.0));
        assert!(close(anim.opacity_of(2, done), 0.0));
    }

    #[test]
    fn test_retarget_mid_ramp_is_continuous() {
        let t0 = Instant::now();
        let d = Duration::from_millis(500);
        let mut fader = Fader::settled(1.0, t0);
        fader.retarget(0.0, t0, d, Easing::EaseOut);
        let t1 = t0 + Duration::from_millis(200);
        let before = fader.value(t1, d, Easing::EaseOut);
        fader.retarget(1.0, t1, d, Easing::EaseOut);
        assert!(close(fader.value(t1, d, Easing::EaseOut), before));
        assert!(close(fader.value(t1 + d, d, Easing::EaseOut), 1.0));
    }
}
