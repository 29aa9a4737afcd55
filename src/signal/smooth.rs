use crate::animation::ease::Ease;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::SmoothingDef;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start_secs: f64,
}

/// Wheel smoothing driver.
///
/// Every wheel delta moves the target and restarts a tween from the currently animated
/// position toward it, eased over `duration_secs`. Rapid wheel bursts therefore keep
/// retargeting and the visible position lags and glides instead of jumping.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    duration_secs: f64,
    wheel_multiplier: f64,
    ease: Ease,
    limit: f64,
    animated: f64,
    target: f64,
    tween: Option<Tween>,
}

impl SmoothScroll {
    /// Create a driver for a scroll region of length `limit` pixels.
    pub fn new(def: &SmoothingDef, limit: f64) -> ReelResult<Self> {
        if !def.duration_secs.is_finite() || def.duration_secs <= 0.0 {
            return Err(ReelError::config(
                "smoothing duration_secs must be finite and > 0",
            ));
        }
        if !def.wheel_multiplier.is_finite() || def.wheel_multiplier <= 0.0 {
            return Err(ReelError::config(
                "smoothing wheel_multiplier must be finite and > 0",
            ));
        }
        if !limit.is_finite() || limit < 0.0 {
            return Err(ReelError::config("scroll limit must be finite and >= 0"));
        }
        Ok(Self {
            duration_secs: def.duration_secs,
            wheel_multiplier: def.wheel_multiplier,
            ease: def.ease,
            limit,
            animated: 0.0,
            target: 0.0,
            tween: None,
        })
    }

    /// Current animated scroll position in pixels.
    pub fn position(&self) -> f64 {
        self.animated
    }

    /// Position the driver is heading to.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Return `true` while a tween is running.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Feed a wheel delta (pixels, positive scrolls down) observed at `now_secs`.
    pub fn on_wheel(&mut self, delta_px: f64, now_secs: f64) {
        if !delta_px.is_finite() {
            return;
        }
        self.advance(now_secs);
        self.target = (self.target + delta_px * self.wheel_multiplier).clamp(0.0, self.limit);
        self.tween = Some(Tween {
            from: self.animated,
            to: self.target,
            start_secs: now_secs,
        });
    }

    /// Apply a native scroll position (touch, keyboard, scrollbar). Cancels any running tween.
    pub fn on_native_scroll(&mut self, offset_px: f64) {
        if !offset_px.is_finite() {
            return;
        }
        let pos = offset_px.clamp(0.0, self.limit);
        self.tween = None;
        self.animated = pos;
        self.target = pos;
    }

    /// Advance the tween to `now_secs` and return the animated position.
    pub fn tick(&mut self, now_secs: f64) -> f64 {
        self.advance(now_secs);
        self.animated
    }

    /// Resize the scroll region, keeping positions inside it.
    pub fn set_limit(&mut self, limit: f64) {
        if !limit.is_finite() || limit < 0.0 {
            return;
        }
        self.limit = limit;
        self.animated = self.animated.clamp(0.0, limit);
        self.target = self.target.clamp(0.0, limit);
        if let Some(tw) = self.tween.as_mut() {
            tw.to = self.target;
        }
    }

    fn advance(&mut self, now_secs: f64) {
        let Some(tw) = self.tween else {
            return;
        };
        let t = ((now_secs - tw.start_secs) / self.duration_secs).max(0.0);
        if t >= 1.0 {
            self.animated = tw.to;
            self.tween = None;
            return;
        }
        let eased = self.ease.apply(t);
        self.animated = (tw.from + (tw.to - tw.from) * eased).clamp(0.0, self.limit);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/smooth.rs"]
mod tests;
