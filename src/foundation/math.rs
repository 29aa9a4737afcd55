/// Linear interpolation from `a` to `b` that returns the endpoints exactly at `t <= 0` and `t >= 1`.
pub(crate) fn lerp_exact(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Return `true` for a clip duration that can be scrubbed: finite and positive.
pub(crate) fn is_usable_duration(secs: f64) -> bool {
    secs.is_finite() && secs > 0.0
}

/// Exponential catch-up of `current` toward `target` after `dt` seconds with time constant `lag`.
///
/// The result always lies between `current` and `target`.
pub(crate) fn approach(current: f64, target: f64, dt: f64, lag: f64) -> f64 {
    if lag.is_nan() || lag <= 0.0 || !dt.is_finite() {
        return target;
    }
    if dt <= 0.0 {
        return current;
    }
    let k = 1.0 - (-dt / lag).exp();
    let next = current + (target - current) * k;
    // Settle once the residual is far below anything a media element can seek to.
    if (target - next).abs() < 1e-6 {
        target
    } else {
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
