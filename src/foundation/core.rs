use crate::foundation::error::{ReelError, ReelResult};

/// Normalized scroll progress across the bounded scroll region.
///
/// Always inside `[0, 1]`. Raw input may move backwards (the user scrolls up), so progress is
/// not monotonic over time, only bounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Top of the scroll region.
    pub const START: Self = Self(0.0);
    /// Bottom of the scroll region.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. `NaN` maps to [`Progress::START`].
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Build progress from a scroll offset inside a region of scrollable length `limit`.
    ///
    /// A region that cannot scroll (`limit <= 0`) pins progress at the start.
    pub fn from_scroll(offset: f64, limit: f64) -> Self {
        if limit.is_nan() || limit <= 0.0 {
            return Self::START;
        }
        Self::new(offset / limit)
    }

    /// Raw scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Sub-interval `[start, end)` of progress over which a mapping is active.
///
/// Construction enforces `0 <= start < end <= 1`; malformed ranges are configuration defects and
/// are rejected rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
}

impl Range {
    /// Create a validated range.
    pub fn new(start: f64, end: f64) -> ReelResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ReelError::validation("Range bounds must be finite"));
        }
        if start < 0.0 || end > 1.0 {
            return Err(ReelError::validation(format!(
                "Range [{start}, {end}] must lie inside [0, 1]"
            )));
        }
        if start >= end {
            return Err(ReelError::validation(format!(
                "Range start must be < end (got [{start}, {end}])"
            )));
        }
        Ok(Self { start, end })
    }

    /// Sub-ranges derived from an already validated parent.
    pub(crate) fn derived(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Inclusive lower bound.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Upper bound.
    pub fn end(self) -> f64 {
        self.end
    }

    /// Width of the range.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `p` is inside `[start, end)`.
    pub fn contains(self, p: Progress) -> bool {
        self.start <= p.get() && p.get() < self.end
    }

    /// Position of `p` inside the range, clamped to `[0, 1]`.
    ///
    /// Exactly `0.0` at or before `start` and exactly `1.0` at or after `end`.
    pub fn local(self, p: Progress) -> f64 {
        let p = p.get();
        if p <= self.start {
            return 0.0;
        }
        if p >= self.end {
            return 1.0;
        }
        ((p - self.start) / self.span()).clamp(0.0, 1.0)
    }

    /// Return `true` when the two half-open ranges share any progress value.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Distance from the end of `self` to the start of a later range (negative when they overlap).
    pub fn gap_to(self, later: Self) -> f64 {
        later.start - self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
