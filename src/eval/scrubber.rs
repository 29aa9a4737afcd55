use crate::foundation::core::{Progress, Range};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::lerp_exact;

/// Maps a progress range onto the trimmed playback window of one clip.
///
/// The mapping is pure: identical `(progress, duration)` inputs always produce bit-identical
/// times, and the result never leaves `[start_offset, duration - end_offset]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentScrubber {
    range: Range,
    start_offset: f64,
    end_offset: f64,
}

impl SegmentScrubber {
    /// Create a scrubber with head/tail trims in seconds.
    pub fn new(range: Range, start_offset: f64, end_offset: f64) -> ReelResult<Self> {
        if !start_offset.is_finite() || start_offset < 0.0 {
            return Err(ReelError::validation(
                "SegmentScrubber start_offset must be finite and >= 0",
            ));
        }
        if !end_offset.is_finite() || end_offset < 0.0 {
            return Err(ReelError::validation(
                "SegmentScrubber end_offset must be finite and >= 0",
            ));
        }
        Ok(Self {
            range,
            start_offset,
            end_offset,
        })
    }

    /// Progress range driving this clip.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Head trim in seconds.
    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    /// Tail trim in seconds.
    pub fn end_offset(&self) -> f64 {
        self.end_offset
    }

    /// Playable window `(first, last)` for a clip of `duration` seconds.
    ///
    /// When the trims exceed the clip the window collapses onto `start_offset`.
    pub fn window(&self, duration: f64) -> (f64, f64) {
        let last = (duration - self.end_offset).max(self.start_offset);
        (self.start_offset, last)
    }

    /// Return `true` when the trims leave a non-empty window for `duration`.
    pub fn fits(&self, duration: f64) -> bool {
        duration - self.end_offset > self.start_offset
    }

    /// Playback time in seconds for `progress`.
    pub fn playback_time(&self, progress: Progress, duration: f64) -> f64 {
        let (first, last) = self.window(duration);
        lerp_exact(first, last, self.range.local(progress)).clamp(first, last)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/scrubber.rs"]
mod tests;
