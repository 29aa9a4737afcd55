use crate::foundation::core::{Progress, Range};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::lerp_exact;
use smallvec::SmallVec;

/// One slide of a layer: `from_vh` before the range, `to_vh` after it, linear in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    range: Range,
    from_vh: f64,
    to_vh: f64,
}

impl Transition {
    /// Create a transition between two offsets in viewport-height units.
    pub fn new(range: Range, from_vh: f64, to_vh: f64) -> ReelResult<Self> {
        if !from_vh.is_finite() || !to_vh.is_finite() {
            return Err(ReelError::validation("Transition offsets must be finite"));
        }
        Ok(Self {
            range,
            from_vh,
            to_vh,
        })
    }

    /// Progress range of the slide.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Offset before the range.
    pub fn from_vh(&self) -> f64 {
        self.from_vh
    }

    /// Offset after the range.
    pub fn to_vh(&self) -> f64 {
        self.to_vh
    }

    /// Offset contributed by this transition at `progress`.
    pub fn offset_at(&self, progress: Progress) -> f64 {
        lerp_exact(self.from_vh, self.to_vh, self.range.local(progress))
    }
}

/// Evaluated offset of one layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct LayerOffset {
    /// Accumulated vertical offset in viewport-height units.
    pub net_vh: f64,
    /// Offset of every nesting level, outermost first.
    pub nested_vh: SmallVec<[f64; 2]>,
}

/// Ordered stack of transitions applied to one layer.
///
/// Level 0 is the outermost container. Each level is evaluated in list order and translates
/// relative to the level above it, so the visible offset is the running sum.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerCompositor {
    transitions: SmallVec<[Transition; 2]>,
}

impl LayerCompositor {
    /// Build a compositor; `transitions` are taken outermost first.
    pub fn new(transitions: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            transitions: transitions.into_iter().collect(),
        }
    }

    /// Append an inner transition.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Transitions, outermost first.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Net offset at `progress`.
    pub fn offset_at(&self, progress: Progress) -> f64 {
        self.transitions
            .iter()
            .fold(0.0, |base, t| base + t.offset_at(progress))
    }

    /// Net and per-level offsets at `progress`.
    pub fn evaluate(&self, progress: Progress) -> LayerOffset {
        let mut out = LayerOffset::default();
        for t in &self.transitions {
            let level = t.offset_at(progress);
            out.nested_vh.push(level);
            out.net_vh += level;
        }
        out
    }

    /// Return `true` while any level is between its endpoints.
    pub fn is_moving(&self, progress: Progress) -> bool {
        self.transitions
            .iter()
            .any(|t| t.range.contains(progress) && progress.get() > t.range.start())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
