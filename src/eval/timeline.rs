use crate::eval::compositor::{LayerCompositor, Transition};
use crate::eval::reveal::CharacterRevealSequencer;
use crate::eval::scrubber::SegmentScrubber;
use crate::foundation::core::{Progress, Range};
use crate::foundation::error::ReelResult;
use crate::foundation::math::is_usable_duration;
use crate::output::writes::{FrameWrites, LayerWrite, SegmentWrite, TextWrite};
use crate::scene::model::{DeviceProfile, ScrollDef};
use crate::scene::table::RangeTable;

/// Compiled segment entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTrack {
    /// Segment id.
    pub id: String,
    /// Media source locator.
    pub source: String,
    /// Progress to playback-time mapping.
    pub scrubber: SegmentScrubber,
    /// Catch-up time of the written playback position.
    pub scrub_lag_secs: Option<f64>,
}

/// Compiled layer entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerTrack {
    /// Layer id.
    pub id: String,
    /// Index into [`Timeline::segments`] of the owned segment.
    pub segment: Option<usize>,
    /// Nested slide transitions.
    pub compositor: LayerCompositor,
}

/// Compiled text entry.
#[derive(Clone, Debug, PartialEq)]
pub struct TextTrack {
    /// Text id.
    pub id: String,
    /// Index into [`Timeline::layers`] of the layer carrying this text.
    pub layer: usize,
    /// Per-character reveal.
    pub sequencer: CharacterRevealSequencer,
}

/// Validated, compiled form of a [`RangeTable`].
///
/// Holds every mapping of one profile. Evaluation is pure: it needs only progress and the
/// known clip durations, and never touches media handles.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    profile: DeviceProfile,
    scroll: ScrollDef,
    segments: Vec<SegmentTrack>,
    layers: Vec<LayerTrack>,
    texts: Vec<TextTrack>,
}

impl Timeline {
    /// Validate `table` and compile it.
    pub fn new(table: &RangeTable) -> ReelResult<Self> {
        table.validate()?;
        let def = table.def();

        let mut segments = Vec::with_capacity(def.segments.len());
        for seg in &def.segments {
            let range = Range::new(seg.range[0], seg.range[1])?;
            segments.push(SegmentTrack {
                id: seg.id.clone(),
                source: seg.source.clone(),
                scrubber: SegmentScrubber::new(range, seg.start_offset, seg.end_offset)?,
                scrub_lag_secs: seg.scrub_lag_secs.filter(|lag| *lag > 0.0),
            });
        }

        let mut layers = Vec::with_capacity(def.layers.len());
        let mut texts = Vec::new();
        for (li, layer) in def.layers.iter().enumerate() {
            let mut compositor = LayerCompositor::default();
            for tr in &layer.transitions {
                let range = Range::new(tr.range[0], tr.range[1])?;
                compositor.push(Transition::new(range, tr.from_vh, tr.to_vh)?);
            }
            let segment = layer
                .segment
                .as_deref()
                .and_then(|id| segments.iter().position(|s| s.id == id));
            layers.push(LayerTrack {
                id: layer.id.clone(),
                segment,
                compositor,
            });
            for text in &layer.texts {
                let range = Range::new(text.range[0], text.range[1])?;
                texts.push(TextTrack {
                    id: text.id.clone(),
                    layer: li,
                    sequencer: CharacterRevealSequencer::new(&text.text, range),
                });
            }
        }

        Ok(Self {
            profile: def.profile,
            scroll: def.scroll.clone(),
            segments,
            layers,
            texts,
        })
    }

    /// Profile the timeline was compiled for.
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Scroll configuration of the profile.
    pub fn scroll(&self) -> &ScrollDef {
        &self.scroll
    }

    /// Segments in table order.
    pub fn segments(&self) -> &[SegmentTrack] {
        &self.segments
    }

    /// Layers in table order.
    pub fn layers(&self) -> &[LayerTrack] {
        &self.layers
    }

    /// Text blocks in table order.
    pub fn texts(&self) -> &[TextTrack] {
        &self.texts
    }

    /// Index of segment `id`.
    pub fn segment_index(&self, id: &str) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    /// Evaluate every mapping at `progress`.
    ///
    /// `durations[i]` is the known duration of segment `i`. Segments without one, or with a
    /// duration that is not finite and positive, are skipped.
    pub fn evaluate(&self, progress: Progress, durations: &[Option<f64>]) -> FrameWrites {
        let mut out = FrameWrites::default();
        self.evaluate_into(progress, durations, &mut out);
        out
    }

    /// Like [`Timeline::evaluate`], reusing `out`'s allocations.
    pub fn evaluate_into(&self, progress: Progress, durations: &[Option<f64>], out: &mut FrameWrites) {
        out.clear();
        out.progress = progress.get();
        for (seg, duration) in self.segments.iter().zip(durations) {
            if let Some(d) = duration.filter(|d| is_usable_duration(*d)) {
                out.segments.push(SegmentWrite {
                    segment: seg.id.clone(),
                    time_secs: seg.scrubber.playback_time(progress, d),
                });
            }
        }
        self.evaluate_layers_and_texts(progress, out);
    }

    pub(crate) fn evaluate_layers_and_texts(&self, progress: Progress, out: &mut FrameWrites) {
        for layer in &self.layers {
            out.layers.push(LayerWrite {
                layer: layer.id.clone(),
                offset: layer.compositor.evaluate(progress),
            });
        }
        for text in &self.texts {
            if text.sequencer.is_empty() {
                continue;
            }
            let mut opacity = Vec::with_capacity(text.sequencer.len());
            text.sequencer.opacities_into(progress, &mut opacity);
            out.texts.push(TextWrite {
                text: text.id.clone(),
                opacity,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;
