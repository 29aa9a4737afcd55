use crate::eval::compositor::LayerOffset;
use serde::Serialize;

/// Playback position written to one segment's media handle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentWrite {
    /// Segment id.
    pub segment: String,
    /// Playback time in seconds.
    pub time_secs: f64,
}

/// Vertical offset written to one layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerWrite {
    /// Layer id.
    pub layer: String,
    /// Offsets, net and per nesting level.
    #[serde(flatten)]
    pub offset: LayerOffset,
}

/// Per-character opacities written to one text block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextWrite {
    /// Text block id.
    pub text: String,
    /// Opacity of every character in text order.
    pub opacity: Vec<f64>,
}

/// Everything the render boundary applies for one tick.
///
/// Entries appear in table order: segments, then layers, then text blocks. Segments that are
/// not configured yet are absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameWrites {
    /// Progress the writes were derived from.
    pub progress: f64,
    /// Segment playback positions.
    pub segments: Vec<SegmentWrite>,
    /// Layer offsets.
    pub layers: Vec<LayerWrite>,
    /// Text reveals.
    pub texts: Vec<TextWrite>,
}

impl FrameWrites {
    /// Written time of `segment`, if it was written this tick.
    pub fn segment_time(&self, segment: &str) -> Option<f64> {
        self.segments
            .iter()
            .find(|w| w.segment == segment)
            .map(|w| w.time_secs)
    }

    /// Net offset of `layer`.
    pub fn layer_offset(&self, layer: &str) -> Option<f64> {
        self.layers
            .iter()
            .find(|w| w.layer == layer)
            .map(|w| w.offset.net_vh)
    }

    /// Character opacities of `text`.
    pub fn text_opacity(&self, text: &str) -> Option<&[f64]> {
        self.texts
            .iter()
            .find(|w| w.text == text)
            .map(|w| w.opacity.as_slice())
    }

    pub(crate) fn clear(&mut self) {
        self.progress = 0.0;
        self.segments.clear();
        self.layers.clear();
        self.texts.clear();
    }
}
