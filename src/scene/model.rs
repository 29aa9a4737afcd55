use crate::animation::ease::Ease;
use serde::{Deserialize, Serialize};

/// Device class the range table was authored for.
///
/// Detected by the host once, before the first setup; never re-evaluated mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProfile {
    /// Wheel-driven pointer devices; wheel input is smoothed.
    #[default]
    Desktop,
    /// Touch or low-power devices; native momentum scrolling is used as-is.
    Constrained,
}

/// Scroll container geometry and input smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollDef {
    /// Total container height as a multiple of the viewport height.
    pub container_viewports: f64,
    /// Wheel smoothing. `None` means native scrolling drives progress directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<SmoothingDef>,
}

/// Smoothing driver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingDef {
    /// Tween duration applied after each wheel event, in seconds.
    #[serde(default = "default_smoothing_duration")]
    pub duration_secs: f64,
    /// Scale applied to raw wheel deltas.
    #[serde(default = "default_wheel_multiplier")]
    pub wheel_multiplier: f64,
    /// Tween easing.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for SmoothingDef {
    fn default() -> Self {
        Self {
            duration_secs: default_smoothing_duration(),
            wheel_multiplier: default_wheel_multiplier(),
            ease: Ease::OutExpo,
        }
    }
}

/// One scrubbed video clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDef {
    /// Unique segment id; media handles are attached by this id.
    pub id: String,
    /// Media source locator, opaque to the engine.
    pub source: String,
    /// Progress range `[start, end]` over which the clip is scrubbed.
    pub range: [f64; 2],
    /// Seconds trimmed from the head of the clip.
    #[serde(default)]
    pub start_offset: f64,
    /// Seconds trimmed from the tail of the clip.
    #[serde(default)]
    pub end_offset: f64,
    /// Catch-up time of the written playback position, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrub_lag_secs: Option<f64>,
}

/// One slide transition of a layer, in viewport-height units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDef {
    /// Progress range `[start, end]` of the slide.
    pub range: [f64; 2],
    /// Offset held before the range.
    pub from_vh: f64,
    /// Offset held after the range.
    pub to_vh: f64,
}

/// Text revealed character by character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDef {
    /// Unique text id.
    pub id: String,
    /// Text content.
    pub text: String,
    /// Progress range `[start, end]` of the reveal.
    pub range: [f64; 2],
}

/// Stacked visual unit. Transitions are listed outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDef {
    /// Unique layer id.
    pub id: String,
    /// Segment shown inside this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    /// Nested slide transitions, outermost first.
    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
    /// Text blocks placed on this layer.
    #[serde(default)]
    pub texts: Vec<TextDef>,
}

/// JSON-facing range table for one device profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeTableDef {
    /// Profile this table targets.
    pub profile: DeviceProfile,
    /// Scroll container and input configuration.
    pub scroll: ScrollDef,
    /// Minimum dead scroll between consecutive transitions of one layer.
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,
    /// Scrubbed clips.
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
    /// Layers, topmost first.
    #[serde(default)]
    pub layers: Vec<LayerDef>,
}

pub(crate) fn default_smoothing_duration() -> f64 {
    1.2
}

pub(crate) fn default_wheel_multiplier() -> f64 {
    1.0
}

pub(crate) fn default_dead_zone() -> f64 {
    0.01
}
