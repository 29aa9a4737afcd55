//! Built-in range tables for the four-sequence showcase.
//!
//! Both profiles share layers, transitions and text ranges; they differ in segment ranges,
//! trims, scrub lag, container height and wheel smoothing.

use crate::scene::model::{
    DeviceProfile, LayerDef, RangeTableDef, ScrollDef, SegmentDef, SmoothingDef, TextDef,
    TransitionDef,
};

const OFF_BELOW_VH: f64 = 100.0;
const OFF_ABOVE_VH: f64 = -100.0;

const HANDOFF_1: [f64; 2] = [0.19, 0.23];
const HANDOFF_2: [f64; 2] = [0.44, 0.48];
const HANDOFF_3: [f64; 2] = [0.70, 0.74];

pub(crate) fn table_for(profile: DeviceProfile) -> RangeTableDef {
    match profile {
        DeviceProfile::Desktop => desktop(),
        DeviceProfile::Constrained => constrained(),
    }
}

fn desktop() -> RangeTableDef {
    RangeTableDef {
        profile: DeviceProfile::Desktop,
        scroll: ScrollDef {
            container_viewports: 40.0,
            smoothing: Some(SmoothingDef::default()),
        },
        dead_zone: 0.01,
        segments: vec![
            segment("seq1", "/rolex11.mp4", [0.0, 0.18], 0.5, 0.5, Some(0.5)),
            segment("seq2", "/rolex22.mp4", [0.23, 0.43], 0.0, 0.0, Some(0.5)),
            segment("seq3", "/rolex33.mp4", [0.48, 0.68], 0.0, 0.0, Some(0.5)),
            segment("seq4", "/rolex44.mp4", [0.74, 1.0], 0.0, 0.0, Some(0.5)),
        ],
        layers: layers(),
    }
}

fn constrained() -> RangeTableDef {
    RangeTableDef {
        profile: DeviceProfile::Constrained,
        scroll: ScrollDef {
            container_viewports: 30.0,
            smoothing: None,
        },
        dead_zone: 0.01,
        segments: vec![
            segment("seq1", "/mobilerolex1.mp4", [0.0, 0.24], 0.5, 0.5, None),
            segment("seq2", "/mobilerolex2.mp4", [0.23, 0.57], 0.0, 0.0, None),
            segment("seq3", "/mobilerolex3.mp4", [0.48, 0.90], 0.0, 0.0, None),
            segment("seq4", "/mobilerolex4.mp4", [0.74, 1.0], 0.0, 0.0, None),
        ],
        layers: layers(),
    }
}

fn layers() -> Vec<LayerDef> {
    vec![
        LayerDef {
            id: "layer1".to_owned(),
            segment: Some("seq1".to_owned()),
            transitions: vec![slide(HANDOFF_1, 0.0, OFF_ABOVE_VH)],
            texts: vec![
                text("seq1.title", "Submariner", [0.01, 0.05]),
                text(
                    "seq1.intro",
                    "A Luxury Swiss dive watch introduced in 1953, known for its 300m water resistance, rotating bezel, and super durable design.",
                    [0.05, 0.12],
                ),
                text(
                    "seq1.detail",
                    "A refined mechanical timepiece crafted with meticulous detail, featuring a sleek silhouette and enduring design language.",
                    [0.12, 0.18],
                ),
            ],
        },
        LayerDef {
            id: "layer2".to_owned(),
            segment: Some("seq2".to_owned()),
            transitions: vec![
                slide(HANDOFF_1, OFF_BELOW_VH, 0.0),
                slide(HANDOFF_2, 0.0, OFF_ABOVE_VH),
            ],
            texts: vec![
                text("seq2.title", "Born in 1953", [0.24, 0.28]),
                text(
                    "seq2.story",
                    "From ocean depths to black-tie evenings, it became the symbol of effortless power and refined adventure.",
                    [0.28, 0.35],
                ),
                text(
                    "seq2.legacy",
                    "Decades later, the Submariner still whispers the same promise: timeless design, built to conquer eternity.",
                    [0.35, 0.43],
                ),
            ],
        },
        LayerDef {
            id: "layer3".to_owned(),
            segment: Some("seq3".to_owned()),
            transitions: vec![
                slide(HANDOFF_2, OFF_BELOW_VH, 0.0),
                slide(HANDOFF_3, 0.0, OFF_ABOVE_VH),
            ],
            texts: vec![
                text("seq3.title", "Premium Build", [0.49, 0.53]),
                text(
                    "seq3.tagline",
                    "Engineered like armor, finished like art.",
                    [0.53, 0.68],
                ),
            ],
        },
        LayerDef {
            id: "layer4".to_owned(),
            segment: Some("seq4".to_owned()),
            transitions: vec![slide(HANDOFF_3, OFF_BELOW_VH, 0.0)],
            texts: vec![
                text("seq4.title", "Contact", [0.74, 0.79]),
                text("seq4.email", "contact@example.com", [0.79, 1.0]),
            ],
        },
    ]
}

fn segment(
    id: &str,
    source: &str,
    range: [f64; 2],
    start_offset: f64,
    end_offset: f64,
    scrub_lag_secs: Option<f64>,
) -> SegmentDef {
    SegmentDef {
        id: id.to_owned(),
        source: source.to_owned(),
        range,
        start_offset,
        end_offset,
        scrub_lag_secs,
    }
}

fn slide(range: [f64; 2], from_vh: f64, to_vh: f64) -> TransitionDef {
    TransitionDef {
        range,
        from_vh,
        to_vh,
    }
}

fn text(id: &str, text: &str, range: [f64; 2]) -> TextDef {
    TextDef {
        id: id.to_owned(),
        text: text.to_owned(),
        range,
    }
}
