//! Scrollreel is a scroll-driven timeline engine.
//!
//! Page scroll progress is the single clock. From it the engine derives, once per rendering
//! tick, the playback position of trimmed video segments, nested vertical offsets of the layers
//! that carry them, and per-character opacities of text blocks.
//!
//! - Load and validate a [`RangeTable`] (or take a built-in [`DeviceProfile`] table)
//! - Evaluate it purely through [`Timeline`], or
//! - Drive it live with a [`TimelineOrchestrator`] that owns the media handles and frame loop
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod eval;
pub(crate) mod media;
pub(crate) mod output;
pub(crate) mod scene;
pub(crate) mod schema;
pub(crate) mod session;
pub(crate) mod signal;

pub use crate::foundation::core::{Progress, Range};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::eval::compositor::{LayerCompositor, LayerOffset, Transition};
pub use crate::eval::reveal::{CharacterRevealSequencer, Glyph, NBSP};
pub use crate::eval::scrubber::SegmentScrubber;
pub use crate::eval::timeline::{LayerTrack, SegmentTrack, TextTrack, Timeline};
pub use crate::media::handle::{MediaHandle, MemoryMedia};
pub use crate::output::sink::{RecordingSink, WriteSink};
pub use crate::output::writes::{FrameWrites, LayerWrite, SegmentWrite, TextWrite};
pub use crate::scene::model::{
    DeviceProfile, LayerDef, RangeTableDef, ScrollDef, SegmentDef, SmoothingDef, TextDef,
    TransitionDef,
};
pub use crate::scene::table::RangeTable;
pub use crate::session::orchestrator::{
    MountReport, Phase, ReadySubscription, SegmentStatus, TimelineOrchestrator,
};
pub use crate::session::scheduler::{FrameScheduler, FrameTick, FrameToken};
pub use crate::signal::smooth::SmoothScroll;
pub use crate::signal::source::{HostCapabilities, ScrollGeometry, ScrollSignalSource};
