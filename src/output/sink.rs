use crate::foundation::error::ReelResult;
use crate::output::writes::FrameWrites;

/// Render boundary that applies each tick's writes to visual elements.
///
/// Ordering contract: `apply` is called once per accepted frame, in frame order. Nothing is
/// applied after the timeline is torn down.
pub trait WriteSink {
    /// Apply one tick's writes.
    fn apply(&mut self, writes: &FrameWrites) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<FrameWrites>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured writes in application order.
    pub fn frames(&self) -> &[FrameWrites] {
        &self.frames
    }

    /// Most recent writes, if any.
    pub fn last(&self) -> Option<&FrameWrites> {
        self.frames.last()
    }
}

impl WriteSink for RecordingSink {
    fn apply(&mut self, writes: &FrameWrites) -> ReelResult<()> {
        self.frames.push(writes.clone());
        Ok(())
    }
}
