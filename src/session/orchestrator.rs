use crate::eval::timeline::Timeline;
use crate::foundation::core::Progress;
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::approach;
use crate::media::handle::MediaHandle;
use crate::output::sink::WriteSink;
use crate::output::writes::{FrameWrites, SegmentWrite};
use crate::scene::table::RangeTable;
use crate::session::scheduler::{FrameScheduler, FrameToken};
use crate::signal::source::{HostCapabilities, ScrollSignalSource};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

// Shared by every orchestrator so a subscription is only honored by the one that issued it.
static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// Lifecycle phase of a [`TimelineOrchestrator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed; no media attached yet.
    Uninitialized,
    /// Mounted; at least one attached segment still waits for its metadata.
    WaitingForMetadata,
    /// Mounted; every attached segment is configured.
    Active,
    /// Torn down; nothing fires any more.
    TornDown,
}

/// Setup state of one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentStatus {
    /// No media handle attached (or its subscription was released at teardown).
    Unbound,
    /// Handle attached, waiting for the one-shot readiness notification.
    Waiting,
    /// Configured with a known duration.
    Ready {
        /// Clip duration in seconds.
        duration: f64,
    },
}

/// One-shot readiness subscription for a segment's media handle.
///
/// The host keeps it and passes it to [`TimelineOrchestrator::metadata_ready`] when the handle
/// reports loaded metadata. Ids are unique per process, so another orchestrator ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReadySubscription {
    segment: usize,
    id: u64,
}

impl ReadySubscription {
    /// Index of the subscribed segment in table order.
    pub fn segment_index(&self) -> usize {
        self.segment
    }
}

/// Outcome of [`TimelineOrchestrator::mount`].
#[derive(Clone, Debug, PartialEq)]
pub struct MountReport {
    /// Token to pass back on every animation frame.
    pub frame: FrameToken,
    /// Segments waiting for metadata, with their subscriptions.
    pub subscriptions: Vec<(String, ReadySubscription)>,
    /// Segments whose handles were already ready and got configured immediately.
    pub configured: Vec<String>,
    /// Segments without a handle; they stay unconfigured.
    pub missing: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SlotState {
    Unbound,
    Waiting { subscription: u64 },
    Ready { duration: f64 },
}

#[derive(Debug)]
struct SegmentSlot<H> {
    handle: Option<H>,
    state: SlotState,
    written: Option<f64>,
}

/// Single integration point between scroll input, the compiled timeline and the media handles.
///
/// Lifecycle: `Uninitialized -> WaitingForMetadata -> Active -> TornDown`. Frames are processed
/// from mount until teardown; segments that are not configured yet are simply skipped, so one
/// clip that never loads does not hold back the rest of the timeline.
#[derive(Debug)]
pub struct TimelineOrchestrator<H> {
    timeline: Timeline,
    signal: ScrollSignalSource,
    scheduler: FrameScheduler,
    slots: Vec<SegmentSlot<H>>,
    phase: Phase,
    writes: FrameWrites,
}

impl<H: MediaHandle> TimelineOrchestrator<H> {
    /// Validate and compile `table`, and build its scroll signal source.
    pub fn new(
        table: &RangeTable,
        caps: HostCapabilities,
        viewport_height_px: f64,
    ) -> ReelResult<Self> {
        let timeline = Timeline::new(table)?;
        let signal = ScrollSignalSource::new(timeline.scroll(), caps, viewport_height_px)?;
        Ok(Self::from_parts(timeline, signal))
    }

    /// Assemble from an already compiled timeline and signal source.
    pub fn from_parts(timeline: Timeline, signal: ScrollSignalSource) -> Self {
        let slots = timeline
            .segments()
            .iter()
            .map(|_| SegmentSlot {
                handle: None,
                state: SlotState::Unbound,
                written: None,
            })
            .collect();
        Self {
            timeline,
            signal,
            scheduler: FrameScheduler::new(),
            slots,
            phase: Phase::Uninitialized,
            writes: FrameWrites::default(),
        }
    }

    /// Attach media handles by segment id and start the frame loop.
    ///
    /// Each handle is checked for readiness first and configured on the spot when its duration
    /// is already known; only the rest get a readiness subscription. Absent handles are
    /// tolerated and leave their segment unconfigured.
    #[tracing::instrument(skip_all, fields(profile = ?self.timeline.profile()))]
    pub fn mount(
        &mut self,
        handles: impl IntoIterator<Item = (String, H)>,
    ) -> ReelResult<MountReport> {
        if self.phase != Phase::Uninitialized {
            return Err(ReelError::lifecycle(format!(
                "mount requires an uninitialized timeline (phase is {:?})",
                self.phase
            )));
        }

        let mut handles: BTreeMap<String, H> = handles.into_iter().collect();
        let mut subscriptions = Vec::new();
        let mut configured = Vec::new();
        let mut missing = Vec::new();

        for i in 0..self.slots.len() {
            let id = self.timeline.segments()[i].id.clone();
            let Some(handle) = handles.remove(&id) else {
                tracing::warn!(segment = %id, "no media handle; segment left unconfigured");
                missing.push(id);
                continue;
            };
            let ready = handle.ready_duration();
            self.slots[i].handle = Some(handle);
            match ready {
                Some(duration) => {
                    self.configure(i, duration);
                    configured.push(id);
                }
                None => {
                    let sub = ReadySubscription {
                        segment: i,
                        id: NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed),
                    };
                    self.slots[i].state = SlotState::Waiting {
                        subscription: sub.id,
                    };
                    tracing::debug!(segment = %id, "waiting for metadata");
                    subscriptions.push((id, sub));
                }
            }
        }
        for id in handles.keys() {
            tracing::warn!(handle = %id, "media handle does not match any segment; ignored");
        }

        let frame = self.scheduler.start();
        self.phase = if subscriptions.is_empty() {
            Phase::Active
        } else {
            Phase::WaitingForMetadata
        };
        tracing::debug!(phase = ?self.phase, "timeline mounted");

        Ok(MountReport {
            frame,
            subscriptions,
            configured,
            missing,
        })
    }

    /// Deliver a readiness notification. Returns `true` when the segment got configured.
    ///
    /// Notifications for released, already consumed or foreign subscriptions are ignored, as
    /// is everything after teardown. A notification that arrives while the handle still has
    /// no usable duration keeps the segment waiting on the same subscription.
    pub fn metadata_ready(&mut self, sub: ReadySubscription) -> bool {
        if self.phase == Phase::TornDown {
            tracing::trace!("readiness ignored after teardown");
            return false;
        }
        let Some(slot) = self.slots.get(sub.segment) else {
            return false;
        };
        if slot.state != (SlotState::Waiting { subscription: sub.id }) {
            tracing::trace!(segment = sub.segment, "stale readiness notification");
            return false;
        }
        let Some(duration) = slot.handle.as_ref().and_then(|h| h.ready_duration()) else {
            tracing::warn!(
                segment = %self.timeline.segments()[sub.segment].id,
                "readiness fired without a usable duration; still waiting"
            );
            return false;
        };
        self.configure(sub.segment, duration);
        if self.phase == Phase::WaitingForMetadata
            && !self
                .slots
                .iter()
                .any(|s| matches!(s.state, SlotState::Waiting { .. }))
        {
            self.phase = Phase::Active;
            tracing::debug!("all attached segments configured");
        }
        true
    }

    /// Feed a wheel delta in pixels.
    pub fn on_wheel(&mut self, delta_px: f64, now_secs: f64) {
        self.signal.on_wheel(delta_px, now_secs);
    }

    /// Feed a native scroll offset in pixels.
    pub fn on_native_scroll(&mut self, offset_px: f64) {
        self.signal.on_native_scroll(offset_px);
    }

    /// Propagate a viewport resize to the scroll geometry.
    pub fn resize(&mut self, viewport_height_px: f64) -> ReelResult<()> {
        self.signal.set_viewport_height(viewport_height_px)
    }

    /// Run one animation frame and return the writes it produced.
    ///
    /// Returns `None` when the frame is dropped: before mount, after teardown, with a stale
    /// token, or stamped earlier than the previous frame.
    pub fn frame(&mut self, token: FrameToken, now_secs: f64) -> Option<&FrameWrites> {
        if matches!(self.phase, Phase::Uninitialized | Phase::TornDown) {
            return None;
        }
        let tick = self.scheduler.accept(token, now_secs)?;
        let progress = self.signal.tick(tick.now_secs);

        self.writes.clear();
        self.writes.progress = progress.get();
        for (track, slot) in self.timeline.segments().iter().zip(self.slots.iter_mut()) {
            let SlotState::Ready { duration } = slot.state else {
                continue;
            };
            let Some(handle) = slot.handle.as_mut() else {
                continue;
            };
            let target = track.scrubber.playback_time(progress, duration);
            let (first, last) = track.scrubber.window(duration);
            let time = match (track.scrub_lag_secs, slot.written) {
                (Some(lag), Some(prev)) => approach(prev, target, tick.dt_secs, lag),
                _ => target,
            }
            .clamp(first, last);
            if slot.written != Some(time) {
                handle.set_current_time(time);
                slot.written = Some(time);
            }
            self.writes.segments.push(SegmentWrite {
                segment: track.id.clone(),
                time_secs: time,
            });
        }
        self.timeline
            .evaluate_layers_and_texts(progress, &mut self.writes);
        Some(&self.writes)
    }

    /// Run one animation frame and hand its writes to `sink`. Returns `true` when applied.
    pub fn frame_into(
        &mut self,
        token: FrameToken,
        now_secs: f64,
        sink: &mut dyn WriteSink,
    ) -> ReelResult<bool> {
        match self.frame(token, now_secs) {
            Some(writes) => {
                sink.apply(writes)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn configure(&mut self, index: usize, duration: f64) {
        let track = &self.timeline.segments()[index];
        if !track.scrubber.fits(duration) {
            tracing::warn!(
                segment = %track.id,
                duration,
                "trims exceed clip duration; segment holds its first frame"
            );
        }
        let first = track.scrubber.window(duration).0;
        let slot = &mut self.slots[index];
        if let Some(handle) = slot.handle.as_mut() {
            handle.set_current_time(first);
        }
        slot.written = Some(first);
        slot.state = SlotState::Ready { duration };
        tracing::debug!(segment = %track.id, duration, "segment configured");
    }
}

impl<H> TimelineOrchestrator<H> {
    /// Release the frame loop, every pending readiness subscription and the smoothing driver.
    ///
    /// Idempotent. Afterwards queued frames and readiness notifications are no-ops.
    #[tracing::instrument(skip_all)]
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.scheduler.cancel();
        for slot in &mut self.slots {
            if matches!(slot.state, SlotState::Waiting { .. }) {
                slot.state = SlotState::Unbound;
            }
        }
        self.signal.destroy();
        self.phase = Phase::TornDown;
        tracing::debug!("timeline torn down");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Compiled timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Scroll signal source.
    pub fn signal(&self) -> &ScrollSignalSource {
        &self.signal
    }

    /// Progress of the last accepted frame.
    pub fn progress(&self) -> Progress {
        self.signal.progress()
    }

    /// Writes of the last accepted frame.
    pub fn last_writes(&self) -> &FrameWrites {
        &self.writes
    }

    /// Setup state of segment `id`.
    pub fn segment_status(&self, id: &str) -> Option<SegmentStatus> {
        let i = self.timeline.segment_index(id)?;
        Some(match self.slots[i].state {
            SlotState::Unbound => SegmentStatus::Unbound,
            SlotState::Waiting { .. } => SegmentStatus::Waiting,
            SlotState::Ready { duration } => SegmentStatus::Ready { duration },
        })
    }

    /// Borrow the media handle of segment `id`.
    pub fn handle(&self, id: &str) -> Option<&H> {
        let i = self.timeline.segment_index(id)?;
        self.slots[i].handle.as_ref()
    }

    /// Mutably borrow the media handle of segment `id`, e.g. to deliver loaded metadata.
    pub fn handle_mut(&mut self, id: &str) -> Option<&mut H> {
        let i = self.timeline.segment_index(id)?;
        self.slots[i].handle.as_mut()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
