use std::sync::atomic::{AtomicU64, Ordering};

// Shared by every scheduler so a token never matches a loop it was not issued by.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one registration of the per-frame callback.
///
/// The host passes it back on every animation frame. Tokens from a cancelled or restarted
/// loop are rejected, so frames already queued at teardown become no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken {
    generation: u64,
}

/// One accepted frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Host clock at this frame, in seconds.
    pub now_secs: f64,
    /// Seconds since the previously accepted frame (0 for the first frame).
    pub dt_secs: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoopState {
    Idle,
    Running { generation: u64, last: Option<f64> },
    Cancelled,
}

/// Owned per-frame loop with explicit start and cancel.
///
/// Each timeline owns its own scheduler, so several timelines (or tests) never share ticking
/// state.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    state: LoopState,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
        }
    }

    /// Start (or restart) the loop. Any previously issued token is invalidated.
    ///
    /// Generations are unique across schedulers, so a token from another scheduler is rejected.
    pub fn start(&mut self) -> FrameToken {
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.state = LoopState::Running {
            generation,
            last: None,
        };
        FrameToken { generation }
    }

    /// Cancel the loop. Returns `true` when a running loop was stopped. Idempotent.
    pub fn cancel(&mut self) -> bool {
        let was_running = matches!(self.state, LoopState::Running { .. });
        self.state = LoopState::Cancelled;
        was_running
    }

    /// Return `true` while a loop is running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Return `true` once the loop has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, LoopState::Cancelled)
    }

    /// Admit a frame callback.
    ///
    /// Frames carrying a stale token, arriving after cancellation, or stamped earlier than the
    /// last accepted frame are dropped.
    pub fn accept(&mut self, token: FrameToken, now_secs: f64) -> Option<FrameTick> {
        let LoopState::Running { generation, last } = &mut self.state else {
            tracing::trace!("frame dropped: loop not running");
            return None;
        };
        if token.generation != *generation {
            tracing::trace!("frame dropped: stale token");
            return None;
        }
        if !now_secs.is_finite() {
            return None;
        }
        let dt_secs = match *last {
            Some(prev) if now_secs < prev => {
                tracing::trace!(now_secs, prev, "frame dropped: out of order");
                return None;
            }
            Some(prev) => now_secs - prev,
            None => 0.0,
        };
        *last = Some(now_secs);
        Some(FrameTick { now_secs, dt_secs })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scheduler.rs"]
mod tests;
