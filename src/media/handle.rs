use crate::foundation::math::is_usable_duration;

/// Boundary contract of a media element the engine scrubs.
///
/// The engine only reads the duration and writes the playback position; decoding and delivery
/// are the host's concern.
pub trait MediaHandle {
    /// Natural duration in seconds, `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seek to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Usable duration: known, finite and positive.
    fn ready_duration(&self) -> Option<f64> {
        self.duration().filter(|d| is_usable_duration(*d))
    }

    /// Return `true` once a usable duration is known.
    fn is_ready(&self) -> bool {
        self.ready_duration().is_some()
    }
}

/// In-memory media handle for tests, simulations and headless hosts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryMedia {
    duration: Option<f64>,
    current_time: f64,
    seeks: u64,
}

impl MemoryMedia {
    /// Handle whose metadata has not loaded yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Handle whose metadata is already available.
    pub fn loaded(duration_secs: f64) -> Self {
        Self {
            duration: Some(duration_secs),
            ..Self::default()
        }
    }

    /// Simulate the metadata arriving.
    pub fn load_metadata(&mut self, duration_secs: f64) {
        self.duration = Some(duration_secs);
    }

    /// Number of seeks performed on this handle.
    pub fn seeks(&self) -> u64 {
        self.seeks
    }
}

impl MediaHandle for MemoryMedia {
    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
        self.seeks += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/handle.rs"]
mod tests;
