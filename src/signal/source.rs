use crate::foundation::core::Progress;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::ScrollDef;
use crate::signal::smooth::SmoothScroll;

/// What the host environment can provide to the signal source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host can deliver a per-frame callback with a monotonic clock.
    pub frame_clock: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self { frame_clock: true }
    }
}

/// Size of the scroll container relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    /// Viewport height in pixels.
    pub viewport_height_px: f64,
    /// Container height as a multiple of the viewport height.
    pub container_viewports: f64,
}

impl ScrollGeometry {
    /// Validated geometry.
    pub fn new(viewport_height_px: f64, container_viewports: f64) -> ReelResult<Self> {
        if !viewport_height_px.is_finite() || viewport_height_px <= 0.0 {
            return Err(ReelError::config(
                "viewport_height_px must be finite and > 0",
            ));
        }
        if !container_viewports.is_finite() || container_viewports <= 1.0 {
            return Err(ReelError::config(
                "container_viewports must be finite and > 1",
            ));
        }
        Ok(Self {
            viewport_height_px,
            container_viewports,
        })
    }

    /// Scrollable distance in pixels: container height minus one viewport.
    pub fn limit(&self) -> f64 {
        (self.container_viewports - 1.0) * self.viewport_height_px
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Driver {
    Smooth(SmoothScroll),
    PassThrough { position: f64 },
}

/// Converts raw scroll input into one progress value per rendering tick.
///
/// Desktop tables carry a smoothing configuration and get a [`SmoothScroll`] driver; the
/// constrained profile, or a host without a frame clock, gets an unsmoothed pass-through.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSignalSource {
    geometry: ScrollGeometry,
    driver: Driver,
    progress: Progress,
    destroyed: bool,
}

impl ScrollSignalSource {
    /// Build the source for `scroll`, falling back to pass-through when smoothing is unavailable.
    pub fn new(
        scroll: &ScrollDef,
        caps: HostCapabilities,
        viewport_height_px: f64,
    ) -> ReelResult<Self> {
        let geometry = ScrollGeometry::new(viewport_height_px, scroll.container_viewports)?;
        let driver = match &scroll.smoothing {
            None => Driver::PassThrough { position: 0.0 },
            Some(_) if !caps.frame_clock => {
                tracing::debug!("no frame clock; wheel smoothing disabled");
                Driver::PassThrough { position: 0.0 }
            }
            Some(def) => match SmoothScroll::new(def, geometry.limit()) {
                Ok(sm) => Driver::Smooth(sm),
                Err(e) => {
                    tracing::debug!(error = %e, "smoothing driver unavailable; using pass-through");
                    Driver::PassThrough { position: 0.0 }
                }
            },
        };
        Ok(Self {
            geometry,
            driver,
            progress: Progress::START,
            destroyed: false,
        })
    }

    /// Unsmoothed source over `geometry`.
    pub fn pass_through(geometry: ScrollGeometry) -> Self {
        Self {
            geometry,
            driver: Driver::PassThrough { position: 0.0 },
            progress: Progress::START,
            destroyed: false,
        }
    }

    /// Return `true` when wheel input is smoothed.
    pub fn is_smoothed(&self) -> bool {
        matches!(self.driver, Driver::Smooth(_))
    }

    /// Return `true` after [`ScrollSignalSource::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Container geometry.
    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    /// Progress computed at the last tick.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Current scroll position in pixels.
    pub fn position_px(&self) -> f64 {
        match &self.driver {
            Driver::Smooth(sm) => sm.position(),
            Driver::PassThrough { position } => *position,
        }
    }

    /// Feed a wheel delta in pixels.
    pub fn on_wheel(&mut self, delta_px: f64, now_secs: f64) {
        if self.destroyed || !delta_px.is_finite() {
            return;
        }
        let limit = self.geometry.limit();
        match &mut self.driver {
            Driver::Smooth(sm) => sm.on_wheel(delta_px, now_secs),
            Driver::PassThrough { position } => {
                *position = (*position + delta_px).clamp(0.0, limit);
            }
        }
    }

    /// Feed a native scroll offset in pixels (touch momentum, scrollbar, keyboard).
    pub fn on_native_scroll(&mut self, offset_px: f64) {
        if self.destroyed || !offset_px.is_finite() {
            return;
        }
        let limit = self.geometry.limit();
        match &mut self.driver {
            Driver::Smooth(sm) => sm.on_native_scroll(offset_px),
            Driver::PassThrough { position } => *position = offset_px.clamp(0.0, limit),
        }
    }

    /// Update the viewport height (e.g. after a resize); the container keeps its multiple.
    pub fn set_viewport_height(&mut self, viewport_height_px: f64) -> ReelResult<()> {
        let geometry = ScrollGeometry::new(viewport_height_px, self.geometry.container_viewports)?;
        let old_limit = self.geometry.limit();
        self.geometry = geometry;
        let limit = geometry.limit();
        match &mut self.driver {
            Driver::Smooth(sm) => sm.set_limit(limit),
            Driver::PassThrough { position } => {
                // Keep the same relative position in the resized region.
                *position = if old_limit > 0.0 {
                    (*position / old_limit * limit).clamp(0.0, limit)
                } else {
                    0.0
                };
            }
        }
        Ok(())
    }

    /// Advance the driver to `now_secs` and recompute progress.
    pub fn tick(&mut self, now_secs: f64) -> Progress {
        if self.destroyed {
            return self.progress;
        }
        let pos = match &mut self.driver {
            Driver::Smooth(sm) => sm.tick(now_secs),
            Driver::PassThrough { position } => *position,
        };
        self.progress = Progress::from_scroll(pos, self.geometry.limit());
        self.progress
    }

    /// Release the driver. Further input and ticks are ignored. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Driver::Smooth(sm) = &self.driver {
            // Drop any running tween so the last position is final.
            let pos = sm.position();
            self.driver = Driver::PassThrough { position: pos };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/source.rs"]
mod tests;
