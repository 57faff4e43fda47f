use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::extensions::PluginEvent;
use crate::render::ChartSurface;

use super::Dashboard;

/// Collapses bursts of resize notifications into one delayed resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeCoalescer {
    window: Duration,
    pending: Option<(Viewport, Instant)>,
}

impl ResizeCoalescer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records a request; a newer request replaces the pending one and
    /// restarts the quiet window.
    pub fn request(&mut self, viewport: Viewport, at: Instant) {
        self.pending = Some((viewport, at));
    }

    #[must_use]
    pub fn pending(&self) -> Option<Viewport> {
        self.pending.map(|(viewport, _)| viewport)
    }

    /// Takes the pending viewport once the quiet window has elapsed at `now`.
    pub fn take_ready(&mut self, now: Instant) -> Option<Viewport> {
        let (viewport, requested_at) = self.pending?;
        if now.saturating_duration_since(requested_at) < self.window {
            return None;
        }
        self.pending = None;
        Some(viewport)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<S: ChartSurface> Dashboard<S> {
    /// Resizes the existing chart in place. Does not re-project.
    pub fn resize_now(&mut self, viewport: Viewport) -> DashboardResult<()> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.resize.cancel();
        self.surface.resize(viewport)?;
        self.config.viewport = viewport;
        trace!(width = viewport.width, height = viewport.height, "resized chart surface");
        self.emit_plugin_event(PluginEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    /// Queues a resize notification to be applied by `flush_resize`.
    pub fn request_resize(&mut self, viewport: Viewport, at: Instant) {
        self.resize.request(viewport, at);
    }

    /// Applies the latest queued resize once its quiet window has elapsed.
    ///
    /// Returns `true` when a resize was applied.
    pub fn flush_resize(&mut self, now: Instant) -> DashboardResult<bool> {
        match self.resize.take_ready(now) {
            Some(viewport) => {
                self.resize_now(viewport)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn pending_resize(&self) -> Option<Viewport> {
        self.resize.pending()
    }
}
