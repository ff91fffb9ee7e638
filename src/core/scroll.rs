//! # Scroll Monitor
//!
//! Decides when the viewport is close enough to the end of the list to
//! ask for the next page. Scroll events only arm the debouncer; the
//! near-bottom check runs once the burst has gone quiet, against whatever
//! the list measured on its last render.

use std::time::{Duration, Instant};

use super::debounce::Debouncer;

/// Geometry of the scrollable list, in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// First visible content row.
    pub offset: u32,
    pub viewport_height: u16,
    pub content_height: u32,
}

/// `content_height - threshold < offset + viewport_height`
pub fn is_near_bottom(metrics: ScrollMetrics, threshold: u16) -> bool {
    let bottom_edge = metrics
        .offset
        .saturating_add(u32::from(metrics.viewport_height));
    metrics.content_height.saturating_sub(u32::from(threshold)) < bottom_edge
}

#[derive(Debug, Clone)]
pub struct ScrollMonitor {
    debouncer: Debouncer,
    threshold: u16,
}

impl ScrollMonitor {
    pub fn new(delay: Duration, threshold: u16) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            threshold,
        }
    }

    pub fn on_scroll(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Poll timeout hint for the event loop.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Runs the deferred evaluation if due. `true` means "load the next page".
    pub fn poll(&mut self, now: Instant, metrics: ScrollMetrics) -> bool {
        self.debouncer.fire(now) && is_near_bottom(metrics, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
