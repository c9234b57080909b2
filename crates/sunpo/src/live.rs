//! Reactive facade over the engine.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use sunpo_device::{Subscription, WindowSize};

use crate::compose::OrientationLayout;
use crate::metrics::Metrics;
use crate::screen::{self, Screen};
use crate::tokens::{Radius, ResolvedTokens, Spacing, Typography};

/// Engine facade that follows the host's dimension notifications.
///
/// The facade holds the window size from the latest notification and
/// computes against it; every other device signal is still read fresh.
/// Dropping the facade unsubscribes from the host.
pub struct LiveMetrics {
    metrics: Metrics,
    size: Arc<RwLock<WindowSize>>,
    subscription: Subscription,
}

impl LiveMetrics {
    pub(crate) fn attach(parent: &Metrics) -> Self {
        let start = match parent.host().window_size() {
            Some(size) => size,
            None => {
                parent.record_dimension_fallback();
                debug!("host has no window size yet, starting from the fallback");
                screen::FALLBACK_WINDOW
            }
        };
        let size = Arc::new(RwLock::new(start));

        let held = Arc::clone(&size);
        let subscription = parent.host().subscribe(Box::new(move |next| {
            *held.write().unwrap_or_else(PoisonError::into_inner) = next;
            debug!(width = next.width, height = next.height, "live window update");
        }));

        Self {
            metrics: parent.pinned(Arc::clone(&size)),
            size,
            subscription,
        }
    }

    /// The engine pinned to the held size, with the full operation
    /// surface. Configuration and counters are shared with the parent.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The window size from the latest notification.
    pub fn window_size(&self) -> WindowSize {
        *self.size.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn screen(&self) -> Screen {
        self.metrics.screen()
    }

    pub fn spacing(&self) -> Spacing {
        self.metrics.spacing()
    }

    pub fn typography(&self) -> Typography {
        self.metrics.typography()
    }

    pub fn radius(&self) -> Radius {
        self.metrics.radius()
    }

    pub fn resolve_tokens(&self) -> ResolvedTokens {
        self.metrics.resolve_tokens()
    }

    pub fn orientation(&self) -> OrientationLayout {
        self.metrics.orientation_layout()
    }

    pub fn is_landscape(&self) -> bool {
        self.screen().is_landscape()
    }

    pub fn is_portrait(&self) -> bool {
        self.screen().is_portrait()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.screen().aspect_ratio()
    }

    /// Stop following notifications; the held size freezes. Calling this
    /// again is a no-op.
    pub fn unsubscribe(&mut self) {
        self.subscription.remove();
    }
}
