pub mod sim;
mod subscription;

use serde::{Deserialize, Serialize};

pub use sim::SimHost;
pub use subscription::Subscription;

/// Window dimensions in density-independent points, in the order the host
/// reports them (so width > height in landscape).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Host platform family, as far as system chrome is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

/// Callback invoked with the new window size on every dimension change.
pub type SizeListener = Box<dyn Fn(WindowSize) + Send + Sync>;

/// Window geometry queries and change notification.
pub trait DisplayMetrics {
    /// Current window size in points. `None` while the host cannot report
    /// one yet.
    fn window_size(&self) -> Option<WindowSize>;

    /// Physical pixels per point. `None` when unknown.
    fn pixel_density(&self) -> Option<f64>;

    /// Register a listener for dimension changes. Dropping the returned
    /// handle (or calling [`Subscription::remove`]) stops delivery.
    fn subscribe(&self, listener: SizeListener) -> Subscription;
}

/// Device-class signals.
///
/// `None` means the host cannot answer; callers substitute their documented
/// fallbacks instead of treating it as an error.
pub trait DeviceProfile {
    fn is_tablet(&self) -> Option<bool>;
    fn has_notch(&self) -> Option<bool>;
    fn has_dynamic_island(&self) -> Option<bool>;
}

/// Platform identity and system chrome geometry.
pub trait SystemChrome {
    fn platform(&self) -> Platform;

    /// Reported status bar inset in points, where the platform exposes one.
    fn status_bar_inset(&self) -> Option<f64>;
}

/// Everything a metrics engine needs from a host, in one bound.
///
/// Blanket-implemented for any thread-safe type carrying the three
/// capability traits.
pub trait Host: DisplayMetrics + DeviceProfile + SystemChrome + Send + Sync {}

impl<T: DisplayMetrics + DeviceProfile + SystemChrome + Send + Sync> Host for T {}
