use serde::{Deserialize, Serialize};
use tracing::debug;

use sunpo_device::{Host, WindowSize};

use crate::config::MetricsConfig;

/// Window size assumed while the host cannot report one.
pub const FALLBACK_WINDOW: WindowSize = WindowSize {
    width: 375.0,
    height: 812.0,
};

/// Pixel density assumed while the host cannot report one.
pub const FALLBACK_DENSITY: f64 = 1.0;

/// Point-in-time reading of everything the scale engine needs to know
/// about the screen.
///
/// `width` and `height` keep the host's orientation-sensitive order;
/// [`device_width`](Screen::device_width) and
/// [`device_height`](Screen::device_height) are the orientation-stable
/// pair (shorter and longer side) the scaling formulas use. The two
/// conventions are deliberately separate and never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
    pub pixel_density: f64,
    pub is_tablet: bool,
    pub has_notch: bool,
    pub has_dynamic_island: bool,
}

impl Screen {
    /// Read the current screen state from the host.
    ///
    /// Fallbacks where the host abstains: a 375×812 window, density 1.0,
    /// notch and Dynamic Island absent. A missing tablet verdict falls
    /// back to comparing the normalized width against
    /// `config.tablet_breakpoint`.
    pub fn capture(host: &dyn Host, config: &MetricsConfig) -> Self {
        Self::from_parts(host, host.window_size(), config)
    }

    /// Like [`capture`](Screen::capture), but against an explicit window
    /// size. Used by callers that track sizes through change
    /// notifications; all other signals are still read from the host.
    pub fn at_size(host: &dyn Host, size: WindowSize, config: &MetricsConfig) -> Self {
        Self::from_parts(host, Some(size), config)
    }

    fn from_parts(host: &dyn Host, size: Option<WindowSize>, config: &MetricsConfig) -> Self {
        let size = size.unwrap_or_else(|| {
            debug!("host reported no window size, using fallback");
            FALLBACK_WINDOW
        });

        let device_width = size.width.min(size.height);
        let is_tablet = host
            .is_tablet()
            .unwrap_or(device_width >= config.tablet_breakpoint);

        Self {
            width: size.width,
            height: size.height,
            pixel_density: host.pixel_density().unwrap_or(FALLBACK_DENSITY),
            is_tablet,
            has_notch: host.has_notch().unwrap_or(false),
            has_dynamic_island: host.has_dynamic_island().unwrap_or(false),
        }
    }

    /// Shorter side, regardless of orientation.
    pub fn device_width(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Longer side, regardless of orientation.
    pub fn device_height(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Whether the window is currently wider than tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Whether the window is currently taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Width over height of the raw window.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
