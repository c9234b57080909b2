//! Named design token scales.
//!
//! The views hold a handle to the engine rather than precomputed values,
//! so every accessor reflects the window size and configuration at the
//! moment of the call.

use serde::Serialize;

use crate::metrics::Metrics;
use crate::scale;

/// Radius large enough to render any element as a circle or pill.
const FULL_RADIUS: f64 = 9999.0;

/// Spacing steps derived from the configured unit, width-scaled.
#[derive(Clone)]
pub struct Spacing {
    metrics: Metrics,
}

impl Spacing {
    pub(crate) fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    pub fn xs(&self) -> f64 {
        self.step(1.0)
    }

    pub fn sm(&self) -> f64 {
        self.step(2.0)
    }

    pub fn md(&self) -> f64 {
        self.step(4.0)
    }

    pub fn lg(&self) -> f64 {
        self.step(6.0)
    }

    pub fn xl(&self) -> f64 {
        self.step(8.0)
    }

    pub fn xxl(&self) -> f64 {
        self.step(12.0)
    }

    /// An off-scale step: `multiplier` times the unit, width-scaled.
    pub fn custom(&self, multiplier: f64) -> f64 {
        self.step(multiplier)
    }

    /// A raw design size, width-scaled without the unit.
    pub fn px(&self, size: f64) -> f64 {
        self.metrics.scale_width(size)
    }

    /// A percentage of the normalized width.
    pub fn percent(&self, percent: f64) -> f64 {
        self.metrics.width_percent(percent)
    }

    fn step(&self, multiplier: f64) -> f64 {
        self.metrics
            .scale_width(self.metrics.config().spacing_base * multiplier)
    }
}

/// Type scale, font-scaled (tablet bump plus the full width ratio).
#[derive(Clone)]
pub struct Typography {
    metrics: Metrics,
}

impl Typography {
    pub(crate) fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    pub fn xs(&self) -> f64 {
        self.metrics.scale_font(12.0)
    }

    pub fn sm(&self) -> f64 {
        self.metrics.scale_font(14.0)
    }

    pub fn base(&self) -> f64 {
        self.metrics.scale_font(16.0)
    }

    pub fn lg(&self) -> f64 {
        self.metrics.scale_font(18.0)
    }

    pub fn xl(&self) -> f64 {
        self.metrics.scale_font(20.0)
    }

    pub fn xxl(&self) -> f64 {
        self.metrics.scale_font(24.0)
    }

    pub fn xxxl(&self) -> f64 {
        self.metrics.scale_font(32.0)
    }

    /// An off-scale font size.
    pub fn custom(&self, size: f64) -> f64 {
        self.metrics.scale_font(size)
    }
}

/// Border radius steps, width-scaled. `full` is a fixed sentinel that
/// never scales.
#[derive(Clone)]
pub struct Radius {
    metrics: Metrics,
}

impl Radius {
    pub(crate) fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    pub fn none(&self) -> f64 {
        0.0
    }

    pub fn sm(&self) -> f64 {
        self.metrics.scale_width(4.0)
    }

    pub fn base(&self) -> f64 {
        self.metrics.scale_width(8.0)
    }

    pub fn md(&self) -> f64 {
        self.metrics.scale_width(12.0)
    }

    pub fn lg(&self) -> f64 {
        self.metrics.scale_width(16.0)
    }

    pub fn xl(&self) -> f64 {
        self.metrics.scale_width(24.0)
    }

    pub fn full(&self) -> f64 {
        FULL_RADIUS
    }

    /// An off-scale radius, width-scaled.
    pub fn custom(&self, radius: f64) -> f64 {
        self.metrics.scale_width(radius)
    }
}

/// Every named token computed against one screen reading, for logging
/// and devtools output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedTokens {
    pub spacing: ResolvedSpacing,
    pub typography: ResolvedTypography,
    pub radius: ResolvedRadius,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedSpacing {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedTypography {
    pub xs: f64,
    pub sm: f64,
    pub base: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
    pub xxxl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedRadius {
    pub none: f64,
    pub sm: f64,
    pub base: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub full: f64,
}

impl ResolvedTokens {
    /// Resolve all scales against a single capture, so one snapshot is
    /// internally consistent even while the window is being resized.
    pub(crate) fn resolve(metrics: &Metrics) -> Self {
        let screen = metrics.screen();
        let config = metrics.config();
        let sw = |size: f64| scale::scale_width(&screen, &config, size);
        let sf = |size: f64| scale::scale_font(&screen, &config, size);
        let unit = config.spacing_base;

        Self {
            spacing: ResolvedSpacing {
                xs: sw(unit),
                sm: sw(unit * 2.0),
                md: sw(unit * 4.0),
                lg: sw(unit * 6.0),
                xl: sw(unit * 8.0),
                xxl: sw(unit * 12.0),
            },
            typography: ResolvedTypography {
                xs: sf(12.0),
                sm: sf(14.0),
                base: sf(16.0),
                lg: sf(18.0),
                xl: sf(20.0),
                xxl: sf(24.0),
                xxxl: sf(32.0),
            },
            radius: ResolvedRadius {
                none: 0.0,
                sm: sw(4.0),
                base: sw(8.0),
                md: sw(12.0),
                lg: sw(16.0),
                xl: sw(24.0),
                full: FULL_RADIUS,
            },
        }
    }
}
