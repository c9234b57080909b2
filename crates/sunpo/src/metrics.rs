use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use sunpo_device::{Host, WindowSize};

use crate::compose::{Breakpoint, Edges, FlexDirection, OrientationLayout};
use crate::config::{ConfigOverrides, MetricsConfig};
use crate::error::ScaleError;
use crate::insets;
use crate::live::LiveMetrics;
use crate::scale;
use crate::screen::Screen;
use crate::stats::{ScaleStats, StatsSnapshot};
use crate::tokens::{Radius, ResolvedTokens, Spacing, Typography};

/// The metrics engine.
///
/// Every operation reads the host fresh and applies the configuration
/// active at that moment; nothing is cached between calls. Clones are
/// cheap and share configuration and counters, so a clone handed to
/// another thread observes reconfigurations immediately.
#[derive(Clone)]
pub struct Metrics {
    host: Arc<dyn Host>,
    config: Arc<RwLock<MetricsConfig>>,
    stats: Arc<ScaleStats>,
    pinned_size: Option<Arc<RwLock<WindowSize>>>,
}

impl Metrics {
    /// Engine with the default configuration.
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self::with_config(host, MetricsConfig::default())
    }

    /// Engine starting from an explicit configuration.
    pub fn with_config(host: Arc<dyn Host>, config: MetricsConfig) -> Self {
        Self {
            host,
            config: Arc::new(RwLock::new(config)),
            stats: Arc::new(ScaleStats::default()),
            pinned_size: None,
        }
    }

    /// Replace the active configuration with defaults plus `overrides`.
    ///
    /// The merge always starts from [`MetricsConfig::default`], so fields
    /// omitted here return to their defaults even if an earlier call set
    /// them. Readers see the whole record swap at once.
    pub fn init(&self, overrides: ConfigOverrides) {
        let config = overrides.apply();
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        debug!(
            base_width = config.base_width,
            base_height = config.base_height,
            scaling_factor = config.scaling_factor,
            tablet_breakpoint = config.tablet_breakpoint,
            spacing_base = config.spacing_base,
            "metrics reconfigured"
        );
    }

    /// The configuration active right now.
    pub fn config(&self) -> MetricsConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Counters for degraded operations: rejected inputs and host
    /// fallbacks.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Fresh screen reading, with fallbacks where the host abstains.
    pub fn screen(&self) -> Screen {
        let config = self.config();
        if let Some(pinned) = &self.pinned_size {
            let size = *pinned.read().unwrap_or_else(PoisonError::into_inner);
            return Screen::at_size(self.host.as_ref(), size, &config);
        }

        if self.host.window_size().is_none() {
            self.stats.record_dimension_fallback();
        }
        Screen::capture(self.host.as_ref(), &config)
    }

    /// Current status bar height, resolved from live device signals.
    pub fn status_bar_height(&self) -> f64 {
        insets::status_bar_height(self.host.as_ref())
    }

    /// Normalized height minus the status bar, floored at zero.
    pub fn available_height(&self) -> f64 {
        insets::available_height(self.screen().device_height(), self.status_bar_height())
    }

    // ── Scaling ───────────────────────────────────────────────────────

    /// Moderated width scaling of a design size.
    pub fn scale_width(&self, size: f64) -> f64 {
        scale::scale_width(&self.screen(), &self.config(), size)
    }

    /// Moderated height scaling of a design size.
    pub fn scale_height(&self, size: f64) -> f64 {
        scale::scale_height(&self.screen(), &self.config(), size)
    }

    /// Linear font scaling: tablet bump, then the full width ratio.
    pub fn scale_font(&self, size: f64) -> f64 {
        scale::scale_font(&self.screen(), &self.config(), size)
    }

    /// Percentage of the normalized width. Rejected input warns and
    /// resolves to 0.
    pub fn width_percent(&self, percent: f64) -> f64 {
        self.lossy(self.try_width_percent(percent))
    }

    /// Checked form of [`width_percent`](Metrics::width_percent).
    pub fn try_width_percent(&self, percent: f64) -> Result<f64, ScaleError> {
        scale::try_width_percent(&self.screen(), percent)
    }

    /// Percentage of the available height. Rejected input warns and
    /// resolves to 0.
    pub fn height_percent(&self, percent: f64) -> f64 {
        self.lossy(self.try_height_percent(percent))
    }

    /// Checked form of [`height_percent`](Metrics::height_percent).
    pub fn try_height_percent(&self, percent: f64) -> Result<f64, ScaleError> {
        scale::try_height_percent(self.available_height(), percent)
    }

    /// Width scaling with an explicit moderation factor. Rejected sizes
    /// warn and resolve to 0.
    pub fn moderate_width(&self, size: f64, factor: f64) -> f64 {
        self.lossy(self.try_moderate_width(size, factor))
    }

    /// Checked form of [`moderate_width`](Metrics::moderate_width).
    pub fn try_moderate_width(&self, size: f64, factor: f64) -> Result<f64, ScaleError> {
        scale::try_moderate_width(&self.screen(), &self.config(), size, factor)
    }

    /// Height-derived font size. Rejected sizes warn and resolve to the
    /// 14pt fallback.
    pub fn scaled_font_size(&self, size: f64) -> f64 {
        self.lossy(self.try_scaled_font_size(size))
    }

    /// Checked form of [`scaled_font_size`](Metrics::scaled_font_size).
    pub fn try_scaled_font_size(&self, size: f64) -> Result<f64, ScaleError> {
        scale::try_scaled_font_size(&self.screen(), self.available_height(), size)
    }

    /// [`scaled_font_size`](Metrics::scaled_font_size) against a custom
    /// reference height.
    pub fn scaled_font_size_with_base(&self, size: f64, base_height: f64) -> f64 {
        self.lossy(self.try_scaled_font_size_with_base(size, base_height))
    }

    /// Checked form of
    /// [`scaled_font_size_with_base`](Metrics::scaled_font_size_with_base).
    pub fn try_scaled_font_size_with_base(
        &self,
        size: f64,
        base_height: f64,
    ) -> Result<f64, ScaleError> {
        scale::try_scaled_font_size_with_base(
            &self.screen(),
            self.available_height(),
            size,
            base_height,
        )
    }

    // ── Tokens ────────────────────────────────────────────────────────

    /// Live spacing scale.
    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.clone())
    }

    /// Live typography scale.
    pub fn typography(&self) -> Typography {
        Typography::new(self.clone())
    }

    /// Live border radius scale.
    pub fn radius(&self) -> Radius {
        Radius::new(self.clone())
    }

    /// Every named token resolved at this instant.
    pub fn resolve_tokens(&self) -> ResolvedTokens {
        ResolvedTokens::resolve(self)
    }

    // ── Composers ─────────────────────────────────────────────────────

    /// Four-sided padding with each side width-scaled.
    pub fn padding(&self, top: f64, right: f64, bottom: f64, left: f64) -> Edges {
        self.scaled_edges(top, right, bottom, left)
    }

    /// Vertical/horizontal padding shorthand.
    pub fn padding_symmetric(&self, vertical: f64, horizontal: f64) -> Edges {
        self.scaled_edges(vertical, horizontal, vertical, horizontal)
    }

    /// Four-sided margin; margins scale exactly like padding.
    pub fn margin(&self, top: f64, right: f64, bottom: f64, left: f64) -> Edges {
        self.scaled_edges(top, right, bottom, left)
    }

    /// Vertical/horizontal margin shorthand.
    pub fn margin_symmetric(&self, vertical: f64, horizontal: f64) -> Edges {
        self.scaled_edges(vertical, horizontal, vertical, horizontal)
    }

    fn scaled_edges(&self, top: f64, right: f64, bottom: f64, left: f64) -> Edges {
        let screen = self.screen();
        let config = self.config();
        Edges {
            top: scale::scale_width(&screen, &config, top),
            right: scale::scale_width(&screen, &config, right),
            bottom: scale::scale_width(&screen, &config, bottom),
            left: scale::scale_width(&screen, &config, left),
        }
    }

    /// Whether the normalized width is at or beyond `breakpoint`.
    pub fn is_breakpoint(&self, breakpoint: Breakpoint) -> bool {
        self.screen().device_width() >= breakpoint.min_width()
    }

    /// The widest breakpoint the normalized width currently satisfies.
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        Breakpoint::current(self.screen().device_width())
    }

    /// Row in landscape, column in portrait, carrying the raw dimensions.
    pub fn orientation_layout(&self) -> OrientationLayout {
        let screen = self.screen();
        OrientationLayout {
            direction: if screen.is_landscape() {
                FlexDirection::Row
            } else {
                FlexDirection::Column
            },
            width: screen.width,
            height: screen.height,
        }
    }

    /// Start tracking dimension changes through the host's notifications.
    pub fn live(&self) -> LiveMetrics {
        LiveMetrics::attach(self)
    }

    // ── Internals ─────────────────────────────────────────────────────

    pub(crate) fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub(crate) fn record_dimension_fallback(&self) {
        self.stats.record_dimension_fallback();
    }

    /// A sibling engine that serves `size` instead of reading the host's
    /// window size. Shares configuration and counters with `self`.
    pub(crate) fn pinned(&self, size: Arc<RwLock<WindowSize>>) -> Self {
        Self {
            host: Arc::clone(&self.host),
            config: Arc::clone(&self.config),
            stats: Arc::clone(&self.stats),
            pinned_size: Some(size),
        }
    }

    /// Substitute the documented fallback for a rejected input, with one
    /// warning and one counter bump.
    fn lossy(&self, result: Result<f64, ScaleError>) -> f64 {
        result.unwrap_or_else(|err| {
            warn!(%err, "input rejected, substituting fallback");
            self.stats.record(&err);
            match err {
                ScaleError::InvalidFontSize(_) => scale::FONT_FALLBACK,
                ScaleError::InvalidPercent(_) | ScaleError::InvalidSize(_) => 0.0,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunpo_device::{Platform, SimHost};

    fn engine(host: SimHost) -> Metrics {
        Metrics::new(Arc::new(host))
    }

    // ── Configuration ─────────────────────────────────────────────────

    #[test]
    fn init_replaces_rather_than_merges() {
        let metrics = engine(SimHost::phone());
        metrics.init(ConfigOverrides {
            spacing_base: Some(8.0),
            ..Default::default()
        });
        assert_eq!(metrics.config().spacing_base, 8.0);

        // A second init without spacing_base returns it to the default.
        metrics.init(ConfigOverrides {
            base_width: Some(414.0),
            ..Default::default()
        });
        let config = metrics.config();
        assert_eq!(config.base_width, 414.0);
        assert_eq!(config.spacing_base, 4.0);
    }

    #[test]
    fn clones_share_configuration() {
        let metrics = engine(SimHost::phone());
        let clone = metrics.clone();
        metrics.init(ConfigOverrides {
            scaling_factor: Some(1.0),
            ..Default::default()
        });
        assert_eq!(clone.config().scaling_factor, 1.0);
    }

    #[test]
    fn reconfiguration_changes_tokens_deterministically() {
        let metrics = engine(SimHost::phone());
        // The 375-wide reference screen makes scale_width the identity.
        assert_eq!(metrics.spacing().sm(), 8.0);

        metrics.init(ConfigOverrides {
            spacing_base: Some(8.0),
            ..Default::default()
        });
        assert_eq!(metrics.spacing().sm(), 16.0);
    }

    // ── Lossy operations ──────────────────────────────────────────────

    #[test]
    fn rejected_percent_warns_once_and_returns_zero() {
        let metrics = engine(SimHost::phone());
        assert_eq!(metrics.width_percent(150.0), 0.0);
        assert_eq!(metrics.stats().invalid_percents, 1);
        assert_eq!(metrics.stats().total(), 1);

        assert_eq!(metrics.height_percent(-10.0), 0.0);
        assert_eq!(metrics.stats().invalid_percents, 2);
    }

    #[test]
    fn rejected_font_size_returns_fallback() {
        let metrics = engine(SimHost::phone());
        assert_eq!(metrics.scaled_font_size(0.0), 14.0);
        assert_eq!(metrics.scaled_font_size(-5.0), 14.0);
        assert_eq!(metrics.scaled_font_size(f64::NAN), 14.0);
        assert_eq!(metrics.stats().invalid_font_sizes, 3);
    }

    #[test]
    fn rejected_moderate_size_returns_zero() {
        let metrics = engine(SimHost::phone());
        assert_eq!(metrics.moderate_width(-10.0, 0.5), 0.0);
        assert_eq!(metrics.moderate_width(f64::NAN, 0.5), 0.0);
        assert_eq!(metrics.stats().invalid_sizes, 2);
    }

    #[test]
    fn valid_inputs_do_not_touch_stats() {
        let metrics = engine(SimHost::phone());
        let _ = metrics.width_percent(50.0);
        let _ = metrics.scaled_font_size(16.0);
        let _ = metrics.moderate_width(100.0, 1.0);
        assert_eq!(metrics.stats().total(), 0);
    }

    #[test]
    fn unready_host_counts_dimension_fallbacks() {
        let metrics = engine(SimHost::unready(Platform::Ios));
        let screen = metrics.screen();
        assert_eq!(screen.width, 375.0);
        assert_eq!(screen.height, 812.0);
        assert_eq!(metrics.stats().dimension_fallbacks, 1);
    }

    // ── Live reads ────────────────────────────────────────────────────

    #[test]
    fn operations_read_the_host_fresh() {
        let host = SimHost::phone();
        let metrics = engine(host.clone());
        assert_eq!(metrics.width_percent(100.0), 375.0);

        host.set_window_size(WindowSize::new(400.0, 800.0));
        assert_eq!(metrics.width_percent(100.0), 400.0);
    }

    #[test]
    fn status_bar_follows_island_over_notch() {
        let host = SimHost::notch_phone();
        let metrics = engine(host.clone());
        assert_eq!(metrics.status_bar_height(), 44.0);

        host.set_dynamic_island(Some(true));
        assert_eq!(metrics.status_bar_height(), 54.0);
    }

    #[test]
    fn available_height_excludes_status_bar() {
        assert_eq!(engine(SimHost::phone()).available_height(), 792.0);
        assert_eq!(engine(SimHost::notch_phone()).available_height(), 800.0);
    }

    #[test]
    fn scaled_font_size_matches_reference_cases() {
        // 375×812 phone keeps the design size.
        assert_eq!(engine(SimHost::phone()).scaled_font_size(16.0), 16.0);

        // Tablets take the height branch with the 2pt bump.
        let tablet = engine(SimHost::tablet());
        let expected = scale::round2(18.0 * tablet.available_height() / 812.0);
        assert_eq!(tablet.scaled_font_size(16.0), expected);

        // Wide non-tablets take the height branch without the bump.
        let host = SimHost::new(Platform::Ios, 600.0, 900.0);
        host.set_tablet(Some(false));
        host.set_notch(Some(false));
        let wide = engine(host);
        assert_eq!(wide.scaled_font_size(16.0), 17.34);
    }

    // ── Composers ─────────────────────────────────────────────────────

    #[test]
    fn padding_scales_every_side() {
        let metrics = engine(SimHost::new(Platform::Ios, 400.0, 800.0));
        let edges = metrics.padding(8.0, 16.0, 8.0, 16.0);
        let unit = |v: f64| v + (400.0 / 375.0 * v - v) * 0.5;
        assert!((edges.top - unit(8.0)).abs() < 1e-9);
        assert!((edges.right - unit(16.0)).abs() < 1e-9);
        assert_eq!(edges, metrics.padding_symmetric(8.0, 16.0));
        assert_eq!(edges, metrics.margin(8.0, 16.0, 8.0, 16.0));
        assert_eq!(edges, metrics.margin_symmetric(8.0, 16.0));
    }

    #[test]
    fn breakpoints_classify_normalized_width() {
        let metrics = engine(SimHost::phone());
        assert!(!metrics.is_breakpoint(Breakpoint::Sm));
        assert_eq!(metrics.breakpoint(), None);

        let tablet = engine(SimHost::tablet());
        assert!(tablet.is_breakpoint(Breakpoint::Sm));
        assert!(tablet.is_breakpoint(Breakpoint::Md));
        assert!(!tablet.is_breakpoint(Breakpoint::Lg));
        assert_eq!(tablet.breakpoint(), Some(Breakpoint::Md));
    }

    #[test]
    fn orientation_layout_follows_raw_order() {
        let host = SimHost::phone();
        let metrics = engine(host.clone());
        assert_eq!(metrics.orientation_layout().direction, FlexDirection::Column);

        host.rotate();
        let layout = metrics.orientation_layout();
        assert_eq!(layout.direction, FlexDirection::Row);
        assert_eq!(layout.width, 812.0);
        assert_eq!(layout.height, 375.0);
    }
}
