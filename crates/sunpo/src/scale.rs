//! The scaling formulas.
//!
//! Everything here is a pure function of a captured [`Screen`] and the
//! active [`MetricsConfig`]. The stateful wrappers that read the host and
//! substitute fallbacks for rejected input live on
//! [`Metrics`](crate::Metrics).

use crate::config::MetricsConfig;
use crate::error::ScaleError;
use crate::screen::Screen;

/// Reference width of the height-derived font algorithm. Fixed to the
/// device class the algorithm was tuned on, independent of `base_width`.
const FONT_REFERENCE_WIDTH: f64 = 375.0;

/// Reference height of the height-derived font algorithm.
pub const FONT_REFERENCE_HEIGHT: f64 = 812.0;

/// Normalized width beyond which the height-derived branch applies even
/// for non-tablets.
const WIDE_DEVICE_CUTOFF: f64 = 500.0;

/// Font size substituted when the requested size is unusable.
pub const FONT_FALLBACK: f64 = 14.0;

/// Extra points added to font sizes on tablets.
const TABLET_FONT_BUMP: f64 = 2.0;

/// Moderated width scaling: the size follows the linear width ratio by
/// `config.scaling_factor` (0 keeps the design size, 1 scales fully).
pub fn scale_width(screen: &Screen, config: &MetricsConfig, size: f64) -> f64 {
    moderate(size, screen.device_width() / config.base_width, config.scaling_factor)
}

/// Moderated height scaling against the base height.
pub fn scale_height(screen: &Screen, config: &MetricsConfig, size: f64) -> f64 {
    moderate(size, screen.device_height() / config.base_height, config.scaling_factor)
}

/// Linear font scaling: tablets get the 2pt bump, then the size follows
/// the width ratio fully, with no moderation.
pub fn scale_font(screen: &Screen, config: &MetricsConfig, size: f64) -> f64 {
    let size = if screen.is_tablet { size + TABLET_FONT_BUMP } else { size };
    size * (screen.device_width() / config.base_width)
}

/// `size` moved toward `scale * size` by `factor`.
fn moderate(size: f64, scale: f64, factor: f64) -> f64 {
    size + (scale * size - size) * factor
}

/// Width scaling with an explicit moderation factor instead of the
/// configured one. Rejects negative and non-numeric sizes.
pub fn try_moderate_width(
    screen: &Screen,
    config: &MetricsConfig,
    size: f64,
    factor: f64,
) -> Result<f64, ScaleError> {
    if size.is_nan() || size < 0.0 {
        return Err(ScaleError::InvalidSize(size));
    }
    Ok(moderate(size, screen.device_width() / config.base_width, factor))
}

/// Fraction of the normalized width.
pub fn try_width_percent(screen: &Screen, percent: f64) -> Result<f64, ScaleError> {
    Ok(screen.device_width() * try_fraction(percent)?)
}

/// Fraction of the content height (normalized height minus the status
/// bar).
pub fn try_height_percent(available_height: f64, percent: f64) -> Result<f64, ScaleError> {
    Ok(available_height * try_fraction(percent)?)
}

// NaN fails the range check as well.
fn try_fraction(percent: f64) -> Result<f64, ScaleError> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(ScaleError::InvalidPercent(percent));
    }
    Ok(percent / 100.0)
}

/// Height-derived font scaling.
///
/// Tablets get the 2pt bump, then the size follows the available content
/// height against the 812pt reference. Phones at or under 500pt of
/// normalized width follow the width ratio against 375 instead. Either
/// branch rounds to two decimals.
pub fn try_scaled_font_size(
    screen: &Screen,
    available_height: f64,
    size: f64,
) -> Result<f64, ScaleError> {
    try_scaled_font_size_with_base(screen, available_height, size, FONT_REFERENCE_HEIGHT)
}

/// [`try_scaled_font_size`] against a custom reference height.
pub fn try_scaled_font_size_with_base(
    screen: &Screen,
    available_height: f64,
    size: f64,
    base_height: f64,
) -> Result<f64, ScaleError> {
    if size.is_nan() || size <= 0.0 {
        return Err(ScaleError::InvalidFontSize(size));
    }

    let adjusted = if screen.is_tablet { size + TABLET_FONT_BUMP } else { size };
    let value = if screen.is_tablet || screen.device_width() > WIDE_DEVICE_CUTOFF {
        adjusted * available_height / base_height
    } else {
        (screen.device_width() / FONT_REFERENCE_WIDTH) * adjusted
    };

    Ok(round2(value))
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
