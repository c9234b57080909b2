//! Status bar geometry.
//!
//! Heights are reads of live device signals, never cached: a host that
//! changes its answers (simulators, foldables) is reflected on the next
//! call.

use sunpo_device::{Host, Platform};

/// Status bar height on iOS devices with a Dynamic Island.
pub const DYNAMIC_ISLAND_STATUS_BAR: f64 = 54.0;
/// Status bar height on iOS devices with a notch.
pub const NOTCH_STATUS_BAR: f64 = 44.0;
/// Classic iOS status bar height.
pub const DEFAULT_IOS_STATUS_BAR: f64 = 20.0;

/// Resolve the current status bar height.
///
/// iOS: Dynamic Island wins over notch, which wins over the classic 20pt
/// bar; absent signals count as absent hardware. Android reports its inset
/// directly, with missing or non-positive insets resolving to 0.
pub fn status_bar_height(host: &dyn Host) -> f64 {
    match host.platform() {
        Platform::Ios => {
            if host.has_dynamic_island().unwrap_or(false) {
                DYNAMIC_ISLAND_STATUS_BAR
            } else if host.has_notch().unwrap_or(false) {
                NOTCH_STATUS_BAR
            } else {
                DEFAULT_IOS_STATUS_BAR
            }
        }
        Platform::Android => match host.status_bar_inset() {
            Some(inset) if inset > 0.0 => inset,
            _ => 0.0,
        },
    }
}

/// Height left for content once the status bar is excluded. Never negative.
pub fn available_height(device_height: f64, status_bar: f64) -> f64 {
    (device_height - status_bar).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunpo_device::SimHost;

    #[test]
    fn classic_ios_bar() {
        assert_eq!(status_bar_height(&SimHost::phone()), 20.0);
    }

    #[test]
    fn notch_bar() {
        assert_eq!(status_bar_height(&SimHost::notch_phone()), 44.0);
    }

    #[test]
    fn dynamic_island_bar() {
        assert_eq!(status_bar_height(&SimHost::island_phone()), 54.0);
    }

    #[test]
    fn island_wins_over_notch() {
        let host = SimHost::notch_phone();
        host.set_dynamic_island(Some(true));
        assert_eq!(status_bar_height(&host), 54.0);
    }

    #[test]
    fn android_reports_inset() {
        let host = SimHost::android_phone();
        host.set_status_bar_inset(Some(25.0));
        assert_eq!(status_bar_height(&host), 25.0);
    }

    #[test]
    fn android_missing_inset_is_zero() {
        let host = SimHost::android_phone();
        host.set_status_bar_inset(None);
        assert_eq!(status_bar_height(&host), 0.0);

        host.set_status_bar_inset(Some(-10.0));
        assert_eq!(status_bar_height(&host), 0.0);
    }

    #[test]
    fn absent_ios_signals_mean_classic_bar() {
        use sunpo_device::Platform;
        assert_eq!(status_bar_height(&SimHost::unready(Platform::Ios)), 20.0);
    }

    #[test]
    fn resolver_reads_signals_fresh() {
        let host = SimHost::phone();
        assert_eq!(status_bar_height(&host), 20.0);
        host.set_notch(Some(true));
        assert_eq!(status_bar_height(&host), 44.0);
    }

    #[test]
    fn available_height_never_negative() {
        assert_eq!(available_height(812.0, 20.0), 792.0);
        assert_eq!(available_height(0.0, 20.0), 0.0);
    }
}
