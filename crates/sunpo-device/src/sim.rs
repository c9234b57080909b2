//! In-memory host implementation for tests, demos, and headless snapshots.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

use crate::subscription::Subscription;
use crate::{DeviceProfile, DisplayMetrics, Platform, SizeListener, SystemChrome, WindowSize};

type SharedListener = Arc<dyn Fn(WindowSize) + Send + Sync>;

/// Simulated host with fully scriptable device signals.
///
/// Clones share state, so a clone kept outside the engine can keep driving
/// dimension changes. Listeners fire synchronously from
/// [`set_window_size`](SimHost::set_window_size), on the calling thread.
#[derive(Clone)]
pub struct SimHost {
    state: Arc<Mutex<SimState>>,
}

struct SimState {
    window_size: Option<WindowSize>,
    pixel_density: Option<f64>,
    platform: Platform,
    status_bar_inset: Option<f64>,
    tablet: Option<bool>,
    notch: Option<bool>,
    dynamic_island: Option<bool>,
    listeners: HashMap<u64, SharedListener>,
    next_listener_id: u64,
}

impl SimHost {
    /// Host reporting only a platform and window size; every other signal
    /// is unknown.
    pub fn new(platform: Platform, width: f64, height: f64) -> Self {
        Self::build(platform, Some(WindowSize::new(width, height)))
    }

    /// Host that cannot answer anything yet, so engines exercise their
    /// fallback paths.
    pub fn unready(platform: Platform) -> Self {
        Self::build(platform, None)
    }

    fn build(platform: Platform, window_size: Option<WindowSize>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                window_size,
                pixel_density: None,
                platform,
                status_bar_inset: None,
                tablet: None,
                notch: None,
                dynamic_island: None,
                listeners: HashMap::new(),
                next_listener_id: 0,
            })),
        }
    }

    // ── Device presets ────────────────────────────────────────────────

    /// 375×812 iPhone-class phone with the classic status bar.
    pub fn phone() -> Self {
        let host = Self::new(Platform::Ios, 375.0, 812.0);
        host.set_pixel_density(Some(3.0));
        host.set_tablet(Some(false));
        host.set_notch(Some(false));
        host.set_dynamic_island(Some(false));
        host
    }

    /// 390×844 notched phone.
    pub fn notch_phone() -> Self {
        let host = Self::new(Platform::Ios, 390.0, 844.0);
        host.set_pixel_density(Some(3.0));
        host.set_tablet(Some(false));
        host.set_notch(Some(true));
        host.set_dynamic_island(Some(false));
        host
    }

    /// 393×852 phone with a Dynamic Island.
    pub fn island_phone() -> Self {
        let host = Self::new(Platform::Ios, 393.0, 852.0);
        host.set_pixel_density(Some(3.0));
        host.set_tablet(Some(false));
        host.set_notch(Some(false));
        host.set_dynamic_island(Some(true));
        host
    }

    /// 768×1024 tablet.
    pub fn tablet() -> Self {
        let host = Self::new(Platform::Ios, 768.0, 1024.0);
        host.set_pixel_density(Some(2.0));
        host.set_tablet(Some(true));
        host.set_notch(Some(false));
        host.set_dynamic_island(Some(false));
        host
    }

    /// 360×800 Android phone with a 24pt status bar inset.
    pub fn android_phone() -> Self {
        let host = Self::new(Platform::Android, 360.0, 800.0);
        host.set_pixel_density(Some(2.75));
        host.set_tablet(Some(false));
        host.set_notch(Some(false));
        host.set_dynamic_island(Some(false));
        host.set_status_bar_inset(Some(24.0));
        host
    }

    // ── State mutation ────────────────────────────────────────────────

    /// Change the window size and notify every registered listener.
    pub fn set_window_size(&self, size: WindowSize) {
        let to_notify: Vec<SharedListener> = {
            let mut state = self.lock();
            state.window_size = Some(size);
            state.listeners.values().cloned().collect()
        };
        debug!(
            width = size.width,
            height = size.height,
            listeners = to_notify.len(),
            "window size changed"
        );
        for listener in &to_notify {
            listener(size);
        }
    }

    /// Swap width and height, as a device rotation would. No-op while no
    /// size has been set.
    pub fn rotate(&self) {
        let current = self.lock().window_size;
        if let Some(size) = current {
            self.set_window_size(WindowSize::new(size.height, size.width));
        }
    }

    pub fn set_pixel_density(&self, density: Option<f64>) {
        self.lock().pixel_density = density;
    }

    pub fn set_platform(&self, platform: Platform) {
        self.lock().platform = platform;
    }

    pub fn set_status_bar_inset(&self, inset: Option<f64>) {
        self.lock().status_bar_inset = inset;
    }

    pub fn set_tablet(&self, tablet: Option<bool>) {
        self.lock().tablet = tablet;
    }

    pub fn set_notch(&self, notch: Option<bool>) {
        self.lock().notch = notch;
    }

    pub fn set_dynamic_island(&self, island: Option<bool>) {
        self.lock().dynamic_island = island;
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplayMetrics for SimHost {
    fn window_size(&self) -> Option<WindowSize> {
        self.lock().window_size
    }

    fn pixel_density(&self) -> Option<f64> {
        self.lock().pixel_density
    }

    fn subscribe(&self, listener: SizeListener) -> Subscription {
        let id = {
            let mut state = self.lock();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.insert(id, Arc::from(listener));
            id
        };

        let weak: Weak<Mutex<SimState>> = Arc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                state.listeners.remove(&id);
            }
        })
    }
}

impl DeviceProfile for SimHost {
    fn is_tablet(&self) -> Option<bool> {
        self.lock().tablet
    }

    fn has_notch(&self) -> Option<bool> {
        self.lock().notch
    }

    fn has_dynamic_island(&self) -> Option<bool> {
        self.lock().dynamic_island
    }
}

impl SystemChrome for SimHost {
    fn platform(&self) -> Platform {
        self.lock().platform
    }

    fn status_bar_inset(&self) -> Option<f64> {
        self.lock().status_bar_inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn presets_report_expected_geometry() {
        let phone = SimHost::phone();
        assert_eq!(phone.window_size(), Some(WindowSize::new(375.0, 812.0)));
        assert_eq!(phone.platform(), Platform::Ios);
        assert_eq!(phone.pixel_density(), Some(3.0));

        let android = SimHost::android_phone();
        assert_eq!(android.platform(), Platform::Android);
        assert_eq!(android.status_bar_inset(), Some(24.0));
    }

    #[test]
    fn unready_reports_nothing() {
        let host = SimHost::unready(Platform::Ios);
        assert!(host.window_size().is_none());
        assert!(host.pixel_density().is_none());
        assert!(host.is_tablet().is_none());
        assert!(host.status_bar_inset().is_none());
    }

    #[test]
    fn listeners_fire_synchronously() {
        let host = SimHost::phone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = host.subscribe(Box::new(move |size| {
            sink.lock().unwrap().push(size);
        }));

        host.set_window_size(WindowSize::new(812.0, 375.0));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], WindowSize::new(812.0, 375.0));
    }

    #[test]
    fn removed_listener_stops_firing() {
        let host = SimHost::phone();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut sub = host.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(host.listener_count(), 1);

        host.set_window_size(WindowSize::new(400.0, 800.0));
        sub.remove();
        assert_eq!(host.listener_count(), 0);
        host.set_window_size(WindowSize::new(500.0, 900.0));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let host = SimHost::phone();
        {
            let _sub = host.subscribe(Box::new(|_| {}));
            assert_eq!(host.listener_count(), 1);
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn rotate_swaps_dimensions() {
        let host = SimHost::phone();
        host.rotate();
        assert_eq!(host.window_size(), Some(WindowSize::new(812.0, 375.0)));
    }

    #[test]
    fn rotate_without_size_is_noop() {
        let host = SimHost::unready(Platform::Ios);
        host.rotate();
        assert!(host.window_size().is_none());
    }

    #[test]
    fn clones_share_state() {
        let host = SimHost::phone();
        let clone = host.clone();
        clone.set_window_size(WindowSize::new(500.0, 900.0));
        assert_eq!(host.window_size(), Some(WindowSize::new(500.0, 900.0)));
    }
}
