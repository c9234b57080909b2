use tracing::debug;

/// Handle to an active dimension-change subscription.
///
/// Removal is idempotent. Dropping the handle removes the listener if
/// [`remove`](Subscription::remove) was never called.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap the action that unregisters the listener.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never connected, for hosts without change
    /// events.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unregister the listener. Calling this more than once is a no-op.
    pub fn remove(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
            debug!("dimension listener removed");
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
