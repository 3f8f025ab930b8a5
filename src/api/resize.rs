use std::fmt;

/// Handle returned by `ResizeDispatcher::subscribe`, used for teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeSubscription(u64);

/// Explicit resize observer registry.
///
/// Hosts forward their platform resize signal through `dispatch`; each
/// subscribed chart instance re-runs its pipeline. Modeling the subscription
/// explicitly (instead of one ambient global listener) supports multiple
/// chart instances and clean deregistration.
#[derive(Default)]
pub struct ResizeDispatcher {
    subscribers: Vec<(u64, Box<dyn FnMut(f64, f64)>)>,
    next_id: u64,
}

impl ResizeDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(f64, f64) + 'static) -> ResizeSubscription {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        ResizeSubscription(id)
    }

    /// Removes a subscriber; returns `false` when it was already gone.
    pub fn unsubscribe(&mut self, subscription: ResizeSubscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription.0);
        self.subscribers.len() != before
    }

    /// Forwards one resize signal to every subscriber in registration order.
    pub fn dispatch(&mut self, width: f64, height: f64) {
        for (_, callback) in &mut self.subscribers {
            callback(width, height);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for ResizeDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeDispatcher")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
