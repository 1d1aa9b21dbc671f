use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::{
    Layer, Registry,
    layer::{Context, SubscriberExt},
};

/// Counts the events logged at the `error` level on the current thread.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorLogCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorLogCounter {
    /// Start counting until the returned guard is dropped.
    pub(crate) fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let subscriber = Registry::default().with(counter.clone());

        (counter, tracing::subscriber::set_default(subscriber))
    }

    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorLogCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
