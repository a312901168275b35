//! Collects output events in memory so tests can read back what was printed.

use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::terminal::logging::{RawMessage, is_listing};

#[derive(Clone, Default)]
pub struct Captured {
    pub listing: Arc<Mutex<Vec<String>>>,
    pub other: Arc<Mutex<Vec<String>>>,
}

impl Captured {
    /// Routes this thread's events into the returned buffers until the guard drops.
    pub fn install() -> (Self, DefaultGuard) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (captured, guard)
    }

    pub fn listing(&self) -> Vec<String> {
        self.listing.lock().unwrap().clone()
    }

    pub fn other(&self) -> Vec<String> {
        self.other.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if is_listing(event.metadata()) {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            self.listing.lock().unwrap().push(raw.0);
        } else {
            self.other.lock().unwrap().push(event.metadata().target().to_string());
        }
    }
}
