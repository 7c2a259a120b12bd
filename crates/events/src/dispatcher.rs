//! Synchronous in-process event dispatcher.
//!
//! The dispatcher is a registry from event-type name to an ordered list of handlers.
//! `notify` runs every handler registered for the event's type, on the caller's thread,
//! in registration order.
//!
//! ## Delivery
//!
//! - **Single attempt**: no retry, no persistence, no at-least-once guarantee
//! - **No isolation**: the first handler error aborts the remaining handlers and is
//!   returned to the caller unchanged
//! - **Per instance**: subscriptions live as long as the dispatcher value; whoever
//!   composes the use cases decides its lifetime

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Event, EventHandler};

/// Opaque handle returned by [`EventDispatcher::register`].
///
/// Each registration gets its own handle, so registering the same handler twice yields two
/// independent subscriptions that can be removed one at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription<E: Event> {
    id: SubscriptionId,
    handler: Arc<dyn EventHandler<E>>,
}

/// In-process publish/subscribe registry.
pub struct EventDispatcher<E: Event> {
    handlers: HashMap<String, Vec<Subscription<E>>>,
    next_id: u64,
}

impl<E: Event> EventDispatcher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `event_type`.
    pub fn register<H>(&mut self, event_type: impl Into<String>, handler: H) -> SubscriptionId
    where
        H: EventHandler<E> + 'static,
    {
        self.register_shared(event_type, Arc::new(handler))
    }

    /// Subscribe an already shared handler (the same instance may be registered repeatedly).
    pub fn register_shared(
        &mut self,
        event_type: impl Into<String>,
        handler: Arc<dyn EventHandler<E>>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let event_type = event_type.into();
        tracing::debug!(event_type = %event_type, handler = handler.name(), "handler registered");

        self.handlers
            .entry(event_type)
            .or_default()
            .push(Subscription { id, handler });
        id
    }

    /// Remove one subscription. Returns whether anything was removed; unknown handles are a no-op.
    pub fn unregister(&mut self, event_type: &str, subscription: SubscriptionId) -> bool {
        let Some(subs) = self.handlers.get_mut(event_type) else {
            return false;
        };

        let before = subs.len();
        subs.retain(|s| s.id != subscription);
        let removed = subs.len() != before;

        if subs.is_empty() {
            self.handlers.remove(event_type);
        }
        removed
    }

    /// Drop every subscription for every event type.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Number of subscriptions for `event_type`.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.get(event_type).map_or(0, Vec::len)
    }

    /// Invoke every handler registered for `event.event_type()`, in registration order.
    ///
    /// Stops at the first failing handler and returns its error as-is.
    pub fn notify(&self, event: &E) -> anyhow::Result<()> {
        let event_type = event.event_type();
        let Some(subs) = self.handlers.get(event_type) else {
            tracing::debug!(event_type, "no handlers registered");
            return Ok(());
        };

        for sub in subs {
            tracing::debug!(event_type, handler = sub.handler.name(), "dispatching event");
            if let Err(e) = sub.handler.handle(event) {
                tracing::warn!(
                    event_type,
                    handler = sub.handler.name(),
                    error = %e,
                    "event handler failed; remaining handlers skipped"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: Event> core::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .handlers
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        f.debug_struct("EventDispatcher").field("handlers", &counts).finish()
    }
}
