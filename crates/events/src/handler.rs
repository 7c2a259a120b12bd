use crate::Event;

/// Reacts to a dispatched event.
///
/// Handlers run synchronously on the dispatching call chain. A returned error aborts the
/// dispatch and reaches the caller of [`EventDispatcher::notify`](crate::EventDispatcher::notify)
/// unchanged, so handlers that must not interrupt others should log and return `Ok(())`.
pub trait EventHandler<E: Event>: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }

    fn handle(&self, event: &E) -> anyhow::Result<()>;
}

impl<E, F> EventHandler<E> for F
where
    E: Event,
    F: Fn(&E) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        self(event)
    }
}
