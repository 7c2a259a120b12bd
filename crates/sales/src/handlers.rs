use storefront_events::{EventDispatcher, EventHandler};

use crate::event::{OrderEvent, ORDER_PLACED};

/// Logs every placed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOrderPlacedHandler;

impl EventHandler<OrderEvent> for LogOrderPlacedHandler {
    fn name(&self) -> &str {
        "log_order_placed"
    }

    fn handle(&self, event: &OrderEvent) -> anyhow::Result<()> {
        let OrderEvent::OrderPlaced(e) = event;
        tracing::info!(
            order_id = %e.order_id,
            customer_id = %e.customer_id,
            total = e.total,
            items = e.item_count,
            "order placed"
        );
        Ok(())
    }
}

/// Subscribe the default order handlers.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher<OrderEvent>) {
    dispatcher.register(ORDER_PLACED, LogOrderPlacedHandler);
}
