use storefront_events::{EventDispatcher, EventHandler};

use crate::event::{ProductEvent, PRODUCT_CREATED};

/// Announces new products by mail (logged only; there is no mail transport here).
#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<ProductEvent> for SendEmailWhenProductIsCreatedHandler {
    fn name(&self) -> &str {
        "send_email_when_product_is_created"
    }

    fn handle(&self, event: &ProductEvent) -> anyhow::Result<()> {
        let ProductEvent::ProductCreated(e) = event;
        tracing::info!(
            product_id = %e.product_id,
            price = e.price,
            "sending product announcement email for {}",
            e.name
        );
        Ok(())
    }
}

/// Subscribe the default product handlers.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher<ProductEvent>) {
    dispatcher.register(PRODUCT_CREATED, SendEmailWhenProductIsCreatedHandler);
}
