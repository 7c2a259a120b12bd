//! Default reactions to customer events. They only log.

use storefront_events::{EventDispatcher, EventHandler};

use crate::event::{CustomerEvent, CUSTOMER_ADDRESS_CHANGED, CUSTOMER_CREATED};

/// Records every new customer in the audit log.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuditCustomerCreatedHandler;

impl EventHandler<CustomerEvent> for AuditCustomerCreatedHandler {
    fn name(&self) -> &str {
        "audit_customer_created"
    }

    fn handle(&self, event: &CustomerEvent) -> anyhow::Result<()> {
        if let CustomerEvent::CustomerCreated(e) = event {
            tracing::info!(
                target: "audit",
                customer_id = %e.customer_id,
                occurred_at = %e.occurred_at,
                "customer created"
            );
        }
        Ok(())
    }
}

/// Greets a newly created customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct WelcomeCustomerHandler;

impl EventHandler<CustomerEvent> for WelcomeCustomerHandler {
    fn name(&self) -> &str {
        "welcome_customer"
    }

    fn handle(&self, event: &CustomerEvent) -> anyhow::Result<()> {
        if let CustomerEvent::CustomerCreated(e) = event {
            tracing::info!(customer_id = %e.customer_id, "sending welcome message to {}", e.name);
        }
        Ok(())
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAddressChangedHandler;

impl EventHandler<CustomerEvent> for LogAddressChangedHandler {
    fn name(&self) -> &str {
        "log_address_changed"
    }

    fn handle(&self, event: &CustomerEvent) -> anyhow::Result<()> {
        if let CustomerEvent::CustomerAddressChanged(e) = event {
            tracing::info!(
                customer_id = %e.customer_id,
                "address of customer {} changed to {}",
                e.name,
                e.address
            );
        }
        Ok(())
    }
}

/// Subscribe the default customer handlers.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher<CustomerEvent>) {
    dispatcher.register(CUSTOMER_CREATED, AuditCustomerCreatedHandler);
    dispatcher.register(CUSTOMER_CREATED, WelcomeCustomerHandler);
    dispatcher.register(CUSTOMER_ADDRESS_CHANGED, LogAddressChangedHandler);
}
