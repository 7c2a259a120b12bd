//! Event dispatcher set shared by the use cases.

use std::sync::Arc;

use storefront_customers::CustomerEvent;
use storefront_events::EventDispatcher;
use storefront_products::ProductEvent;
use storefront_sales::OrderEvent;

/// One dispatcher per event family, frozen behind `Arc` once handlers are registered.
#[derive(Debug, Clone, Default)]
pub struct Dispatchers {
    pub customers: Arc<EventDispatcher<CustomerEvent>>,
    pub products: Arc<EventDispatcher<ProductEvent>>,
    pub orders: Arc<EventDispatcher<OrderEvent>>,
}

impl Dispatchers {
    /// Dispatchers with every crate's default handlers subscribed.
    pub fn with_default_handlers() -> Self {
        let mut customers = EventDispatcher::new();
        storefront_customers::handlers::register_default_handlers(&mut customers);

        let mut products = EventDispatcher::new();
        storefront_products::handlers::register_default_handlers(&mut products);

        let mut orders = EventDispatcher::new();
        storefront_sales::handlers::register_default_handlers(&mut orders);

        Self {
            customers: Arc::new(customers),
            products: Arc::new(products),
            orders: Arc::new(orders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_customers::{CUSTOMER_ADDRESS_CHANGED, CUSTOMER_CREATED};
    use storefront_products::PRODUCT_CREATED;
    use storefront_sales::ORDER_PLACED;

    #[test]
    fn default_handlers_cover_every_event_type() {
        let dispatchers = Dispatchers::with_default_handlers();
        assert_eq!(dispatchers.customers.handler_count(CUSTOMER_CREATED), 2);
        assert_eq!(dispatchers.customers.handler_count(CUSTOMER_ADDRESS_CHANGED), 1);
        assert_eq!(dispatchers.products.handler_count(PRODUCT_CREATED), 1);
        assert_eq!(dispatchers.orders.handler_count(ORDER_PLACED), 1);
    }

    #[test]
    fn default_set_is_empty() {
        let dispatchers = Dispatchers::default();
        assert_eq!(dispatchers.products.handler_count(PRODUCT_CREATED), 0);
    }
}
