use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::Entity;
use storefront_customers::CustomerId;
use storefront_events::Event;

use crate::order::{Order, OrderId};

pub const ORDER_PLACED: &str = "OrderPlaced";

/// Event: OrderPlaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub total: f64,
    pub item_count: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OrderEvent {
    OrderPlaced(OrderPlaced),
}

impl OrderEvent {
    pub fn placed(order: &Order, occurred_at: DateTime<Utc>) -> Self {
        Self::OrderPlaced(OrderPlaced {
            order_id: order.id().clone(),
            customer_id: order.customer_id().clone(),
            total: order.total(),
            item_count: order.items().len(),
            occurred_at,
        })
    }
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderPlaced(_) => ORDER_PLACED,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderPlaced(e) => e.occurred_at,
        }
    }
}
