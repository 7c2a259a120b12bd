use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::Entity;
use storefront_events::Event;

use crate::product::{Product, ProductId};

pub const PRODUCT_CREATED: &str = "ProductCreated";

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProductEvent {
    ProductCreated(ProductCreated),
}

impl ProductEvent {
    pub fn created(product: &Product, occurred_at: DateTime<Utc>) -> Self {
        Self::ProductCreated(ProductCreated {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
            occurred_at,
        })
    }
}

impl Event for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated(_) => PRODUCT_CREATED,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::ProductCreated(e) => e.occurred_at,
        }
    }
}
