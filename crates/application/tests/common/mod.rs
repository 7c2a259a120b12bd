#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use storefront_customers::CustomerEvent;
use storefront_events::{Event, EventDispatcher, EventHandler};
use storefront_infra::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
use storefront_products::ProductEvent;
use storefront_sales::OrderEvent;

/// Shared in-memory stores for one test.
pub struct Stores {
    pub customers: Arc<InMemoryCustomerRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(InMemoryCustomerRepository::new()),
            products: Arc::new(InMemoryProductRepository::new()),
            orders: Arc::new(InMemoryOrderRepository::new()),
        }
    }
}

/// Records the type of every event it sees.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl<E: Event> EventHandler<E> for Recorder {
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        self.seen.lock().unwrap().push(event.event_type().to_string());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("mailer unavailable")]
pub struct MailerDown;

/// Always fails with [`MailerDown`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingHandler;

impl<E: Event> EventHandler<E> for FailingHandler {
    fn handle(&self, _event: &E) -> anyhow::Result<()> {
        Err(MailerDown.into())
    }
}

pub fn recording<E: Event>(event_type: &str, recorder: &Recorder) -> Arc<EventDispatcher<E>> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(event_type, recorder.clone());
    Arc::new(dispatcher)
}

pub fn failing<E: Event>(event_type: &str) -> Arc<EventDispatcher<E>> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(event_type, FailingHandler);
    Arc::new(dispatcher)
}

pub fn silent_customers() -> Arc<EventDispatcher<CustomerEvent>> {
    Arc::new(EventDispatcher::new())
}

pub fn silent_products() -> Arc<EventDispatcher<ProductEvent>> {
    Arc::new(EventDispatcher::new())
}

pub fn silent_orders() -> Arc<EventDispatcher<OrderEvent>> {
    Arc::new(EventDispatcher::new())
}
