//! Order use cases.

use std::sync::Arc;

use chrono::Utc;

use storefront_core::{Entity, Repository};
use storefront_customers::{CustomerId, CustomerRepository};
use storefront_events::EventDispatcher;
use storefront_products::{ProductId, ProductRepository};
use storefront_sales::{OrderEvent, OrderId, OrderItem, OrderRepository, OrderService};

use crate::dto::{FindOrderInput, OrderOutput, PlaceOrderInput};
use crate::error::UseCaseResult;

/// Place an order for an existing customer.
///
/// Items snapshot the current product name and price. The order is stored first, then the
/// customer with the reward points it earned, then `OrderPlaced` is dispatched.
pub struct PlaceOrderUseCase {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    dispatcher: Arc<EventDispatcher<OrderEvent>>,
}

impl PlaceOrderUseCase {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        dispatcher: Arc<EventDispatcher<OrderEvent>>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: PlaceOrderInput) -> UseCaseResult<OrderOutput> {
        let mut customer = self
            .customers
            .find(&CustomerId::from(input.customer_id))
            .await?;

        let mut items = Vec::with_capacity(input.items.len());
        for line in input.items {
            let product = self.products.find(&ProductId::from(line.product_id)).await?;
            items.push(OrderItem::for_product(&product, line.quantity)?);
        }

        let order = OrderService::place_order(&mut customer, items)?;

        self.orders.create(&order).await?;
        self.customers.update(&customer).await?;
        tracing::info!(
            order_id = %order.id(),
            customer_id = %customer.id(),
            total = order.total(),
            reward_points = customer.reward_points(),
            "order placed"
        );

        self.dispatcher.notify(&OrderEvent::placed(&order, Utc::now()))?;

        Ok(OrderOutput::from(&order))
    }
}

pub struct FindOrderUseCase {
    orders: Arc<dyn OrderRepository>,
}

impl FindOrderUseCase {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn execute(&self, input: FindOrderInput) -> UseCaseResult<OrderOutput> {
        let order = self.orders.find(&OrderId::from(input.id)).await?;
        Ok(OrderOutput::from(&order))
    }
}
