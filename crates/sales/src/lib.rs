//! Sales domain module: orders placed by customers.
//!
//! This crate contains business rules for orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod event;
pub mod handlers;
pub mod order;

pub use event::{OrderEvent, OrderPlaced, ORDER_PLACED};
pub use order::{
    Order, OrderFactory, OrderId, OrderItem, OrderItemId, OrderItemValidator, OrderRepository,
    OrderService, OrderValidator,
};
