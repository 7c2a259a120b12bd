//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod event;
pub mod handlers;
pub mod product;

pub use event::{ProductCreated, ProductEvent, PRODUCT_CREATED};
pub use product::{
    Product, ProductFactory, ProductId, ProductRepository, ProductService, ProductValidator,
};
