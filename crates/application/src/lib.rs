//! Application layer: use cases that compose factories, repositories and event dispatchers.
//!
//! Every use case takes a serde input DTO and returns a serde output DTO. Commands persist
//! through a repository port first and only then dispatch the matching domain event.
//! A failing event handler is reported to the caller, but the write it follows is **not**
//! rolled back.

pub mod customers;
pub mod dto;
pub mod error;
pub mod orders;
pub mod products;
pub mod wiring;

pub use customers::{
    CreateCustomerUseCase, FindCustomerUseCase, ListCustomersUseCase, UpdateCustomerUseCase,
};
pub use error::{UseCaseError, UseCaseResult};
pub use orders::{FindOrderUseCase, PlaceOrderUseCase};
pub use products::{
    CreateProductUseCase, FindProductUseCase, ListProductsUseCase, UpdateProductUseCase,
};
pub use wiring::Dispatchers;
