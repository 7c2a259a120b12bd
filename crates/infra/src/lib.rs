//! Infrastructure layer: repository implementations behind the domain ports.

pub mod repository;

pub use repository::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};
