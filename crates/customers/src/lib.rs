//! Customers domain module.
//!
//! This crate contains business rules for customers and their addresses, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod address;
pub mod customer;
pub mod event;
pub mod handlers;

pub use address::{Address, AddressValidator};
pub use customer::{Customer, CustomerFactory, CustomerId, CustomerRepository, CustomerValidator};
pub use event::{
    CustomerAddressChanged, CustomerCreated, CustomerEvent, CUSTOMER_ADDRESS_CHANGED,
    CUSTOMER_CREATED,
};
