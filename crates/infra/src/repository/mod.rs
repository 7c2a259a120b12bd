//! Repository adapters.

pub mod in_memory;

pub use in_memory::InMemoryRepository;

use storefront_customers::Customer;
use storefront_products::Product;
use storefront_sales::Order;

pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;
pub type InMemoryProductRepository = InMemoryRepository<Product>;
pub type InMemoryOrderRepository = InMemoryRepository<Order>;
