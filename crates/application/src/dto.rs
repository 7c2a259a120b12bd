use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Entity};
use storefront_customers::{Address, Customer};
use storefront_products::Product;
use storefront_sales::{Order, OrderItem};

// -------------------------
// Customers
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl AddressDto {
    pub fn to_address(&self) -> DomainResult<Address> {
        Address::new(&self.street, self.number, &self.zip, &self.city)
    }
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number(),
            zip: address.zip().to_string(),
            city: address.city().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerInput {
    pub name: String,
    #[serde(default)]
    pub address: Option<AddressDto>,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<AddressDto>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindCustomerInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOutput {
    pub id: String,
    pub name: String,
    pub address: Option<AddressDto>,
    pub active: bool,
    pub reward_points: f64,
}

impl From<&Customer> for CustomerOutput {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            address: customer.address().map(AddressDto::from),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCustomersOutput {
    pub customers: Vec<CustomerOutput>,
}

// -------------------------
// Products
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindProductInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductOutput {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProductsOutput {
    pub products: Vec<ProductOutput>,
}

// -------------------------
// Orders
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderItemInput {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderInput {
    pub customer_id: String,
    pub items: Vec<PlaceOrderItemInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindOrderInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemOutput {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub total: f64,
}

impl From<&OrderItem> for OrderItemOutput {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id().to_string(),
            product_id: item.product_id().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            total: item.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutput {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItemOutput>,
    pub total: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            items: order.items().iter().map(OrderItemOutput::from).collect(),
            total: order.total(),
        }
    }
}
