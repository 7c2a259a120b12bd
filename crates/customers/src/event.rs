use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_events::Event;

use crate::address::Address;
use crate::customer::{Customer, CustomerId};

pub const CUSTOMER_CREATED: &str = "CustomerCreated";
pub const CUSTOMER_ADDRESS_CHANGED: &str = "CustomerAddressChanged";

/// Event: CustomerCreated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerCreated {
    pub customer_id: CustomerId,
    pub name: String,
    pub address: Option<Address>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CustomerAddressChanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerAddressChanged {
    pub customer_id: CustomerId,
    pub name: String,
    pub address: Address,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CustomerEvent {
    CustomerCreated(CustomerCreated),
    CustomerAddressChanged(CustomerAddressChanged),
}

impl CustomerEvent {
    pub fn created(customer: &Customer, occurred_at: DateTime<Utc>) -> Self {
        use storefront_core::Entity;

        Self::CustomerCreated(CustomerCreated {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            address: customer.address().cloned(),
            occurred_at,
        })
    }

    /// `None` when the customer has no address to report.
    pub fn address_changed(customer: &Customer, occurred_at: DateTime<Utc>) -> Option<Self> {
        use storefront_core::Entity;

        let address = customer.address()?.clone();
        Some(Self::CustomerAddressChanged(CustomerAddressChanged {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            address,
            occurred_at,
        }))
    }
}

impl Event for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::CustomerCreated(_) => CUSTOMER_CREATED,
            CustomerEvent::CustomerAddressChanged(_) => CUSTOMER_ADDRESS_CHANGED,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::CustomerCreated(e) => e.occurred_at,
            CustomerEvent::CustomerAddressChanged(e) => e.occurred_at,
        }
    }
}
