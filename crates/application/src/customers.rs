//! Customer use cases.

use std::sync::Arc;

use chrono::Utc;

use storefront_core::{Entity, Repository};
use storefront_customers::{CustomerEvent, CustomerFactory, CustomerId, CustomerRepository};
use storefront_events::EventDispatcher;

use crate::dto::{
    CreateCustomerInput, CustomerOutput, FindCustomerInput, ListCustomersOutput,
    UpdateCustomerInput,
};
use crate::error::UseCaseResult;

/// Create a customer, persist it, then dispatch `CustomerCreated`.
pub struct CreateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
    dispatcher: Arc<EventDispatcher<CustomerEvent>>,
}

impl CreateCustomerUseCase {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        dispatcher: Arc<EventDispatcher<CustomerEvent>>,
    ) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: CreateCustomerInput) -> UseCaseResult<CustomerOutput> {
        let customer = match input.address {
            Some(address) => CustomerFactory::create_with_address(input.name, address.to_address()?)?,
            None => CustomerFactory::create(input.name)?,
        };

        self.repository.create(&customer).await?;
        tracing::info!(customer_id = %customer.id(), "customer created");

        self.dispatcher
            .notify(&CustomerEvent::created(&customer, Utc::now()))?;

        Ok(CustomerOutput::from(&customer))
    }
}

pub struct FindCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl FindCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: FindCustomerInput) -> UseCaseResult<CustomerOutput> {
        let customer = self.repository.find(&CustomerId::from(input.id)).await?;
        Ok(CustomerOutput::from(&customer))
    }
}

pub struct ListCustomersUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> UseCaseResult<ListCustomersOutput> {
        let customers = self.repository.find_all().await?;
        Ok(ListCustomersOutput {
            customers: customers.iter().map(CustomerOutput::from).collect(),
        })
    }
}

/// Apply a partial update to a customer.
///
/// All changes are validated before anything is stored. `CustomerAddressChanged` is
/// dispatched after the write, and only when the address actually changed.
pub struct UpdateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
    dispatcher: Arc<EventDispatcher<CustomerEvent>>,
}

impl UpdateCustomerUseCase {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        dispatcher: Arc<EventDispatcher<CustomerEvent>>,
    ) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: UpdateCustomerInput) -> UseCaseResult<CustomerOutput> {
        let mut customer = self.repository.find(&CustomerId::from(input.id)).await?;

        if let Some(name) = input.name {
            customer.change_name(name)?;
        }

        let mut address_changed = false;
        if let Some(dto) = input.address {
            let address = dto.to_address()?;
            address_changed = customer.address() != Some(&address);
            customer.change_address(address);
        }

        // Activation runs last so a new address in the same request satisfies it.
        match input.active {
            Some(true) => customer.activate()?,
            Some(false) => customer.deactivate(),
            None => {}
        }

        self.repository.update(&customer).await?;
        tracing::info!(customer_id = %customer.id(), address_changed, "customer updated");

        if address_changed {
            if let Some(event) = CustomerEvent::address_changed(&customer, Utc::now()) {
                self.dispatcher.notify(&event)?;
            }
        }

        Ok(CustomerOutput::from(&customer))
    }
}
