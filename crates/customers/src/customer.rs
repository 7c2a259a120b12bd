use serde::Serialize;

use storefront_core::{
    ensure_valid, entity_id, DomainError, DomainResult, Entity, Notification, Repository,
    Validatable, Validator,
};

use crate::address::Address;

entity_id!(
    /// Customer identifier.
    CustomerId
);

/// Validation context for customers.
pub const CUSTOMER_CONTEXT: &str = "customer";

/// Entity: Customer.
///
/// A customer may exist without an address, but cannot be activated until it has one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// Build and validate a new, inactive customer without an address.
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<Self> {
        ensure_valid(Self {
            id,
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    /// Rename the customer. The new name goes through the same rules as construction.
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        *self = ensure_valid(candidate)?;
        Ok(())
    }

    /// Replace the address (always valid by construction).
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activate the customer.
    ///
    /// Fails with a precondition error when no address is set.
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::precondition(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credit reward points.
    ///
    /// Refused with a precondition error when `points` or the new balance is not finite.
    pub fn add_reward_points(&mut self, points: f64) -> DomainResult<()> {
        let balance = self.reward_points + points;
        if !points.is_finite() || !balance.is_finite() {
            return Err(DomainError::precondition(
                "Reward points must be a finite number",
            ));
        }
        self.reward_points = balance;
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const KIND: &'static str = CUSTOMER_CONTEXT;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Field rules for [`Customer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerValidator;

impl Validator<Customer> for CustomerValidator {
    fn validate(&self, candidate: &Customer) -> Notification {
        let mut notification = Notification::new();
        if candidate.id.is_blank() {
            notification.add(CUSTOMER_CONTEXT, "Id is required");
        }
        if candidate.name.trim().is_empty() {
            notification.add(CUSTOMER_CONTEXT, "Name is required");
        }
        notification
    }
}

impl Validatable for Customer {
    type Validator = CustomerValidator;
}

/// Builds customers with generated identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(name: impl Into<String>) -> DomainResult<Customer> {
        Customer::new(CustomerId::generate(), name)
    }

    pub fn create_with_address(name: impl Into<String>, address: Address) -> DomainResult<Customer> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}

/// Persistence port for customers.
pub trait CustomerRepository: Repository<Customer> {}

impl<R> CustomerRepository for R where R: Repository<Customer> + ?Sized {}
