use serde::Serialize;

use storefront_core::{ensure_valid, DomainResult, Notification, Validatable, Validator, ValueObject};

/// Validation context for addresses.
pub const ADDRESS_CONTEXT: &str = "address";

/// Postal address (value object).
///
/// Built only through [`Address::new`], which validates every field; compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        ensure_valid(Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

/// Field rules for [`Address`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressValidator;

impl Validator<Address> for AddressValidator {
    fn validate(&self, candidate: &Address) -> Notification {
        let mut notification = Notification::new();
        if candidate.street.trim().is_empty() {
            notification.add(ADDRESS_CONTEXT, "Street is required");
        }
        if candidate.number == 0 {
            notification.add(ADDRESS_CONTEXT, "Number must be greater than zero");
        }
        if candidate.zip.trim().is_empty() {
            notification.add(ADDRESS_CONTEXT, "Zip is required");
        }
        if candidate.city.trim().is_empty() {
            notification.add(ADDRESS_CONTEXT, "City is required");
        }
        notification
    }
}

impl Validatable for Address {
    type Validator = AddressValidator;
}
