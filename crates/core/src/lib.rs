//! `storefront-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! entities and value objects, the notification/validator pair used to build them, and
//! the repository seam infrastructure implements.

pub mod entity;
pub mod error;
pub mod id;
pub mod notification;
pub mod repository;
pub mod validator;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationErrors};
pub use id::EntityId;
pub use notification::{Notification, NotificationError};
pub use repository::Repository;
pub use validator::{ensure_valid, Validatable, Validator};
pub use value_object::ValueObject;
