//! Domain events and the synchronous in-process dispatcher that routes them.

pub mod dispatcher;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, SubscriptionId};
pub use event::Event;
pub use handler::EventHandler;
