//! PostgreSQL persistence for events and accounts.

pub mod events;
pub mod users;

pub use events::EventStore;
pub use users::UserStore;
