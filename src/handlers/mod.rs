//! HTTP handlers, one module per resource.

pub mod events;
pub mod hello;
pub mod users;
