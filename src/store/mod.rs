//! Persistence layer.

pub mod users;
