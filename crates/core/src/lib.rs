//! `boxoffice-core` — shared domain building blocks.
//!
//! Identifiers, identity/value markers and the domain error type. Nothing in
//! here knows about concerts or tickets.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ConcertId, TicketId};
pub use value_object::ValueObject;
