//! Concert ticketing domain module.
//!
//! Venues with priced, capacity-limited zones; concerts booked at those venues;
//! and the in-memory service that sells tickets against zone capacity. No IO
//! beyond `tracing` output.

pub mod concert;
pub mod config;
pub mod location;
pub mod service;
pub mod system;
pub mod ticket;
pub mod zone;

pub use concert::Concert;
pub use config::{AvailabilityScope, ServiceConfig};
pub use location::Location;
pub use service::{ConcertService, SaleError};
pub use system::TicketSystem;
pub use ticket::Ticket;
pub use zone::Zone;
