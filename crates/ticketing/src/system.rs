use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::location::Location;
use crate::service::ConcertService;

/// Caller-facing entry points over a shared [`ConcertService`].
///
/// Holds no state of its own. Outcomes are logged by the service; callers only
/// see whether the operation went through.
#[derive(Debug, Clone)]
pub struct TicketSystem {
    concert_service: Arc<ConcertService>,
}

impl TicketSystem {
    pub fn new(concert_service: Arc<ConcertService>) -> Self {
        Self { concert_service }
    }

    pub fn concert_service(&self) -> &ConcertService {
        &self.concert_service
    }

    /// Always `true`.
    pub fn create_event(
        &self,
        date: DateTime<Utc>,
        band_name: impl Into<String>,
        location: Location,
    ) -> bool {
        self.concert_service.create_event(date, band_name, location);
        true
    }

    pub fn sell_ticket(&self, band_name: &str, zone_name: &str) -> bool {
        self.concert_service.sell_ticket(band_name, zone_name).is_ok()
    }
}
