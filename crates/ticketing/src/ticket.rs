use serde::{Deserialize, Serialize};

use boxoffice_core::{ConcertId, Entity, TicketId};

use crate::concert::Concert;
use crate::zone::Zone;

/// Proof of one sold seat in one zone for one concert.
///
/// Holds a copy of the zone as it was at sale time. Never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    concert_id: ConcertId,
    band_name: String,
    zone: Zone,
}

impl Ticket {
    pub(crate) fn issue(concert: &Concert, zone: &Zone) -> Self {
        Self {
            id: TicketId::new(),
            concert_id: concert.id_typed(),
            band_name: concert.band_name().to_string(),
            zone: zone.clone(),
        }
    }

    pub fn id_typed(&self) -> TicketId {
        self.id
    }

    pub fn concert_id(&self) -> ConcertId {
        self.concert_id
    }

    pub fn band_name(&self) -> &str {
        &self.band_name
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Price paid, taken from the zone at sale time.
    pub fn price(&self) -> u64 {
        self.zone.price()
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
