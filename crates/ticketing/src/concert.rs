use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::{ConcertId, Entity};

use crate::location::Location;

/// A scheduled performance of a band at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    id: ConcertId,
    date: DateTime<Utc>,
    band_name: String,
    location: Location,
}

impl Concert {
    pub fn new(date: DateTime<Utc>, band_name: impl Into<String>, location: Location) -> Self {
        Self {
            id: ConcertId::new(),
            date,
            band_name: band_name.into(),
            location,
        }
    }

    pub fn id_typed(&self) -> ConcertId {
        self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn band_name(&self) -> &str {
        &self.band_name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl Entity for Concert {
    type Id = ConcertId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
