//! Venues and their zone layout.

use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

use crate::zone::Zone;

/// A venue: a name plus an ordered list of zones.
///
/// Zone names are expected to be unique within a location but this is not
/// checked; lookups return the first zone with a matching name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    zones: Vec<Zone>,
}

impl ValueObject for Location {}

impl Location {
    pub fn new(name: impl Into<String>, zones: Vec<Zone>) -> Self {
        Self {
            name: name.into(),
            zones,
        }
    }

    /// The "Sbrubbles" catalog venue: zones A, B and C.
    pub fn sbrubbles() -> Self {
        let premium = Zone::new("A", 200, 1);
        Self::new(
            "Sbrubbles",
            vec![
                premium.clone(),
                premium.with_name("B").with_price(100).with_capacity(10),
                premium.with_name("C").with_price(50).with_capacity(20),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// First zone named `zone_name` (exact match).
    pub fn zone(&self, zone_name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name() == zone_name)
    }
}
