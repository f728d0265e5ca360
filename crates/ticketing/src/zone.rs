use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

/// A priced, capacity-bounded seating category within a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    capacity: u32,
}

impl ValueObject for Zone {}

impl Zone {
    pub fn new(name: impl Into<String>, price: u64, capacity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            capacity,
        }
    }

    /// Copy of this zone under another name; price and capacity are kept.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_price(&self, price: u64) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    pub fn with_capacity(&self, capacity: u32) -> Self {
        Self {
            capacity,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
