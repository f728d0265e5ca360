//! Service configuration.
//!
//! Read from the environment by the process entry point; library code only
//! ever receives a built [`ServiceConfig`].

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, DomainResult};

/// Environment variable selecting the [`AvailabilityScope`].
pub const AVAILABILITY_SCOPE_VAR: &str = "BOXOFFICE_AVAILABILITY_SCOPE";

/// Which sold tickets count against a zone's capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityScope {
    /// Every sold ticket whose zone has the same name, across all concerts.
    ///
    /// Two unrelated concerts that both define a zone "A" share its capacity.
    #[default]
    ZoneName,
    /// Only tickets sold for the same concert and zone name.
    ConcertZone,
}

impl AvailabilityScope {
    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityScope::ZoneName => "zone-name",
            AvailabilityScope::ConcertZone => "concert-zone",
        }
    }
}

impl core::fmt::Display for AvailabilityScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "zone-name" => Ok(AvailabilityScope::ZoneName),
            "concert-zone" => Ok(AvailabilityScope::ConcertZone),
            other => Err(DomainError::validation(format!(
                "unknown availability scope: {other} (expected zone-name or concert-zone)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub availability_scope: AvailabilityScope,
}

impl ServiceConfig {
    /// Build from process environment variables; unset variables keep defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_scope_value(std::env::var(AVAILABILITY_SCOPE_VAR).ok().as_deref())
    }

    fn from_scope_value(value: Option<&str>) -> DomainResult<Self> {
        let availability_scope = match value {
            None => AvailabilityScope::default(),
            Some(raw) => raw.parse()?,
        };
        Ok(Self { availability_scope })
    }
}
