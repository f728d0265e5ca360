//! Concert registration and ticket sales.
//!
//! [`ConcertService`] owns every registered concert and every sold ticket. Both
//! lists are append-only and sit behind a single lock, so the availability
//! check and the ticket append of one sale are never interleaved with another
//! sale.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use boxoffice_core::ConcertId;

use crate::concert::Concert;
use crate::config::{AvailabilityScope, ServiceConfig};
use crate::location::Location;
use crate::ticket::Ticket;
use crate::zone::Zone;

/// Why a sale was refused. None of these are fatal; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaleError {
    /// No registered concert has this band name.
    #[error("Concert not found: {band_name}")]
    ConcertNotFound { band_name: String },

    /// The concert's location has no zone with this name.
    #[error("Zone not found: {zone_name} (concert: {band_name})")]
    ZoneNotFound {
        band_name: String,
        zone_name: String,
    },

    /// Every seat in the zone is already sold.
    #[error("Zone has sold out: {zone_name} (concert: {band_name})")]
    ZoneSoldOut {
        band_name: String,
        zone_name: String,
    },
}

#[derive(Debug, Default)]
struct Ledger {
    concerts: Vec<Concert>,
    sold_tickets: Vec<Ticket>,
}

impl Ledger {
    /// First registered concert for `band_name`.
    fn concert(&self, band_name: &str) -> Result<&Concert, SaleError> {
        self.concerts
            .iter()
            .find(|c| c.band_name() == band_name)
            .ok_or_else(|| SaleError::ConcertNotFound {
                band_name: band_name.to_string(),
            })
    }

    fn zone<'a>(&self, concert: &'a Concert, zone_name: &str) -> Result<&'a Zone, SaleError> {
        concert
            .location()
            .zone(zone_name)
            .ok_or_else(|| SaleError::ZoneNotFound {
                band_name: concert.band_name().to_string(),
                zone_name: zone_name.to_string(),
            })
    }

    fn sold_against(&self, scope: AvailabilityScope, concert: &Concert, zone: &Zone) -> usize {
        self.sold_tickets
            .iter()
            .filter(|t| t.zone().name() == zone.name())
            .filter(|t| match scope {
                AvailabilityScope::ZoneName => true,
                AvailabilityScope::ConcertZone => t.concert_id() == concert.id_typed(),
            })
            .count()
    }

    fn availability(&self, scope: AvailabilityScope, concert: &Concert, zone: &Zone) -> u32 {
        let sold = u32::try_from(self.sold_against(scope, concert, zone)).unwrap_or(u32::MAX);
        zone.capacity().saturating_sub(sold)
    }

    fn sell(
        &mut self,
        scope: AvailabilityScope,
        band_name: &str,
        zone_name: &str,
    ) -> Result<Ticket, SaleError> {
        let ticket = {
            let concert = self.concert(band_name)?;
            let zone = self.zone(concert, zone_name)?;

            if self.availability(scope, concert, zone) == 0 {
                return Err(SaleError::ZoneSoldOut {
                    band_name: band_name.to_string(),
                    zone_name: zone_name.to_string(),
                });
            }

            Ticket::issue(concert, zone)
        };

        self.sold_tickets.push(ticket.clone());
        Ok(ticket)
    }
}

/// The single owner of concert and ticket state.
///
/// Construct one per process and share it (e.g. behind an `Arc`) with every
/// collaborator that needs it.
#[derive(Debug, Default)]
pub struct ConcertService {
    config: ServiceConfig,
    ledger: Mutex<Ledger>,
}

impl ConcertService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    // The ledger is append-only, so a panic while the lock was held cannot
    // leave it half-updated.
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a concert. Never rejected: duplicate band names are accepted
    /// and later lookups resolve to the earliest registration.
    pub fn create_event(
        &self,
        date: DateTime<Utc>,
        band_name: impl Into<String>,
        location: Location,
    ) -> ConcertId {
        let concert = Concert::new(date, band_name, location);
        let id = concert.id_typed();

        info!(
            concert_id = %id,
            band = concert.band_name(),
            location = concert.location().name(),
            "{} registered to play on {} at {}",
            concert.band_name(),
            concert.date(),
            concert.location().name()
        );

        self.ledger().concerts.push(concert);
        id
    }

    /// Sell one ticket for `band_name` in `zone_name`.
    ///
    /// Lookups are exact and first-match-wins. Availability is recomputed from
    /// the sold tickets on every call, counted per the configured
    /// [`AvailabilityScope`]. A rejected sale leaves the ledger untouched.
    pub fn sell_ticket(&self, band_name: &str, zone_name: &str) -> Result<Ticket, SaleError> {
        let result = self
            .ledger()
            .sell(self.config.availability_scope, band_name, zone_name);

        match &result {
            Ok(ticket) => info!(
                ticket_id = %ticket.id_typed(),
                band = band_name,
                zone = zone_name,
                price = ticket.price(),
                "Ticket sold for {band_name} on zone {zone_name}"
            ),
            Err(err) => warn!(band = band_name, zone = zone_name, "{err}"),
        }

        result
    }

    /// Seats still available for `band_name` in `zone_name`.
    pub fn availability(&self, band_name: &str, zone_name: &str) -> Result<u32, SaleError> {
        let ledger = self.ledger();
        let concert = ledger.concert(band_name)?;
        let zone = ledger.zone(concert, zone_name)?;
        Ok(ledger.availability(self.config.availability_scope, concert, zone))
    }

    pub fn concert_count(&self) -> usize {
        self.ledger().concerts.len()
    }

    pub fn sold_count(&self) -> usize {
        self.ledger().sold_tickets.len()
    }

    /// Tickets sold in any zone named `zone_name`, across all concerts.
    pub fn tickets_sold_for_zone(&self, zone_name: &str) -> usize {
        self.ledger()
            .sold_tickets
            .iter()
            .filter(|t| t.zone().name() == zone_name)
            .count()
    }

    /// Snapshot of every sold ticket, in sale order.
    pub fn sold_tickets(&self) -> Vec<Ticket> {
        self.ledger().sold_tickets.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn service_with(scope: AvailabilityScope) -> ConcertService {
        ConcertService::new(ServiceConfig {
            availability_scope: scope,
        })
    }

    fn booked_service() -> ConcertService {
        let service = ConcertService::default();
        service.create_event(test_time(), "The First", Location::sbrubbles());
        service
    }

    #[test]
    fn create_event_always_appends_one_concert() {
        let service = ConcertService::default();
        assert_eq!(service.concert_count(), 0);

        let first = service.create_event(test_time(), "The First", Location::sbrubbles());
        let second = service.create_event(test_time(), "The First", Location::sbrubbles());

        assert_ne!(first, second);
        assert_eq!(service.concert_count(), 2);
    }

    #[test]
    fn unknown_band_is_rejected_without_selling() {
        let service = booked_service();

        let err = service.sell_ticket("Second Thoughts", "A").unwrap_err();

        assert_eq!(
            err,
            SaleError::ConcertNotFound {
                band_name: "Second Thoughts".to_string()
            }
        );
        assert_eq!(service.sold_count(), 0);
    }

    #[test]
    fn unknown_zone_is_rejected_without_selling() {
        let service = booked_service();

        let err = service.sell_ticket("The First", "Premium").unwrap_err();

        assert!(matches!(
            err,
            SaleError::ZoneNotFound { ref zone_name, .. } if zone_name == "Premium"
        ));
        assert_eq!(service.sold_count(), 0);
    }

    #[test]
    fn band_lookup_is_case_sensitive() {
        let service = booked_service();

        let err = service.sell_ticket("the first", "A").unwrap_err();

        assert!(matches!(err, SaleError::ConcertNotFound { .. }));
    }

    #[test]
    fn second_sale_of_single_seat_zone_is_sold_out() {
        let service = booked_service();

        let ticket = service.sell_ticket("The First", "A").unwrap();
        assert_eq!(ticket.band_name(), "The First");
        assert_eq!(ticket.zone().name(), "A");
        assert_eq!(ticket.price(), 200);

        let err = service.sell_ticket("The First", "A").unwrap_err();
        assert!(matches!(err, SaleError::ZoneSoldOut { .. }));
        assert_eq!(service.tickets_sold_for_zone("A"), 1);
        assert_eq!(service.availability("The First", "A").unwrap(), 0);
    }

    #[test]
    fn availability_counts_down_per_sale() {
        let service = booked_service();
        assert_eq!(service.availability("The First", "B").unwrap(), 10);

        service.sell_ticket("The First", "B").unwrap();
        service.sell_ticket("The First", "B").unwrap();

        assert_eq!(service.availability("The First", "B").unwrap(), 8);
        assert_eq!(service.availability("The First", "C").unwrap(), 20);
    }

    #[test]
    fn availability_reports_lookup_failures() {
        let service = booked_service();

        assert!(matches!(
            service.availability("Nobody", "A"),
            Err(SaleError::ConcertNotFound { .. })
        ));
        assert!(matches!(
            service.availability("The First", "Z"),
            Err(SaleError::ZoneNotFound { .. })
        ));
    }

    #[test]
    fn duplicate_band_names_resolve_to_first_registration() {
        let service = ConcertService::default();
        let first = service.create_event(test_time(), "Echo", Location::sbrubbles());
        service.create_event(
            test_time(),
            "Echo",
            Location::new("Garage", vec![Zone::new("Pit", 30, 100)]),
        );

        let ticket = service.sell_ticket("Echo", "A").unwrap();
        assert_eq!(ticket.concert_id(), first);

        // "Pit" only exists at the second registration, which is never consulted.
        assert!(matches!(
            service.sell_ticket("Echo", "Pit"),
            Err(SaleError::ZoneNotFound { .. })
        ));
    }

    #[test]
    fn zone_name_scope_shares_capacity_across_concerts() {
        let service = service_with(AvailabilityScope::ZoneName);
        service.create_event(test_time(), "The First", Location::sbrubbles());
        service.create_event(test_time(), "The Second", Location::sbrubbles());

        service.sell_ticket("The First", "A").unwrap();

        assert!(matches!(
            service.sell_ticket("The Second", "A"),
            Err(SaleError::ZoneSoldOut { .. })
        ));
        assert_eq!(service.availability("The Second", "A").unwrap(), 0);
    }

    #[test]
    fn concert_zone_scope_keeps_capacity_per_concert() {
        let service = service_with(AvailabilityScope::ConcertZone);
        service.create_event(test_time(), "The First", Location::sbrubbles());
        service.create_event(test_time(), "The Second", Location::sbrubbles());

        service.sell_ticket("The First", "A").unwrap();
        service.sell_ticket("The Second", "A").unwrap();

        assert!(matches!(
            service.sell_ticket("The First", "A"),
            Err(SaleError::ZoneSoldOut { .. })
        ));
        assert_eq!(service.tickets_sold_for_zone("A"), 2);
    }

    #[test]
    fn zero_capacity_zone_is_sold_out_from_the_start() {
        let service = ConcertService::default();
        service.create_event(
            test_time(),
            "Ghosts",
            Location::new("Closed Hall", vec![Zone::new("Balcony", 10, 0)]),
        );

        assert!(matches!(
            service.sell_ticket("Ghosts", "Balcony"),
            Err(SaleError::ZoneSoldOut { .. })
        ));
        assert_eq!(service.sold_count(), 0);
    }

    #[test]
    fn sale_errors_name_the_rejection_reason() {
        let not_found = SaleError::ConcertNotFound {
            band_name: "Second Thoughts".to_string(),
        };
        let no_zone = SaleError::ZoneNotFound {
            band_name: "The First".to_string(),
            zone_name: "Premium".to_string(),
        };
        let sold_out = SaleError::ZoneSoldOut {
            band_name: "The First".to_string(),
            zone_name: "A".to_string(),
        };

        assert_eq!(not_found.to_string(), "Concert not found: Second Thoughts");
        assert_eq!(no_zone.to_string(), "Zone not found: Premium (concert: The First)");
        assert_eq!(sold_out.to_string(), "Zone has sold out: A (concert: The First)");
    }

    #[test]
    fn service_keeps_the_config_it_was_built_with() {
        let service = service_with(AvailabilityScope::ConcertZone);
        assert_eq!(service.config().availability_scope, AvailabilityScope::ConcertZone);
        assert_eq!(ConcertService::default().config(), ServiceConfig::default());
    }

    #[test]
    fn sold_tickets_are_kept_in_sale_order() {
        let service = booked_service();
        let a = service.sell_ticket("The First", "A").unwrap();
        let b = service.sell_ticket("The First", "B").unwrap();
        let _ = service.sell_ticket("The First", "A");

        assert_eq!(service.sold_tickets(), vec![a, b]);
    }

    #[test]
    fn concurrent_sales_never_oversell() {
        let service = Arc::new(booked_service());

        let sold: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let service = Arc::clone(&service);
                    scope.spawn(move || {
                        (0..5)
                            .filter(|_| service.sell_ticket("The First", "B").is_ok())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(sold, 10);
        assert_eq!(service.tickets_sold_for_zone("B"), 10);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a zone never sells more than its capacity.
            #[test]
            fn never_sells_beyond_capacity(capacity in 0u32..40, attempts in 0usize..80) {
                let service = ConcertService::default();
                service.create_event(
                    test_time(),
                    "Prop Band",
                    Location::new("Prop Hall", vec![Zone::new("Floor", 25, capacity)]),
                );

                let successes = (0..attempts)
                    .filter(|_| service.sell_ticket("Prop Band", "Floor").is_ok())
                    .count();

                let expected = attempts.min(capacity as usize);
                prop_assert_eq!(successes, expected);
                prop_assert_eq!(service.tickets_sold_for_zone("Floor"), expected);

                if attempts > capacity as usize {
                    let is_sold_out = matches!(
                        service.sell_ticket("Prop Band", "Floor"),
                        Err(SaleError::ZoneSoldOut { .. })
                    );
                    prop_assert!(is_sold_out);
                }
            }

            /// Property: rejected lookups never touch the sold tickets.
            #[test]
            fn failed_lookups_do_not_mutate(
                band in "[A-Za-z ]{1,20}",
                zone in "[A-Za-z]{1,10}"
            ) {
                let service = booked_service();
                service.sell_ticket("The First", "B").unwrap();
                let before = service.sold_tickets();

                let result = service.sell_ticket(&band, &zone);

                if result.is_err() {
                    prop_assert_eq!(service.sold_tickets(), before);
                } else {
                    prop_assert_eq!(service.sold_count(), before.len() + 1);
                }
            }
        }
    }
}
