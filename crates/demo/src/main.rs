use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;

use boxoffice_ticketing::{ConcertService, Location, ServiceConfig, TicketSystem};

fn main() -> anyhow::Result<()> {
    boxoffice_observability::init();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    let system = TicketSystem::new(Arc::new(ConcertService::new(config)));

    tracing::debug!(
        availability_scope = %system.concert_service().config().availability_scope,
        "starting box office"
    );

    system.create_event(Utc::now(), "The First", Location::sbrubbles());

    // band not found
    system.sell_ticket("Second Thoughts", "Premium");

    // zone not found
    system.sell_ticket("The First", "Premium");

    system.sell_ticket("The First", "A");

    // zone A holds a single seat
    system.sell_ticket("The First", "A");

    system.sell_ticket("The First", "B");

    tracing::info!(
        concerts = system.concert_service().concert_count(),
        tickets_sold = system.concert_service().sold_count(),
        "done"
    );

    Ok(())
}
