use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;

use shared_database::store::StoreClient;

use crate::models::{BookedSlot, Service};

pub struct AvailabilityService<'a> {
    store: &'a StoreClient,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Every service with its slot list reduced to the labels not yet booked
    /// on `date`. Dates are compared by exact string equality, so an absent
    /// or malformed date matches no bookings and leaves every slot free.
    pub async fn available_on(&self, date: &str) -> Result<Vec<Service>> {
        debug!("Computing availability for date {:?}", date);

        let services: Vec<Service> = self.store.find("services", &[]).await?;
        let bookings: Vec<BookedSlot> = self.store.find("bookings", &[("date", date)]).await?;

        Ok(subtract_booked(services, &bookings))
    }
}

/// Remove each service's booked slots from its catalog, preserving the
/// catalog order. Bookings naming an unknown treatment are ignored.
pub fn subtract_booked(services: Vec<Service>, bookings: &[BookedSlot]) -> Vec<Service> {
    services
        .into_iter()
        .map(|mut service| {
            let booked: HashSet<&str> = bookings
                .iter()
                .filter(|b| b.treatment_name == service.name)
                .map(|b| b.slot.as_str())
                .collect();
            service.slots.retain(|slot| !booked.contains(slot.as_str()));
            service
        })
        .collect()
}
