use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use shared_database::store::StoreClient;

use crate::models::Booking;

pub enum BookingOutcome {
    Created(Value),
    Duplicate(Value),
}

pub struct BookingService<'a> {
    store: &'a StoreClient,
}

impl<'a> BookingService<'a> {
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    pub async fn for_patient(&self, email: &str) -> Result<Vec<Value>> {
        debug!("Listing bookings for {}", email);
        self.store.find("bookings", &[("email", email)]).await
    }

    /// Insert the booking unless one already exists for the same
    /// (treatmentName, email, date) triple. Check-then-act: two concurrent
    /// identical requests can both pass the check unless the store carries
    /// a unique index on the triple.
    pub async fn create(&self, booking: Booking) -> Result<BookingOutcome> {
        let filters = [
            ("treatmentName", booking.treatment_name.as_str()),
            ("email", booking.email.as_str()),
            ("date", booking.date.as_str()),
        ];

        if let Some(existing) = self.store.find_one::<Value>("bookings", &filters).await? {
            debug!(
                "Duplicate booking for ({}, {}, {})",
                booking.treatment_name, booking.email, booking.date
            );
            return Ok(BookingOutcome::Duplicate(existing));
        }

        let inserted = self
            .store
            .insert_one("bookings", serde_json::to_value(&booking)?)
            .await?;

        Ok(BookingOutcome::Created(inserted))
    }
}
