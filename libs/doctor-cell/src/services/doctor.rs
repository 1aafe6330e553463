use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use shared_database::store::StoreClient;

use crate::models::{CreateDoctorRequest, Doctor};

pub enum DoctorOutcome {
    Created(Value),
    Duplicate(Value),
}

pub struct DoctorService<'a> {
    store: &'a StoreClient,
}

impl<'a> DoctorService<'a> {
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Doctor>> {
        debug!("Listing doctors");
        self.store.find("doctors", &[]).await
    }

    /// Insert unless a doctor with the same (name, email) pair exists.
    /// Best-effort like the booking check; not transactional.
    pub async fn create(&self, request: CreateDoctorRequest) -> Result<DoctorOutcome> {
        let filters = [
            ("name", request.name.as_str()),
            ("email", request.email.as_str()),
        ];

        if let Some(existing) = self.store.find_one::<Value>("doctors", &filters).await? {
            debug!("Duplicate doctor ({}, {})", request.name, request.email);
            return Ok(DoctorOutcome::Duplicate(existing));
        }

        let inserted = self
            .store
            .insert_one("doctors", serde_json::to_value(&request)?)
            .await?;

        Ok(DoctorOutcome::Created(inserted))
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<Value>> {
        debug!("Deleting doctor {}", id);
        self.store.delete_by_id("doctors", id).await
    }
}
