use serde::{Deserialize, Serialize};

/// A booking as submitted by the client. `treatment_name` references
/// `Service.name`; `date` is an opaque string compared by exact equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "treatmentName")]
    pub treatment_name: String,
    pub email: String,
    pub date: String,
    pub slot: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    pub email: Option<String>,
}
