use serde::{Deserialize, Serialize};

/// A treatment with its full daily slot catalog. In the `/available`
/// response `slots` holds only the remaining free labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub name: String,
    pub slots: Vec<String>,
}

/// The slice of a booking the availability calculator needs; other fields
/// of the stored document are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BookedSlot {
    #[serde(rename = "treatmentName")]
    pub treatment_name: String,
    pub slot: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub date: Option<String>,
}
