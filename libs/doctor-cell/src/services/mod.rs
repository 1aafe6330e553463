pub mod doctor;

pub use doctor::{DoctorOutcome, DoctorService};
