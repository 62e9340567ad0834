pub mod errors;
pub mod uploads;
