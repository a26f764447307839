pub mod repositories;
pub mod uploads;
