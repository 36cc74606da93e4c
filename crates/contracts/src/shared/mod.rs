pub mod datetime_local;
pub mod errors;
