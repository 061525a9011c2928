pub mod direction;
pub mod transit_service_error;
