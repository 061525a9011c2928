pub mod presenter;
pub mod transit_service;
