pub mod profile_service;
pub mod prescription_service;
