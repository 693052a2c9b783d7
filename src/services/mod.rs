pub mod catalog_service;
pub mod schedule_service;
