pub mod catalog_dto;
pub mod schedule_dto;
