pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{catalog_service::CatalogService, schedule_service::ScheduleService};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog_service: CatalogService,
    pub schedule_service: ScheduleService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let catalog_service = CatalogService::new(pool.clone());
        let schedule_service = ScheduleService::new(pool.clone());

        Self {
            pool,
            catalog_service,
            schedule_service,
        }
    }
}
