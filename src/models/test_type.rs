use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestType {
    pub id: i64,
    pub name: String,
    pub default_duration_minutes: i64,
    pub technical_requirements: Option<String>,
    pub staffing_needs_description: Option<String>,
    pub admin_manual_link: Option<String>,
    pub training_materials_link: Option<String>,
    pub requires_readiness_check: bool,
    pub readiness_check_details: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
