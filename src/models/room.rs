use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub room_number_or_name: String,
    pub capacity: i64,
    pub has_computers: bool,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
