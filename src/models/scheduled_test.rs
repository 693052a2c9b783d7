use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Readiness-check state of a session. Starts at `NotRequired` or `Pending`
/// depending on the test type, and a pending check progresses to
/// `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum ReadinessStatus {
    NotRequired,
    Pending,
    Completed,
    Failed,
}

impl ReadinessStatus {
    pub fn initial_for(requires_readiness_check: bool) -> Self {
        if requires_readiness_check {
            ReadinessStatus::Pending
        } else {
            ReadinessStatus::NotRequired
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduledTest {
    pub id: i64,
    pub test_type_id: i64,
    pub room_id: i64,
    pub test_date: NaiveDate,
    pub start_time: NaiveTime,
    pub actual_duration_minutes: i64,
    pub expected_students: i64,
    pub readiness_check_status: ReadinessStatus,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_follows_test_type_flag() {
        assert_eq!(ReadinessStatus::initial_for(true), ReadinessStatus::Pending);
        assert_eq!(
            ReadinessStatus::initial_for(false),
            ReadinessStatus::NotRequired
        );
    }
}
