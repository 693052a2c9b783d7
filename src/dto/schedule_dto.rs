use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::roles::AssignedRole;
use crate::models::scheduled_test::ReadinessStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleSessionPayload {
    pub test_type_id: i64,
    /// YYYY-MM-DD
    #[validate(length(min = 1))]
    pub test_date: String,
    /// 24-hour HH:MM
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(range(min = 1))]
    pub actual_duration_minutes: i64,
    pub room_id: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub expected_students: i64,
    pub notes: Option<String>,
    /// Role label -> ordered staff-member ids. Blank ids model unfilled
    /// slots on the scheduling form and are skipped.
    #[serde(default)]
    pub role_assignments: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionCreatedResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentView {
    pub staff_member_id: i64,
    pub staff_name: String,
    pub assigned_role: AssignedRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionView {
    pub id: i64,
    pub test_type_id: i64,
    pub test_type_name: String,
    pub room_id: i64,
    pub room_name: String,
    pub test_date: NaiveDate,
    #[schema(value_type = String)]
    pub start_time: NaiveTime,
    pub actual_duration_minutes: i64,
    pub expected_students: i64,
    pub readiness_check_status: ReadinessStatus,
    pub notes: Option<String>,
    pub assignments: Vec<AssignmentView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayGroup {
    /// e.g. "2024-06-07 (Friday)"
    pub date_label: String,
    pub sessions: Vec<SessionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleListResponse {
    pub days: Vec<DayGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReadinessPayload {
    pub status: ReadinessStatus,
}
