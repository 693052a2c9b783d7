use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::roles::AssignedRole;
use crate::models::room::Room;
use crate::models::staff_member::StaffMember;
use crate::models::test_type::TestType;

fn default_duration() -> i64 {
    180
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTestTypePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default = "default_duration")]
    #[validate(range(min = 1))]
    pub default_duration_minutes: i64,
    pub technical_requirements: Option<String>,
    pub staffing_needs_description: Option<String>,
    pub admin_manual_link: Option<String>,
    pub training_materials_link: Option<String>,
    #[serde(default)]
    pub requires_readiness_check: bool,
    pub readiness_check_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestTypeResponse {
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

impl From<TestType> for TestTypeResponse {
    fn from(value: TestType) -> Self {
        Self {
            id: value.id,
            name: value.name,
            default_duration_minutes: value.default_duration_minutes,
            technical_requirements: value.technical_requirements,
            staffing_needs_description: value.staffing_needs_description,
            admin_manual_link: value.admin_manual_link,
            training_materials_link: value.training_materials_link,
            requires_readiness_check: value.requires_readiness_check,
            readiness_check_details: value.readiness_check_details,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoomPayload {
    #[validate(length(min = 1))]
    pub room_number_or_name: String,
    #[validate(range(min = 0))]
    pub capacity: i64,
    #[serde(default)]
    pub has_computers: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomResponse {
    pub id: i64,
    pub room_number_or_name: String,
    pub capacity: i64,
    pub has_computers: bool,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            room_number_or_name: value.room_number_or_name,
            capacity: value.capacity,
            has_computers: value.has_computers,
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStaffPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub contact_info: Option<String>,
    /// Role-capability labels, validated against the role vocabulary.
    #[serde(default)]
    pub roles: Vec<String>,
    pub certifications_trainings: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffResponse {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    pub roles: Vec<AssignedRole>,
    pub certifications_trainings: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl From<StaffMember> for StaffResponse {
    fn from(value: StaffMember) -> Self {
        let roles = value.role_set();
        Self {
            id: value.id,
            name: value.name,
            contact_info: value.contact_info,
            roles,
            certifications_trainings: value.certifications_trainings,
            created_at: value.created_at,
        }
    }
}
