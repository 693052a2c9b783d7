use crate::models::roles::AssignedRole;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffAssignment {
    pub id: i64,
    pub scheduled_test_id: i64,
    pub staff_member_id: i64,
    pub assigned_role: AssignedRole,
}
