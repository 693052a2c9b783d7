use crate::models::roles::AssignedRole;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    /// Comma-joined canonical role labels, e.g. "TCA, Proctor". Validated
    /// against the role vocabulary on write; see [`StaffMember::role_set`].
    pub roles: String,
    pub certifications_trainings: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl StaffMember {
    /// The member's role capabilities as typed values. Labels stored before
    /// the vocabulary was enforced are skipped rather than failing the read.
    pub fn role_set(&self) -> Vec<AssignedRole> {
        self.roles
            .split(',')
            .filter_map(|label| AssignedRole::from_str(label).ok())
            .collect()
    }
}

/// Canonical storage encoding for a set of role capabilities.
pub fn join_roles(roles: &[AssignedRole]) -> String {
    roles
        .iter()
        .map(AssignedRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
