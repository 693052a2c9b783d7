use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A staff role on a scheduled test. The vocabulary is closed: unknown
/// labels are rejected at the boundary instead of being stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum AssignedRole {
    Coordinator,
    Proctor,
    #[serde(rename = "TCA")]
    #[sqlx(rename = "TCA")]
    Tca,
    #[serde(rename = "Technical Monitor")]
    #[sqlx(rename = "Technical Monitor")]
    TechnicalMonitor,
}

impl AssignedRole {
    pub const ALL: [AssignedRole; 4] = [
        AssignedRole::Coordinator,
        AssignedRole::Proctor,
        AssignedRole::Tca,
        AssignedRole::TechnicalMonitor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignedRole::Coordinator => "Coordinator",
            AssignedRole::Proctor => "Proctor",
            AssignedRole::Tca => "TCA",
            AssignedRole::TechnicalMonitor => "Technical Monitor",
        }
    }
}

impl std::fmt::Display for AssignedRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssignedRole {
    type Err = crate::error::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let label = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| {
                crate::error::Error::Validation(format!("Unknown staff role: \"{}\"", label))
            })
    }
}
