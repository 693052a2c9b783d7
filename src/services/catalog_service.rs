use crate::dto::catalog_dto::{CreateRoomPayload, CreateStaffPayload, CreateTestTypePayload};
use crate::error::{Error, Result};
use crate::models::roles::AssignedRole;
use crate::models::room::Room;
use crate::models::staff_member::{join_roles, StaffMember};
use crate::models::test_type::TestType;
use sqlx::SqlitePool;
use std::str::FromStr;

/// CRUD over the independently-owned catalog entities: test types, rooms,
/// and staff members.
#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_test_type(&self, payload: CreateTestTypePayload) -> Result<TestType> {
        let test_type = sqlx::query_as::<_, TestType>(
            r#"
            INSERT INTO test_types (
                name, default_duration_minutes, technical_requirements,
                staffing_needs_description, admin_manual_link,
                training_materials_link, requires_readiness_check,
                readiness_check_details
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(payload.default_duration_minutes)
        .bind(&payload.technical_requirements)
        .bind(&payload.staffing_needs_description)
        .bind(&payload.admin_manual_link)
        .bind(&payload.training_materials_link)
        .bind(payload.requires_readiness_check)
        .bind(&payload.readiness_check_details)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| duplicate_to_validation(err, "Test type", &payload.name))?;

        Ok(test_type)
    }

    pub async fn list_test_types(&self) -> Result<Vec<TestType>> {
        let items = sqlx::query_as::<_, TestType>("SELECT * FROM test_types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn create_room(&self, payload: CreateRoomPayload) -> Result<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (room_number_or_name, capacity, has_computers, notes)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.room_number_or_name)
        .bind(payload.capacity)
        .bind(payload.has_computers)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| duplicate_to_validation(err, "Room", &payload.room_number_or_name))?;

        Ok(room)
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let items = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_number_or_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn create_staff_member(&self, payload: CreateStaffPayload) -> Result<StaffMember> {
        let roles = payload
            .roles
            .iter()
            .map(|label| AssignedRole::from_str(label))
            .collect::<Result<Vec<_>>>()?;

        let member = sqlx::query_as::<_, StaffMember>(
            r#"
            INSERT INTO staff_members (name, contact_info, roles, certifications_trainings)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.contact_info)
        .bind(join_roles(&roles))
        .bind(&payload.certifications_trainings)
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn list_staff(&self) -> Result<Vec<StaffMember>> {
        let items = sqlx::query_as::<_, StaffMember>("SELECT * FROM staff_members ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }
}

fn duplicate_to_validation(err: sqlx::Error, kind: &str, name: &str) -> Error {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Error::Validation(format!("{} \"{}\" already exists", kind, name))
        }
        _ => Error::from(err),
    }
}
