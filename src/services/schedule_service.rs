use crate::dto::schedule_dto::{
    AssignmentView, DayGroup, ScheduleSessionPayload, SessionView, UpdateReadinessPayload,
};
use crate::error::{Error, Result};
use crate::models::roles::AssignedRole;
use crate::models::room::Room;
use crate::models::scheduled_test::ReadinessStatus;
use crate::models::test_type::TestType;
use crate::utils::validation::{day_label, ensure_test_day, is_test_day, parse_start_time, parse_test_date};
use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashMap;
use std::str::FromStr;

/// Creates a scheduled test and its staff assignments as one unit, and
/// serves the grouped Friday/Saturday schedule.
#[derive(Clone)]
pub struct ScheduleService {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct SessionRow {
    id: i64,
    test_type_id: i64,
    test_type_name: String,
    room_id: i64,
    room_name: String,
    test_date: NaiveDate,
    start_time: NaiveTime,
    actual_duration_minutes: i64,
    expected_students: i64,
    readiness_check_status: ReadinessStatus,
    notes: Option<String>,
}

#[derive(Debug, FromRow)]
struct AssignmentRow {
    scheduled_test_id: i64,
    staff_member_id: i64,
    staff_name: String,
    assigned_role: AssignedRole,
}

impl ScheduleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists one session plus its staff assignments atomically. Any
    /// failure past this point rolls the whole unit back.
    pub async fn schedule(&self, payload: ScheduleSessionPayload) -> Result<i64> {
        let test_date = parse_test_date(&payload.test_date)?;
        ensure_test_day(test_date)?;
        let start_time = parse_start_time(&payload.start_time)?;

        let mut tx = self.pool.begin().await?;

        let test_type =
            sqlx::query_as::<_, TestType>("SELECT * FROM test_types WHERE id = ?")
                .bind(payload.test_type_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    Error::Reference(format!("Unknown test type id {}", payload.test_type_id))
                })?;

        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
            .bind(payload.room_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::Reference(format!("Unknown room id {}", payload.room_id)))?;

        let status = ReadinessStatus::initial_for(test_type.requires_readiness_check);

        let session_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO scheduled_tests (
                test_type_id, room_id, test_date, start_time,
                actual_duration_minutes, expected_students,
                readiness_check_status, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(payload.test_type_id)
        .bind(payload.room_id)
        .bind(test_date)
        .bind(start_time)
        .bind(payload.actual_duration_minutes)
        .bind(payload.expected_students)
        .bind(status)
        .bind(&payload.notes)
        .fetch_one(&mut *tx)
        .await?;

        for (label, staff_ids) in &payload.role_assignments {
            let role = AssignedRole::from_str(label)?;
            for raw_id in staff_ids {
                let raw_id = raw_id.trim();
                if raw_id.is_empty() {
                    // Unfilled slot on the scheduling form, not an error.
                    continue;
                }
                let staff_id: i64 = raw_id.parse().map_err(|_| Error::Format {
                    field: "staff_member_id".to_string(),
                    message: format!("expected a numeric id, got \"{}\"", raw_id),
                })?;

                let exists: Option<i64> =
                    sqlx::query_scalar("SELECT id FROM staff_members WHERE id = ?")
                        .bind(staff_id)
                        .fetch_optional(&mut *tx)
                        .await?;
                if exists.is_none() {
                    return Err(Error::Reference(format!(
                        "Unknown staff member id {}",
                        staff_id
                    )));
                }

                sqlx::query(
                    r#"
                    INSERT INTO staff_assignments (scheduled_test_id, staff_member_id, assigned_role)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(session_id)
                .bind(staff_id)
                .bind(role)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(session_id)
    }

    /// All sessions ordered chronologically, filtered to Fridays and
    /// Saturdays at read time, grouped by day label. Rows outside the rule
    /// (manual data edits) are tolerated and hidden.
    pub async fn list_grouped(&self) -> Result<Vec<DayGroup>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                st.id, st.test_type_id, tt.name AS test_type_name,
                st.room_id, r.room_number_or_name AS room_name,
                st.test_date, st.start_time, st.actual_duration_minutes,
                st.expected_students, st.readiness_check_status, st.notes
            FROM scheduled_tests st
            JOIN test_types tt ON tt.id = st.test_type_id
            JOIN rooms r ON r.id = st.room_id
            ORDER BY st.test_date, st.start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let assignment_rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT sa.scheduled_test_id, sa.staff_member_id,
                   sm.name AS staff_name, sa.assigned_role
            FROM staff_assignments sa
            JOIN staff_members sm ON sm.id = sa.staff_member_id
            ORDER BY sa.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut assignments_by_session: HashMap<i64, Vec<AssignmentView>> = HashMap::new();
        for row in assignment_rows {
            assignments_by_session
                .entry(row.scheduled_test_id)
                .or_default()
                .push(AssignmentView {
                    staff_member_id: row.staff_member_id,
                    staff_name: row.staff_name,
                    assigned_role: row.assigned_role,
                });
        }

        let mut days: Vec<DayGroup> = Vec::new();
        for row in rows.into_iter().filter(|row| is_test_day(row.test_date)) {
            let label = day_label(row.test_date);
            let session = SessionView {
                id: row.id,
                test_type_id: row.test_type_id,
                test_type_name: row.test_type_name,
                room_id: row.room_id,
                room_name: row.room_name,
                test_date: row.test_date,
                start_time: row.start_time,
                actual_duration_minutes: row.actual_duration_minutes,
                expected_students: row.expected_students,
                readiness_check_status: row.readiness_check_status,
                notes: row.notes,
                assignments: assignments_by_session.remove(&row.id).unwrap_or_default(),
            };
            match days.last_mut() {
                Some(group) if group.date_label == label => group.sessions.push(session),
                _ => days.push(DayGroup {
                    date_label: label,
                    sessions: vec![session],
                }),
            }
        }

        Ok(days)
    }

    /// Removes a session; its assignments go with it via the cascade.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM scheduled_tests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No scheduled test with id {}", id)));
        }
        Ok(())
    }

    /// Progresses a pending readiness check to Completed or Failed.
    pub async fn update_readiness(
        &self,
        id: i64,
        payload: UpdateReadinessPayload,
    ) -> Result<()> {
        if !matches!(
            payload.status,
            ReadinessStatus::Completed | ReadinessStatus::Failed
        ) {
            return Err(Error::Validation(
                "Readiness check can only progress to Completed or Failed.".to_string(),
            ));
        }

        let current: Option<ReadinessStatus> =
            sqlx::query_scalar("SELECT readiness_check_status FROM scheduled_tests WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let current =
            current.ok_or_else(|| Error::NotFound(format!("No scheduled test with id {}", id)))?;

        if current != ReadinessStatus::Pending {
            return Err(Error::Validation(
                "Readiness check is not pending for this session.".to_string(),
            ));
        }

        sqlx::query("UPDATE scheduled_tests SET readiness_check_status = ? WHERE id = ?")
            .bind(payload.status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
