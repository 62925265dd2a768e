//! Data-access layer. An explicitly constructed client injected into the
//! handlers via `web::Data`; owns all persistence-level filtering so the
//! analytics core only ever sees records already inside the requested window.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::Employee;
use crate::model::filter::PeriodFilter;
use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;
use std::collections::HashMap;
use tracing::debug;

const RECORD_COLUMNS: &str =
    "id, employee_id, organization_id, date, check_in, check_out, work_hours, overtime_hours, status";

#[derive(Clone)]
pub struct Store {
    pool: MySqlPool,
}

impl Store {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Attendance rows matching the filter, ordered by date then employee.
    pub async fn records_in_period(
        &self,
        organization_id: u64,
        filter: &PeriodFilter,
    ) -> sqlx::Result<Vec<AttendanceRecord>> {
        // ---------- build WHERE clause dynamically ----------
        let mut conditions = vec!["organization_id = ?", "date BETWEEN ? AND ?"];
        if filter.employee_id.is_some() {
            conditions.push("employee_id = ?");
        }
        if filter.department_id.is_some() {
            conditions.push("employee_id IN (SELECT id FROM employees WHERE department_id = ?)");
        }
        if filter.status.is_some() {
            conditions.push("status = ?");
        }

        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM attendances WHERE {} ORDER BY date, employee_id",
            conditions.join(" AND ")
        );
        debug!(sql = %sql, organization_id, "Fetching attendance records");

        let mut query = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(organization_id)
            .bind(filter.start_date)
            .bind(filter.end_date);
        if let Some(employee_id) = filter.employee_id {
            query = query.bind(employee_id);
        }
        if let Some(department_id) = filter.department_id {
            query = query.bind(department_id);
        }
        if let Some(status) = filter.status {
            query = query.bind(status);
        }

        query.fetch_all(&self.pool).await
    }

    /// All rows for a single calendar day.
    pub async fn records_on(
        &self,
        organization_id: u64,
        date: NaiveDate,
    ) -> sqlx::Result<Vec<AttendanceRecord>> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM attendances WHERE organization_id = ? AND date = ?"
        );
        sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(organization_id)
            .bind(date)
            .fetch_all(&self.pool)
            .await
    }

    /// Active roster; the denominator for every organization-level rate.
    pub async fn active_employees(&self, organization_id: u64) -> sqlx::Result<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, organization_id, employee_code, full_name,
                   department_id, position_id, is_active
            FROM employees
            WHERE organization_id = ? AND is_active = 1
            ORDER BY employee_code
            "#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await
    }

    /// employee id -> department name for every active employee that has a
    /// department. Unmapped employees fall into the sentinel bucket at
    /// aggregation time.
    pub async fn department_names(
        &self,
        organization_id: u64,
    ) -> sqlx::Result<HashMap<u64, String>> {
        let rows: Vec<(u64, String)> = sqlx::query_as(
            r#"
            SELECT e.id, d.name
            FROM employees e
            INNER JOIN departments d ON d.id = e.department_id
            WHERE e.organization_id = ? AND e.is_active = 1
            "#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// Inserts today's check-in row. The unique key on (employee_id, date)
    /// turns a second check-in into a database error the handler maps to 400.
    pub async fn insert_check_in(
        &self,
        organization_id: u64,
        employee_id: u64,
        date: NaiveDate,
        check_in: NaiveTime,
        status: AttendanceStatus,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO attendances (employee_id, organization_id, date, check_in, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee_id)
        .bind(organization_id)
        .bind(date)
        .bind(check_in)
        .bind(status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Check-in time of the still-open row for the day, if any.
    pub async fn open_check_in(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> sqlx::Result<Option<NaiveTime>> {
        let row: Option<Option<NaiveTime>> = sqlx::query_scalar(
            r#"
            SELECT check_in FROM attendances
            WHERE employee_id = ? AND date = ? AND check_out IS NULL
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.flatten())
    }

    /// Closes the open row for the day with the computed hour totals.
    /// Returns the number of rows affected; 0 means there was nothing open.
    pub async fn close_check_out(
        &self,
        employee_id: u64,
        date: NaiveDate,
        check_out: NaiveTime,
        work_hours: f64,
        overtime_hours: f64,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE attendances
            SET check_out = ?, work_hours = ?, overtime_hours = ?
            WHERE employee_id = ? AND date = ? AND check_out IS NULL
            "#,
        )
        .bind(check_out)
        .bind(work_hours)
        .bind(overtime_hours)
        .bind(employee_id)
        .bind(date)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
