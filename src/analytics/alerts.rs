use crate::analytics::organization::OrganizationKpis;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// Tunable thresholds for the advisory rules. Fixed policy, not
// configuration; kept as named constants so the rules below stay readable.
pub const CRITICAL_ABSENTEEISM_PCT: f64 = 20.0;
pub const WARNING_ABSENTEEISM_PCT: f64 = 10.0;
pub const CRITICAL_LATE_COUNT: u32 = 10;
pub const ATTENDANCE_DROP_DELTA: i32 = -3;
pub const EXCELLENT_ATTENDANCE_PCT: f64 = 95.0;
pub const MAX_ALERTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Threshold-triggered advisory derived from a KPI snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

fn alert(severity: Severity, title: &str, description: String, now: DateTime<Utc>) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        severity,
        title: title.to_string(),
        description,
        timestamp: now,
    }
}

/// Derives up to [`MAX_ALERTS`] advisories from the KPI snapshot, most severe
/// first by construction order. Pure function of the snapshot; the timestamp
/// is taken once so all alerts of a run agree.
pub fn generate_alerts(kpis: &OrganizationKpis) -> Vec<Alert> {
    let now = Utc::now();
    let mut alerts = Vec::new();

    if kpis.absenteeism_rate > CRITICAL_ABSENTEEISM_PCT {
        alerts.push(alert(
            Severity::Critical,
            "Ausentismo Crítico",
            format!(
                "La tasa de ausentismo es {}%, por encima del umbral crítico de {}%",
                kpis.absenteeism_rate, CRITICAL_ABSENTEEISM_PCT
            ),
            now,
        ));
    }

    if kpis.late_today > CRITICAL_LATE_COUNT {
        alerts.push(alert(
            Severity::Critical,
            "Muchas Tardanzas",
            format!("{} empleados llegaron tarde hoy", kpis.late_today),
            now,
        ));
    }

    if kpis.absenteeism_rate > WARNING_ABSENTEEISM_PCT
        && kpis.absenteeism_rate <= CRITICAL_ABSENTEEISM_PCT
    {
        alerts.push(alert(
            Severity::Warning,
            "Ausentismo Elevado",
            format!("La tasa de ausentismo es {}%", kpis.absenteeism_rate),
            now,
        ));
    }

    if kpis.attendance_vs_yesterday < ATTENDANCE_DROP_DELTA {
        alerts.push(alert(
            Severity::Warning,
            "Caída en Asistencia",
            format!(
                "{} empleados presentes menos que ayer",
                -kpis.attendance_vs_yesterday
            ),
            now,
        ));
    }

    if kpis.attendance_rate > EXCELLENT_ATTENDANCE_PCT {
        alerts.push(alert(
            Severity::Info,
            "Excelente Asistencia",
            format!("La tasa de asistencia es {}%", kpis.attendance_rate),
            now,
        ));
    }

    alerts.truncate(MAX_ALERTS);
    alerts
}
