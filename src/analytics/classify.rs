use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use serde::Serialize;
use utoipa::ToSchema;

/// The closed set of attendance outcomes every aggregator agrees on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Present,
    Late,
    Absent,
    Incomplete,
}

impl Outcome {
    /// Any attendance signal at all: present, late or incomplete.
    pub fn attended(self) -> bool {
        !matches!(self, Outcome::Absent)
    }
}

/// Maps a raw row to its outcome. This is the single place nullable
/// check-in/check-out fields are interpreted; aggregators must consume this
/// rather than re-deriving the rules.
///
/// Priority order:
/// 1. explicit `late` status wins,
/// 2. explicit `absent` status or a missing check-in means absent,
/// 3. check-in without check-out is an incomplete (still attended) day,
/// 4. everything else is present.
pub fn classify(record: &AttendanceRecord) -> Outcome {
    if record.status == AttendanceStatus::Late {
        return Outcome::Late;
    }
    if record.status == AttendanceStatus::Absent || record.check_in.is_none() {
        return Outcome::Absent;
    }
    if record.check_out.is_none() {
        return Outcome::Incomplete;
    }
    Outcome::Present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::record;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn late_status_wins_over_everything() {
        let mut r = record(1, "2026-08-24", Some(t(9, 30)), Some(t(17, 0)));
        r.status = AttendanceStatus::Late;
        assert_eq!(classify(&r), Outcome::Late);

        // even with no check-out the late flag sticks
        r.check_out = None;
        assert_eq!(classify(&r), Outcome::Late);
    }

    #[test]
    fn absent_status_or_missing_check_in_is_absent() {
        let mut r = record(1, "2026-08-24", Some(t(8, 0)), Some(t(17, 0)));
        r.status = AttendanceStatus::Absent;
        assert_eq!(classify(&r), Outcome::Absent);

        let r = record(1, "2026-08-24", None, None);
        assert_eq!(classify(&r), Outcome::Absent);
    }

    #[test]
    fn check_in_without_check_out_is_incomplete() {
        let r = record(1, "2026-08-24", Some(t(8, 0)), None);
        assert_eq!(classify(&r), Outcome::Incomplete);
    }

    #[test]
    fn complete_day_is_present() {
        let r = record(1, "2026-08-24", Some(t(8, 0)), Some(t(17, 0)));
        assert_eq!(classify(&r), Outcome::Present);
    }

    #[test]
    fn pass_through_statuses_follow_check_in_signal() {
        // vacation with no check-in classifies absent-like
        let mut r = record(1, "2026-08-24", None, None);
        r.status = AttendanceStatus::Vacation;
        assert_eq!(classify(&r), Outcome::Absent);

        // remote day with both punches classifies present-like
        let mut r = record(1, "2026-08-24", Some(t(8, 0)), Some(t(16, 0)));
        r.status = AttendanceStatus::Remote;
        assert_eq!(classify(&r), Outcome::Present);
    }

    #[test]
    fn classifier_is_total_over_all_statuses() {
        use strum::IntoEnumIterator;
        // every status and punch combination lands on exactly one outcome
        for status in AttendanceStatus::iter() {
            for (check_in, check_out) in [
                (None, None),
                (Some(t(8, 0)), None),
                (Some(t(8, 0)), Some(t(17, 0))),
            ] {
                let mut r = record(1, "2026-08-24", check_in, check_out);
                r.status = status;
                let outcome = classify(&r);
                assert!(matches!(
                    outcome,
                    Outcome::Present | Outcome::Late | Outcome::Absent | Outcome::Incomplete
                ));
            }
        }
    }

    #[test]
    fn attended_covers_present_late_incomplete() {
        assert!(Outcome::Present.attended());
        assert!(Outcome::Late.attended());
        assert!(Outcome::Incomplete.attended());
        assert!(!Outcome::Absent.attended());
    }
}
