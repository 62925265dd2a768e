//! Pure aggregation core: raw attendance rows in, derived metrics out.
//!
//! Every function here is a synchronous transform over already-fetched
//! collections; nothing holds state between calls and re-running any
//! aggregation with the same inputs yields identical output.

pub mod alerts;
pub mod calendar;
pub mod classify;
pub mod department;
pub mod employee;
pub mod error;
#[cfg(any(test, feature = "demo-data"))]
pub mod fixtures;
pub mod organization;
pub mod report;
pub mod trend;

/// Contracted workday length. Expected hours = working days x this.
pub const HOURS_PER_WORKING_DAY: f64 = 8.0;

/// Check-ins strictly after this hour (09:00:00 itself is on time) are
/// stamped `late`.
pub const LATE_CUTOFF_HOUR: u32 = 9;

/// Single rounding policy for every hour and percentage value: half-up at
/// two decimals. Halves round away from zero, so a negative hours deficit
/// of exactly -x.xx5 lands on -x.xx - 0.01; percentages are never negative
/// and are unaffected.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Guarded percentage: `part / whole * 100` rounded to two decimals, 0.0 when
/// the denominator is zero. All rate formulas go through here so a NaN can
/// never reach a KPI object.
pub fn pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round2(part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_half_up() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(80.0), 80.0);
    }

    #[test]
    fn round2_negative_halves_round_away_from_zero() {
        assert_eq!(round2(-0.005), -0.01);
        assert_eq!(round2(-2.346), -2.35);
    }

    #[test]
    fn pct_guards_zero_denominator() {
        assert_eq!(pct(5.0, 0.0), 0.0);
        assert_eq!(pct(1.0, 3.0), 33.33);
        assert_eq!(pct(3.0, 3.0), 100.0);
    }
}
