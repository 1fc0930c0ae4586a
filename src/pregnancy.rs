//! Pregnancy mode: gestational age counted from the same anchor date.
//!
//! Independent of the cycle calculations; a profile in pregnancy mode
//! shows this instead of the cycle countdown.

use chrono::NaiveDate;

use crate::models::{CycleProfile, PregnancyStatus};

/// Length of a full-term pregnancy counted from the last period (40 weeks).
pub const GESTATION_DAYS: i64 = 280;

pub fn due_date(profile: &CycleProfile) -> NaiveDate {
    profile.last_period_start() + chrono::Duration::days(GESTATION_DAYS)
}

/// Gestational age on `today`.
///
/// A `today` before the anchor gives negative weeks with a non-negative
/// day remainder, and zero progress.
pub fn pregnancy_status(profile: &CycleProfile, today: NaiveDate) -> PregnancyStatus {
    let days_pregnant = (today - profile.last_period_start()).num_days();
    let progress = (days_pregnant as f32 / GESTATION_DAYS as f32).clamp(0.0, 1.0);

    PregnancyStatus {
        days_pregnant,
        weeks: days_pregnant.div_euclid(7),
        days: days_pregnant.rem_euclid(7),
        due_date: due_date(profile),
        progress,
    }
}
