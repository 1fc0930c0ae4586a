#![forbid(unsafe_code)]

//! Cycle prediction and calendar status for a period tracker.
//!
//! Everything is derived from a [`CycleProfile`] (average cycle length,
//! average period length, first day of the last period) and a date:
//! - [`cycle_day`]: 1-based day of the date's theoretical cycle
//! - [`cycle_phase`]: menstruation, follicular, ovulation or luteal
//! - [`days_until_period`]: countdown, zero when due, negative when late
//! - [`calendar_day_status`]: period, ovulation, fertile or none
//!
//! Cycles are assumed to repeat with identical length in both directions
//! from the anchor date. Pregnancy mode lives in [`pregnancy`], and the
//! per-screen compositions in [`commands`].

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod prediction;
pub mod pregnancy;

pub use commands::{
    calendar_day, month_view, tracker_summary, tracker_summary_now, week_strip, MAX_STRIP_RADIUS,
};
pub use config::Config;
pub use error::{Error, Result};
pub use models::*;
pub use prediction::{
    calendar_day_status, cycle_day, cycle_phase, days_until_period, days_until_period_now,
    is_fertile_window, next_period_start, ovulation_day, today, LUTEAL_PHASE_DAYS,
};
pub use pregnancy::{due_date, pregnancy_status, GESTATION_DAYS};
