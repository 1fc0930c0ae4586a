use std::fmt;

use chrono::{DateTime, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prediction::ovulation_day;
use crate::pregnancy::GESTATION_DAYS;

/// The user's cycle parameters, anchored on the first day of the last
/// known period. Read-only input to every calculation.
///
/// A profile always has `cycle_length >= 1`, and both the next onset and
/// the pregnancy due date are representable dates. [`CycleProfile::new`]
/// and deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct CycleProfile {
    cycle_length: u32,
    period_length: u32,
    last_period_start: NaiveDate,
    pregnancy_mode: bool,
}

impl CycleProfile {
    pub fn new(cycle_length: u32, period_length: u32, last_period_start: NaiveDate) -> Result<Self> {
        if cycle_length == 0 {
            return Err(Error::InvalidCycleLength { cycle_length: 0 });
        }

        let horizon = u64::from(cycle_length).max(GESTATION_DAYS as u64);
        if last_period_start.checked_add_days(Days::new(horizon)).is_none() {
            return Err(Error::InvalidDate(format!(
                "{last_period_start} is too close to the end of the calendar"
            )));
        }

        if period_length >= cycle_length {
            tracing::warn!(
                cycle_length,
                period_length,
                "period length covers the whole cycle, every day classifies as menstruation"
            );
        } else if i64::from(period_length) >= ovulation_day(i64::from(cycle_length)) - 1 {
            tracing::warn!(
                cycle_length,
                period_length,
                "period overlaps the ovulation window, menstruation takes precedence"
            );
        }

        Ok(Self {
            cycle_length,
            period_length,
            last_period_start,
            pregnancy_mode: false,
        })
    }

    pub fn with_pregnancy_mode(mut self, enabled: bool) -> Self {
        self.pregnancy_mode = enabled;
        self
    }

    /// Parse a settings record as stored by the profile store.
    /// Fields the calculator does not use (name, reminders, goals) are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn period_length(&self) -> u32 {
        self.period_length
    }

    pub fn last_period_start(&self) -> NaiveDate {
        self.last_period_start
    }

    pub fn pregnancy_mode(&self) -> bool {
        self.pregnancy_mode
    }
}

/// Wire shape of a settings record before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    cycle_length: i64,
    period_length: i64,
    last_period_start: String,
    #[serde(default)]
    pregnancy_mode: bool,
}

impl TryFrom<ProfileRecord> for CycleProfile {
    type Error = Error;

    fn try_from(record: ProfileRecord) -> Result<Self> {
        let cycle_length = u32::try_from(record.cycle_length).map_err(|_| {
            Error::InvalidCycleLength {
                cycle_length: record.cycle_length,
            }
        })?;
        let period_length = u32::try_from(record.period_length).map_err(|_| {
            Error::InvalidPeriodLength {
                period_length: record.period_length,
            }
        })?;
        let anchor = parse_anchor_date(&record.last_period_start)?;

        Ok(CycleProfile::new(cycle_length, period_length, anchor)?
            .with_pregnancy_mode(record.pregnancy_mode))
    }
}

/// Parse the anchor date of a profile.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp. Timestamps
/// are moved to local time and truncated to the calendar day.
pub fn parse_anchor_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local).date_naive())
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menstruation,
    Follicular,
    Ovulation,
    Luteal,
}

/// Flattened per-date classification used by calendar and strip views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Period,
    Ovulation,
    Fertile,
    None,
}

/// Chance of conception shown on the daily insights card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FertilityChance {
    High,
    Medium,
    Low,
}

impl From<DayStatus> for FertilityChance {
    fn from(status: DayStatus) -> Self {
        match status {
            DayStatus::Ovulation => FertilityChance::High,
            DayStatus::Fertile => FertilityChance::Medium,
            DayStatus::Period | DayStatus::None => FertilityChance::Low,
        }
    }
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column of `weekday` in a grid starting on this day.
    pub fn column(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub cycle_day: u32,
    pub status: DayStatus,
    pub is_today: bool,
}

/// Data returned to the calendar grid for a month view.
/// `slots` is a whole number of weeks; `None` marks padding outside the month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthData {
    pub year: i32,
    pub month: u32,
    pub slots: Vec<Option<CalendarDay>>,
}

impl MonthData {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.slots.iter().flatten()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Option<CalendarDay>]> {
        self.slots.chunks(7)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyStatus {
    pub days_pregnant: i64,
    pub weeks: i64,
    pub days: i64,
    pub due_date: NaiveDate,
    /// Fraction of the 280-day gestation elapsed, in `[0, 1]`.
    pub progress: f32,
}

/// Main line of the circular tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Headline {
    PeriodIn { days: i64 },
    DueToday,
    Late { days: i64 },
    Ovulation,
    PeriodDay { day: u32 },
    Pregnancy { weeks: i64 },
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Headline::PeriodIn { days } => write!(f, "Period in {}", plural_days(*days)),
            Headline::DueToday => f.write_str("Period is due today"),
            Headline::Late { days } => write!(f, "Period is {} late", plural_days(*days)),
            Headline::Ovulation => f.write_str("Ovulation today"),
            Headline::PeriodDay { day } => write!(f, "Period day {day}"),
            Headline::Pregnancy { weeks } => write!(f, "Pregnancy week {weeks}"),
        }
    }
}

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Everything the "today" tracker widget shows for one selected date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerSummary {
    pub date: NaiveDate,
    pub cycle_day: u32,
    pub phase: Phase,
    pub days_until_period: i64,
    pub fertility: FertilityChance,
    /// Position in the cycle ring, `cycle_day / cycle_length` clamped to `[0, 1]`.
    pub progress: f32,
    pub headline: Headline,
    pub pregnancy: Option<PregnancyStatus>,
}
