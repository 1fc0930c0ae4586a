//! Queries issued by the calendar, strip and tracker views. Each one
//! composes the calculator for a single screen; nothing is rendered here.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Error, Result};
use crate::models::*;
use crate::prediction;
use crate::pregnancy;

/// One calendar cell for `date`.
pub fn calendar_day(profile: &CycleProfile, date: NaiveDate, today: NaiveDate) -> CalendarDay {
    CalendarDay {
        date,
        cycle_day: prediction::cycle_day(profile, date),
        status: prediction::calendar_day_status(profile, date),
        is_today: date == today,
    }
}

/// Month grid padded to whole weeks, first column `week_start`.
pub fn month_view(
    profile: &CycleProfile,
    year: i32,
    month: u32,
    today: NaiveDate,
    week_start: WeekStart,
) -> Result<MonthData> {
    let invalid = || Error::InvalidMonth { year, month };

    let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last_day = if month == 12 {
        year.checked_add(1)
            .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?
        - chrono::Duration::days(1);

    let leading = week_start.column(first_day.weekday()) as usize;
    let days_in_month = last_day.day() as usize;
    let total_slots = (leading + days_in_month).div_ceil(7) * 7;

    let mut slots = Vec::with_capacity(total_slots);
    slots.resize(leading, None);
    slots.extend(
        first_day
            .iter_days()
            .take(days_in_month)
            .map(|date| Some(calendar_day(profile, date, today))),
    );
    slots.resize(total_slots, None);

    tracing::debug!(year, month, slots = slots.len(), "built month view");

    Ok(MonthData { year, month, slots })
}

/// Widest strip served, half a year on each side.
pub const MAX_STRIP_RADIUS: u32 = 183;

/// `2 * radius + 1` consecutive days centred on `center`.
///
/// `radius` is capped at [`MAX_STRIP_RADIUS`]. Near the ends of the
/// representable calendar the strip is cut short instead of wrapping.
pub fn week_strip(
    profile: &CycleProfile,
    center: NaiveDate,
    radius: u32,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let radius = radius.min(MAX_STRIP_RADIUS);
    let start = center
        .checked_sub_days(Days::new(u64::from(radius)))
        .unwrap_or(NaiveDate::MIN);
    let end = center
        .checked_add_days(Days::new(u64::from(radius)))
        .unwrap_or(NaiveDate::MAX);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| calendar_day(profile, date, today))
        .collect()
}

/// State of the circular tracker for the selected `date`.
pub fn tracker_summary(profile: &CycleProfile, date: NaiveDate, today: NaiveDate) -> TrackerSummary {
    let cycle_day = prediction::cycle_day(profile, date);
    let phase = prediction::cycle_phase(cycle_day, profile.cycle_length(), profile.period_length());
    let days_until_period = prediction::days_until_period(profile, date, today);
    let fertility = FertilityChance::from(prediction::calendar_day_status(profile, date));
    let progress = (cycle_day as f32 / profile.cycle_length() as f32).clamp(0.0, 1.0);

    let pregnancy = profile
        .pregnancy_mode()
        .then(|| pregnancy::pregnancy_status(profile, today));

    let headline = match &pregnancy {
        Some(status) => Headline::Pregnancy {
            weeks: status.weeks,
        },
        None if days_until_period == 0 => Headline::DueToday,
        None if days_until_period < 0 => Headline::Late {
            days: -days_until_period,
        },
        None => match phase {
            Phase::Ovulation => Headline::Ovulation,
            Phase::Menstruation => Headline::PeriodDay { day: cycle_day },
            Phase::Follicular | Phase::Luteal => Headline::PeriodIn {
                days: days_until_period,
            },
        },
    };

    TrackerSummary {
        date,
        cycle_day,
        phase,
        days_until_period,
        fertility,
        progress,
        headline,
        pregnancy,
    }
}

/// [`tracker_summary`] for the current local day.
pub fn tracker_summary_now(profile: &CycleProfile) -> TrackerSummary {
    let today = prediction::today();
    tracker_summary(profile, today, today)
}
