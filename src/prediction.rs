use chrono::NaiveDate;

use crate::models::{CycleProfile, DayStatus, Phase};

/// The luteal phase is fixed, so ovulation always falls this many days
/// before the next period.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Day of the cycle on which ovulation is assumed (`cycle_length - 14`).
/// Negative or zero for cycles shorter than the luteal phase.
pub fn ovulation_day(cycle_length: i64) -> i64 {
    cycle_length - LUTEAL_PHASE_DAYS
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First theoretical onset after the anchor, not the one nearest to any date.
pub fn next_period_start(profile: &CycleProfile) -> NaiveDate {
    profile.last_period_start() + chrono::Duration::days(i64::from(profile.cycle_length()))
}

/// Zero-based offset of `date` in its theoretical cycle, in `[0, cycle_length)`.
/// The cycle repeats forever in both directions from the anchor.
fn days_into_cycle(profile: &CycleProfile, date: NaiveDate) -> i64 {
    let diff = (date - profile.last_period_start()).num_days();
    diff.rem_euclid(i64::from(profile.cycle_length()))
}

/// 1-based position of `date` within its cycle, always in `[1, cycle_length]`.
pub fn cycle_day(profile: &CycleProfile, date: NaiveDate) -> u32 {
    let day = days_into_cycle(profile, date) + 1;
    tracing::trace!(%date, day, "cycle day");
    // Bounded by cycle_length, which is a u32.
    day as u32
}

/// Classify a cycle day into its phase.
///
/// Menstruation is checked first, so a period long enough to reach the
/// ovulation window still reads as menstruation. Ovulation is the 3-day
/// window centred on [`ovulation_day`].
pub fn cycle_phase(cycle_day: u32, cycle_length: u32, period_length: u32) -> Phase {
    let day = i64::from(cycle_day);
    if day <= i64::from(period_length) {
        return Phase::Menstruation;
    }

    let ovulation = ovulation_day(i64::from(cycle_length));
    if day >= ovulation - 1 && day <= ovulation + 1 {
        Phase::Ovulation
    } else if day < ovulation - 1 {
        Phase::Follicular
    } else {
        Phase::Luteal
    }
}

/// Signed countdown to the next period as seen on `reference`.
///
/// Positive is days remaining, zero is due today, negative is days late.
/// Late framing only applies when `reference` has reached the first
/// predicted onset and is not after `today`; every other date (history
/// or a hypothetical future date) is treated as a regular recurring cycle
/// and gets a countdown in `[1, cycle_length]`.
pub fn days_until_period(profile: &CycleProfile, reference: NaiveDate, today: NaiveDate) -> i64 {
    let expected_next = next_period_start(profile);
    let is_overdue = reference >= expected_next;
    let is_future = reference > today;

    if is_overdue && !is_future {
        let days = (expected_next - reference).num_days();
        tracing::trace!(%reference, %expected_next, days, "period overdue");
        return days;
    }

    let days = i64::from(profile.cycle_length()) - days_into_cycle(profile, reference);
    tracing::trace!(%reference, days, "regular countdown");
    days
}

/// [`days_until_period`] against the local clock.
pub fn days_until_period_now(profile: &CycleProfile, reference: NaiveDate) -> i64 {
    days_until_period(profile, reference, today())
}

/// Fertile window: 5 days before ovulation through the day after.
pub fn is_fertile_window(cycle_day: u32, cycle_length: u32) -> bool {
    let day = i64::from(cycle_day);
    let ovulation = ovulation_day(i64::from(cycle_length));
    day >= ovulation - 5 && day <= ovulation + 1
}

/// Calendar status of a single date.
///
/// Unlike [`cycle_phase`], ovulation here is the exact ovulation day only;
/// the days around it fall into the fertile band, which includes the day
/// after ovulation. Period takes priority over both.
pub fn calendar_day_status(profile: &CycleProfile, date: NaiveDate) -> DayStatus {
    let day = cycle_day(profile, date);
    if day <= profile.period_length() {
        return DayStatus::Period;
    }

    let ovulation = ovulation_day(i64::from(profile.cycle_length()));
    if i64::from(day) == ovulation {
        DayStatus::Ovulation
    } else if is_fertile_window(day, profile.cycle_length()) {
        DayStatus::Fertile
    } else {
        DayStatus::None
    }
}
