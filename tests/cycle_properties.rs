//! Calculator properties checked through the public API.

use chrono::{Duration, NaiveDate};
use cycle_engine::{
    calendar_day_status, cycle_day, cycle_phase, days_until_period, is_fertile_window,
    month_view, ovulation_day, CycleProfile, DayStatus, Phase, WeekStart,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profiles() -> Vec<CycleProfile> {
    [(21, 4), (24, 5), (28, 5), (30, 6), (35, 7)]
        .into_iter()
        .map(|(cycle, period)| CycleProfile::new(cycle, period, date(2024, 1, 1)).unwrap())
        .collect()
}

#[test]
fn cycle_day_stays_in_range() {
    for profile in profiles() {
        let start = date(2023, 6, 1);
        for offset in 0..400 {
            let day = cycle_day(&profile, start + Duration::days(offset));
            assert!(
                (1..=profile.cycle_length()).contains(&day),
                "day {day} out of range for cycle {}",
                profile.cycle_length()
            );
        }
    }
}

#[test]
fn cycle_day_repeats_every_cycle() {
    for profile in profiles() {
        let len = i64::from(profile.cycle_length());
        for offset in -40..40 {
            let d = date(2024, 1, 1) + Duration::days(offset);
            for k in [-3i64, -1, 1, 2, 7] {
                assert_eq!(
                    cycle_day(&profile, d),
                    cycle_day(&profile, d + Duration::days(k * len))
                );
            }
        }
    }
}

#[test]
fn anchor_identity_and_negative_offset() {
    for profile in profiles() {
        assert_eq!(cycle_day(&profile, profile.last_period_start()), 1);
        let three_before = profile.last_period_start() - Duration::days(3);
        assert_eq!(cycle_day(&profile, three_before), profile.cycle_length() - 2);
    }
}

#[test]
fn due_today_at_anchor_plus_cycle() {
    for profile in profiles() {
        let onset = profile.last_period_start() + Duration::days(i64::from(profile.cycle_length()));
        assert_eq!(days_until_period(&profile, onset, onset), 0);
        assert_eq!(days_until_period(&profile, onset, onset + Duration::days(30)), 0);
    }
}

#[test]
fn regular_countdown_is_positive_and_bounded() {
    for profile in profiles() {
        let len = i64::from(profile.cycle_length());
        let today = profile.last_period_start() + Duration::days(5);
        for offset in -100..200 {
            let reference = today + Duration::days(offset);
            let expected_next = profile.last_period_start() + Duration::days(len);
            if reference >= expected_next && reference <= today {
                continue;
            }
            let days = days_until_period(&profile, reference, today);
            assert!((1..=len).contains(&days), "{days} for {reference}");
        }
    }
}

#[test]
fn every_day_has_one_phase() {
    for profile in profiles() {
        let (len, period) = (profile.cycle_length(), profile.period_length());
        let ovulation = ovulation_day(i64::from(len));
        for day in 1..=len {
            let phase = cycle_phase(day, len, period);
            let d = i64::from(day);
            let expected = if day <= period {
                Phase::Menstruation
            } else if (ovulation - 1..=ovulation + 1).contains(&d) {
                Phase::Ovulation
            } else if d < ovulation - 1 {
                Phase::Follicular
            } else {
                Phase::Luteal
            };
            assert_eq!(phase, expected, "cycle {len}, day {day}");
        }
    }
}

#[test]
fn fertile_window_boundaries() {
    for profile in profiles() {
        let len = profile.cycle_length();
        let ovulation = ovulation_day(i64::from(len)) as u32;
        assert!(is_fertile_window(ovulation - 5, len));
        assert!(is_fertile_window(ovulation + 1, len));
        assert!(!is_fertile_window(ovulation - 6, len));
        assert!(!is_fertile_window(ovulation + 2, len));
        assert_eq!((1..=len).filter(|&d| is_fertile_window(d, len)).count(), 7);
    }
}

#[test]
fn calendar_status_prefers_period() {
    for profile in profiles() {
        for offset in 0..i64::from(profile.cycle_length()) {
            let d = profile.last_period_start() + Duration::days(offset);
            let day = cycle_day(&profile, d);
            let status = calendar_day_status(&profile, d);
            if day <= profile.period_length() {
                assert_eq!(status, DayStatus::Period);
            } else if status == DayStatus::Ovulation {
                assert_eq!(i64::from(day), ovulation_day(i64::from(profile.cycle_length())));
            }
        }
    }
}

#[test]
fn period_covering_ovulation_hides_it() {
    let profile = CycleProfile::new(20, 8, date(2024, 1, 1)).unwrap();
    let ovulation = profile.last_period_start() + Duration::days(ovulation_day(20) - 1);
    assert_eq!(cycle_day(&profile, ovulation), 6);
    assert_eq!(calendar_day_status(&profile, ovulation), DayStatus::Period);
    assert_eq!(cycle_phase(6, 20, 8), Phase::Menstruation);

    let statuses: Vec<DayStatus> = (1..=20)
        .map(|d| calendar_day_status(&profile, date(2024, 1, d)))
        .collect();
    assert!(!statuses.contains(&DayStatus::Ovulation));
    assert!(!statuses.contains(&DayStatus::Fertile));
}

#[test]
fn ovulation_widths_differ_between_phase_and_status() {
    let profile = CycleProfile::new(28, 5, date(2024, 1, 1)).unwrap();
    for day in [13u32, 15] {
        let d = date(2024, 1, day);
        assert_eq!(cycle_phase(day, 28, 5), Phase::Ovulation);
        assert_eq!(calendar_day_status(&profile, d), DayStatus::Fertile);
    }
    assert_eq!(calendar_day_status(&profile, date(2024, 1, 14)), DayStatus::Ovulation);
}

#[test]
fn scenario_28_day_cycle() {
    let profile = CycleProfile::new(28, 5, date(2024, 1, 1)).unwrap();
    let phase_on = |d: NaiveDate| cycle_phase(cycle_day(&profile, d), 28, 5);

    assert_eq!(phase_on(date(2024, 1, 1)), Phase::Menstruation);
    assert_eq!(calendar_day_status(&profile, date(2024, 1, 1)), DayStatus::Period);
    assert_eq!(phase_on(date(2024, 1, 5)), Phase::Menstruation);
    assert_eq!(phase_on(date(2024, 1, 6)), Phase::Follicular);
    assert_eq!(phase_on(date(2024, 1, 14)), Phase::Ovulation);
    assert_eq!(phase_on(date(2024, 1, 28)), Phase::Luteal);
    assert_eq!(cycle_day(&profile, date(2024, 1, 29)), 1);
    assert_eq!(phase_on(date(2024, 1, 29)), Phase::Menstruation);

    let fertile: Vec<u32> = (1..=28)
        .filter(|&d| {
            matches!(
                calendar_day_status(&profile, date(2024, 1, d)),
                DayStatus::Fertile | DayStatus::Ovulation
            )
        })
        .collect();
    assert_eq!(fertile, (9..=15).collect::<Vec<_>>());
}

#[test]
fn month_view_from_settings_record() {
    let json = r#"{"name": "Guest", "cycleLength": 28, "periodLength": 5, "lastPeriodStart": "2024-01-01"}"#;
    let profile = CycleProfile::from_json(json).unwrap();
    let feb = month_view(&profile, 2024, 2, date(2024, 2, 1), WeekStart::Sunday).unwrap();

    let periods: Vec<u32> = feb
        .days()
        .filter(|d| d.status == DayStatus::Period)
        .map(|d| d.cycle_day)
        .collect();
    // Jan 29 starts the second cycle, Feb 26 the third
    assert_eq!(periods, vec![4, 5, 1, 2, 3, 4]);
}
