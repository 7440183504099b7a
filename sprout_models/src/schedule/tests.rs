use super::*;

use chrono::{NaiveDate, TimeZone};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn valid_fixed_schedule_passes_validation() {
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
    let schedule = ScheduleModel::fixed(at);

    assert_eq!(schedule.validate(), Ok(()));
    assert_eq!(schedule.fixed_date_time(), Some(at));
}

#[test]
fn fixed_schedule_without_timestamp_reports_the_field() {
    let schedule =
        ScheduleModel::from_raw_parts(ScheduleType::Fixed, None, None, None, Vec::new(), None);

    let errors = schedule.validate().unwrap_err();

    assert!(errors.has_field(ScheduleField::FixedDateTime));
    assert_eq!(errors.errors().len(), 1);
}

#[test]
fn fixed_schedule_ignores_recurring_fields() {
    let schedule = ScheduleModel::from_raw_parts(
        ScheduleType::Fixed,
        Some("2026-10-16T09:00:00Z".to_string()),
        Some(Frequency::Weekly),
        Some("99:99".to_string()),
        Vec::new(),
        Some(40),
    );

    assert_eq!(schedule.validate(), Ok(()));
}

#[test]
fn unparseable_fixed_timestamp_is_rejected() {
    let schedule = ScheduleModel::from_raw_parts(
        ScheduleType::Fixed,
        Some("next tuesday".to_string()),
        None,
        None,
        Vec::new(),
        None,
    );

    let errors = schedule.validate().unwrap_err();
    assert!(errors.has_field(ScheduleField::FixedDateTime));
}

#[test]
fn recurring_errors_are_collected_together() {
    let schedule = ScheduleModel::from_raw_parts(
        ScheduleType::Recurring,
        None,
        Some(Frequency::Monthly),
        Some("24:00".to_string()),
        Vec::new(),
        Some(32),
    );

    let errors = schedule.validate().unwrap_err();

    assert!(errors.has_field(ScheduleField::DayOfMonth));
    assert!(errors.has_field(ScheduleField::TimeOfDay));
    assert_eq!(errors.errors().len(), 2, "{errors}");
}

#[test]
fn weekly_schedule_needs_a_weekday() {
    let schedule = ScheduleModel::recurring(Frequency::Weekly, Some(time(9, 0)));

    let errors = schedule.validate().unwrap_err();
    assert!(errors.has_field(ScheduleField::DaysOfWeek));

    let schedule = schedule.with_days_of_week([DayOfWeek::Friday]);
    assert_eq!(schedule.validate(), Ok(()));
}

#[test]
fn monthly_sentinel_counts_as_missing_day() {
    let schedule = ScheduleModel::recurring(Frequency::Monthly, None).with_day_of_month(-1);

    assert_eq!(schedule.day_of_month(), None);
    assert_eq!(schedule.day_of_month_raw(), Some(-1));
    let errors = schedule.validate().unwrap_err();
    assert_eq!(
        errors.for_field(ScheduleField::DayOfMonth).next().map(|e| e.message.as_str()),
        Some("is required for a monthly schedule")
    );
}

#[test]
fn missing_and_unknown_frequency_are_rejected() {
    let missing =
        ScheduleModel::from_raw_parts(ScheduleType::Recurring, None, None, None, Vec::new(), None);
    let unknown = ScheduleModel::from_raw_parts(
        ScheduleType::Recurring,
        None,
        Some(Frequency::Unknown),
        None,
        Vec::new(),
        None,
    );

    assert!(missing.validate().unwrap_err().has_field(ScheduleField::Frequency));
    assert!(unknown.validate().unwrap_err().has_field(ScheduleField::Frequency));
}

#[test]
fn time_of_day_requires_two_digit_hours() {
    let schedule = ScheduleModel::from_raw_parts(
        ScheduleType::Recurring,
        None,
        Some(Frequency::Daily),
        Some("7:30".to_string()),
        Vec::new(),
        None,
    );

    assert!(schedule.validate().unwrap_err().has_field(ScheduleField::TimeOfDay));
    assert_eq!(schedule.time_of_day(), Some(time(7, 30)));
}

#[test]
fn time_of_day_rejects_padded_or_short_fields() {
    for raw in [" 7:30", "07: 5", "7:30 ", "0730 ", "07-30"] {
        let schedule = ScheduleModel::from_raw_parts(
            ScheduleType::Recurring,
            None,
            Some(Frequency::Daily),
            Some(raw.to_string()),
            Vec::new(),
            None,
        );

        assert!(
            schedule.validate().unwrap_err().has_field(ScheduleField::TimeOfDay),
            "\"{raw}\" should be rejected"
        );
    }
}

#[test]
fn time_of_day_accepts_full_range() {
    for raw in ["00:00", "07:30", "23:59"] {
        let schedule = ScheduleModel::from_raw_parts(
            ScheduleType::Recurring,
            None,
            Some(Frequency::Daily),
            Some(raw.to_string()),
            Vec::new(),
            None,
        );

        assert_eq!(schedule.validate(), Ok(()), "\"{raw}\" should be accepted");
    }
}

#[test]
fn timestamp_shaped_time_of_day_is_read_in_local_time() {
    let schedule = ScheduleModel::from_raw_parts(
        ScheduleType::Recurring,
        None,
        Some(Frequency::Daily),
        Some("2026-10-16T07:30:00Z".to_string()),
        Vec::new(),
        None,
    );

    assert_eq!(schedule.time_of_day(), None);
    assert_eq!(schedule.local_time_of_day(&Utc), Some(time(7, 30)));
    assert_eq!(
        schedule.local_time_of_day(&chrono_tz::Europe::Prague),
        Some(time(9, 30))
    );
}

#[test]
fn days_keep_selection_order_without_repeats() {
    let schedule = ScheduleModel::recurring(Frequency::Weekly, None).with_days_of_week([
        DayOfWeek::Wednesday,
        DayOfWeek::Monday,
        DayOfWeek::Wednesday,
    ]);

    assert_eq!(
        schedule.days_of_week(),
        &[DayOfWeek::Wednesday, DayOfWeek::Monday]
    );
}

#[test]
fn schedule_reads_backend_json() {
    let json = r#"{
        "scheduleType": "RECURRING",
        "frequency": "WEEKLY",
        "timeOfDay": "09:00",
        "daysOfWeek": ["MONDAY", "WEDNESDAY"]
    }"#;

    let schedule: ScheduleModel = serde_json::from_str(json).unwrap();

    assert_eq!(schedule.frequency(), Some(Frequency::Weekly));
    assert_eq!(
        schedule.days_of_week(),
        &[DayOfWeek::Monday, DayOfWeek::Wednesday]
    );
    assert_eq!(schedule.validate(), Ok(()));
}

#[test]
fn repeated_days_from_backend_are_dropped() {
    let json = r#"{
        "scheduleType": "RECURRING",
        "frequency": "WEEKLY",
        "daysOfWeek": ["MONDAY", "FRIDAY", "MONDAY"]
    }"#;

    let schedule: ScheduleModel = serde_json::from_str(json).unwrap();

    assert_eq!(
        schedule.days_of_week(),
        &[DayOfWeek::Monday, DayOfWeek::Friday]
    );
}

#[test]
fn unknown_frequency_does_not_break_deserialization() {
    let json = r#"{ "scheduleType": "RECURRING", "frequency": "HOURLY" }"#;

    let schedule: ScheduleModel = serde_json::from_str(json).unwrap();

    assert_eq!(schedule.frequency(), Some(Frequency::Unknown));
}

#[test]
fn naive_timestamps_are_read_as_utc() {
    let expected = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap()
        .and_utc();

    assert_eq!(parse_timestamp("2026-03-01T08:15:00"), Some(expected));
    assert_eq!(parse_timestamp("2026-03-01T08:15"), Some(expected));
    assert_eq!(parse_timestamp("2026-03-01T09:15:00+01:00"), Some(expected));
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn display_time_parsing_drops_seconds() {
    assert_eq!(parse_time_of_day("18:00:45"), Some(time(18, 0)));
    assert_eq!(parse_time_of_day(" 06:05 "), Some(time(6, 5)));
    assert_eq!(parse_time_of_day("25:00"), None);
}

proptest::proptest! {
    #[test]
    fn validation_never_panics(
        fixed in proptest::bool::ANY,
        raw_time in proptest::option::of("[0-9:]{0,6}"),
        day in proptest::option::of(-5i32..40),
    ) {
        let schedule_type = if fixed { ScheduleType::Fixed } else { ScheduleType::Recurring };
        let schedule = ScheduleModel::from_raw_parts(
            schedule_type,
            raw_time.clone(),
            Some(Frequency::Monthly),
            raw_time,
            Vec::new(),
            day,
        );

        let _ = schedule.validate();
    }
}
