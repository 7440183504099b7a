use sprout_models::{
    chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Weekday},
    reminder::Reminder,
    schedule::{Frequency, ScheduleModel, ScheduleType},
};

const MAX_LOOKAHEAD_DAYS: u64 = 366;

/// First firing instant strictly after `now`, in `now`'s timezone.
///
/// Recurring schedules without a time of day fire at midnight. Local times
/// that fall into a DST gap are skipped in favour of the next matching day.
pub fn next_occurrence<Tz: TimeZone>(
    schedule: &ScheduleModel,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    match schedule.schedule_type() {
        ScheduleType::Fixed => schedule
            .fixed_date_time()
            .map(|at| at.with_timezone(&now.timezone()))
            .filter(|at| at > now),
        ScheduleType::Recurring => {
            let fire_at = schedule
                .local_time_of_day(&now.timezone())
                .unwrap_or(NaiveTime::MIN);
            match schedule.frequency()? {
                Frequency::OneTime | Frequency::Daily => first_matching_day(now, fire_at, |_| true),
                Frequency::Weekly => {
                    let weekdays: Vec<Weekday> = schedule
                        .days_of_week()
                        .iter()
                        .map(|day| Weekday::from(*day))
                        .collect();
                    if weekdays.is_empty() {
                        return None;
                    }
                    first_matching_day(now, fire_at, |date| weekdays.contains(&date.weekday()))
                }
                Frequency::Monthly => {
                    let day = schedule
                        .day_of_month()
                        .and_then(|day| u32::try_from(day).ok())
                        .filter(|day| (1..=31).contains(day))?;
                    first_matching_day(now, fire_at, |date| date.day() == day)
                }
                Frequency::Unknown => None,
            }
        }
    }
}

/// Completed and skipped reminders do not fire again.
pub fn next_reminder_occurrence<Tz: TimeZone>(
    reminder: &Reminder,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    if reminder.status.is_terminal() {
        return None;
    }
    next_occurrence(&reminder.schedule, now)
}

fn first_matching_day<Tz: TimeZone>(
    now: &DateTime<Tz>,
    fire_at: NaiveTime,
    matches: impl Fn(&NaiveDate) -> bool,
) -> Option<DateTime<Tz>> {
    let timezone = now.timezone();
    let today = now.date_naive();

    (0..=MAX_LOOKAHEAD_DAYS)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| matches(date))
        .find_map(|date| {
            let local = timezone.from_local_datetime(&date.and_time(fire_at));
            [local.clone().earliest(), local.latest()]
                .into_iter()
                .flatten()
                .find(|candidate| candidate > now)
        })
}
