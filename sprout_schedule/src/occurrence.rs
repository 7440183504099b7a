use sprout_models::{
    chrono::{NaiveTime, Timelike},
    chrono_tz::{self, Tz},
    schedule::{Frequency, ScheduleModel, ScheduleType},
};

const FIXED_FORMAT: &str = "%-d %b %Y, %H:%M";
const TIME_FORMAT: &str = "%H:%M";

/// Renders schedules as the short strings shown in reminder lists.
///
/// Formatting never fails. Missing or malformed fields only make the
/// description shorter, down to an empty string.
#[derive(Debug, Clone, Copy)]
pub struct OccurrenceFormatter {
    timezone: Tz,
}

impl Default for OccurrenceFormatter {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

impl OccurrenceFormatter {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn describe(&self, schedule: &ScheduleModel) -> String {
        match schedule.schedule_type() {
            ScheduleType::Fixed => schedule
                .fixed_date_time()
                .map(|at| {
                    at.with_timezone(&self.timezone)
                        .format(FIXED_FORMAT)
                        .to_string()
                })
                .unwrap_or_default(),
            ScheduleType::Recurring => self.describe_recurring(schedule),
        }
    }

    /// Time of day pre-filled in the edit form.
    pub fn edit_time_value(&self, schedule: &ScheduleModel) -> Option<NaiveTime> {
        match schedule.schedule_type() {
            ScheduleType::Fixed => schedule.fixed_date_time().and_then(|at| {
                let local = at.with_timezone(&self.timezone);
                NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)
            }),
            ScheduleType::Recurring => schedule.local_time_of_day(&self.timezone),
        }
    }

    fn describe_recurring(&self, schedule: &ScheduleModel) -> String {
        let label = match schedule.frequency() {
            Some(Frequency::OneTime) => "One time".to_string(),
            Some(Frequency::Daily) => "Daily".to_string(),
            Some(Frequency::Weekly) if schedule.days_of_week().is_empty() => "Weekly".to_string(),
            Some(Frequency::Weekly) => schedule
                .days_of_week()
                .iter()
                .map(|day| day.short_name())
                .collect::<Vec<&str>>()
                .join(", "),
            Some(Frequency::Monthly) => match schedule.day_of_month() {
                Some(day) => format!("Day {day}"),
                None => "Monthly".to_string(),
            },
            Some(Frequency::Unknown) | None => return String::new(),
        };

        match schedule.local_time_of_day(&self.timezone) {
            Some(time) => format!("{label} at {}", time.format(TIME_FORMAT)),
            None => label,
        }
    }
}

pub fn describe(schedule: &ScheduleModel) -> String {
    OccurrenceFormatter::default().describe(schedule)
}
