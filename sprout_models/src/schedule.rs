mod validation;

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use validation::{FieldError, ScheduleField, ValidationErrors};

/// Wire value the backend uses for "no day of month selected".
pub const UNSPECIFIED_DAY_OF_MONTH: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleType {
    Fixed,
    Recurring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    OneTime,
    Daily,
    Weekly,
    Monthly,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn short_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(value: DayOfWeek) -> Self {
        match value {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Timing rule attached to a reminder.
///
/// The value is never edited in place: an update replaces the whole schedule.
/// Fields that do not belong to the active `schedule_type` branch are kept as
/// received but ignored by validation and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleModel {
    schedule_type: ScheduleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fixed_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_of_day: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_days"
    )]
    days_of_week: Vec<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_of_month: Option<i32>,
}

impl ScheduleModel {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            schedule_type: ScheduleType::Fixed,
            fixed_date_time: Some(at.to_rfc3339()),
            frequency: None,
            time_of_day: None,
            days_of_week: Vec::new(),
            day_of_month: None,
        }
    }

    pub fn recurring(frequency: Frequency, time_of_day: Option<NaiveTime>) -> Self {
        Self {
            schedule_type: ScheduleType::Recurring,
            fixed_date_time: None,
            frequency: Some(frequency),
            time_of_day: time_of_day.map(|time| time.format("%H:%M").to_string()),
            days_of_week: Vec::new(),
            day_of_month: None,
        }
    }

    /// Builds a schedule straight from raw form values, without any checks.
    pub fn from_raw_parts(
        schedule_type: ScheduleType,
        fixed_date_time: Option<String>,
        frequency: Option<Frequency>,
        time_of_day: Option<String>,
        days_of_week: Vec<DayOfWeek>,
        day_of_month: Option<i32>,
    ) -> Self {
        Self {
            schedule_type,
            fixed_date_time,
            frequency,
            time_of_day,
            days_of_week,
            day_of_month,
        }
    }

    /// Selected weekdays keep the order they were picked in. Repeats are dropped.
    pub fn with_days_of_week(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        self.days_of_week = unique_days(days);
        self
    }

    pub fn with_day_of_month(mut self, day: i32) -> Self {
        self.day_of_month = Some(day);
        self
    }

    pub fn schedule_type(&self) -> ScheduleType {
        self.schedule_type
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn days_of_week(&self) -> &[DayOfWeek] {
        &self.days_of_week
    }

    pub fn day_of_month_raw(&self) -> Option<i32> {
        self.day_of_month
    }

    /// Day of month with the `-1` wire sentinel folded into `None`.
    pub fn day_of_month(&self) -> Option<i32> {
        self.day_of_month
            .filter(|day| *day != UNSPECIFIED_DAY_OF_MONTH)
    }

    pub fn fixed_date_time(&self) -> Option<DateTime<Utc>> {
        self.fixed_date_time.as_deref().and_then(parse_timestamp)
    }

    pub fn time_of_day(&self) -> Option<NaiveTime> {
        self.time_of_day.as_deref().and_then(parse_time_of_day)
    }

    /// Like [`Self::time_of_day`], but a full timestamp in `timeOfDay` is
    /// converted to `timezone` before taking its hour and minute.
    pub fn local_time_of_day<Tz: TimeZone>(&self, timezone: &Tz) -> Option<NaiveTime> {
        let raw = self.time_of_day.as_deref()?;
        parse_time_of_day(raw).or_else(|| {
            let local = parse_timestamp(raw)?.with_timezone(timezone);
            NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)
        })
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validation::validate(self)
    }
}

fn unique_days(days: impl IntoIterator<Item = DayOfWeek>) -> Vec<DayOfWeek> {
    let mut selected = Vec::new();
    for day in days {
        if !selected.contains(&day) {
            selected.push(day);
        }
    }
    selected
}

fn deserialize_days<'de, D>(deserializer: D) -> Result<Vec<DayOfWeek>, D::Error>
where
    D: Deserializer<'de>,
{
    let days = Vec::<DayOfWeek>::deserialize(deserializer)?;
    Ok(unique_days(days))
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` timestamp read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Lenient `HH:MM` parsing used for display. Seconds are tolerated and dropped.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
        .and_then(|time| time.with_second(0))
}

#[cfg(test)]
mod tests;
