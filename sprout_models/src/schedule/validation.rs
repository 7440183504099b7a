use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

use super::{Frequency, ScheduleModel, ScheduleType, parse_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    FixedDateTime,
    Frequency,
    TimeOfDay,
    DaysOfWeek,
    DayOfMonth,
}

impl ScheduleField {
    pub fn name(&self) -> &'static str {
        match self {
            ScheduleField::FixedDateTime => "fixedDateTime",
            ScheduleField::Frequency => "frequency",
            ScheduleField::TimeOfDay => "timeOfDay",
            ScheduleField::DaysOfWeek => "daysOfWeek",
            ScheduleField::DayOfMonth => "dayOfMonth",
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: ScheduleField,
    pub message: String,
}

impl FieldError {
    fn new(field: ScheduleField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every problem found in a schedule, so a form can show them all at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schedule: {}", join_errors(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: ScheduleField) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |error| error.field == field)
    }

    pub fn has_field(&self, field: ScheduleField) -> bool {
        self.for_field(field).next().is_some()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}

pub(super) fn validate(schedule: &ScheduleModel) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    match schedule.schedule_type {
        ScheduleType::Fixed => match schedule.fixed_date_time.as_deref() {
            None => errors.push(FieldError::new(
                ScheduleField::FixedDateTime,
                "is required for a fixed schedule",
            )),
            Some(raw) if parse_timestamp(raw).is_none() => errors.push(FieldError::new(
                ScheduleField::FixedDateTime,
                format!("\"{raw}\" is not a valid timestamp"),
            )),
            Some(_) => {}
        },
        ScheduleType::Recurring => validate_recurring(schedule, &mut errors),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn validate_recurring(schedule: &ScheduleModel, errors: &mut Vec<FieldError>) {
    match schedule.frequency {
        None => errors.push(FieldError::new(
            ScheduleField::Frequency,
            "is required for a recurring schedule",
        )),
        Some(Frequency::Unknown) => errors.push(FieldError::new(
            ScheduleField::Frequency,
            "must be one of ONE_TIME, DAILY, WEEKLY, MONTHLY",
        )),
        Some(Frequency::Weekly) if schedule.days_of_week.is_empty() => errors.push(
            FieldError::new(ScheduleField::DaysOfWeek, "select at least one weekday"),
        ),
        Some(Frequency::Monthly) => match schedule.day_of_month {
            Some(day) if (1..=31).contains(&day) => {}
            Some(day) if day != super::UNSPECIFIED_DAY_OF_MONTH => errors.push(FieldError::new(
                ScheduleField::DayOfMonth,
                format!("{day} is not between 1 and 31"),
            )),
            _ => errors.push(FieldError::new(
                ScheduleField::DayOfMonth,
                "is required for a monthly schedule",
            )),
        },
        Some(_) => {}
    }

    if let Some(raw) = schedule.time_of_day.as_deref() {
        if !has_time_shape(raw) || NaiveTime::parse_from_str(raw, "%H:%M").is_err() {
            errors.push(FieldError::new(
                ScheduleField::TimeOfDay,
                format!("\"{raw}\" must look like HH:MM (00:00 to 23:59)"),
            ));
        }
    }
}

/// Exactly two digits, a colon, two digits.
fn has_time_shape(raw: &str) -> bool {
    matches!(
        raw.as_bytes(),
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
    )
}
