use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::ScheduleModel;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Done,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reminder cannot move from {from:?} to {to:?}")]
pub struct TransitionError {
    pub from: ReminderStatus,
    pub to: ReminderStatus,
}

impl ReminderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReminderStatus::Pending)
    }

    /// Only a pending reminder can be completed or skipped.
    pub fn transition(self, to: ReminderStatus) -> Result<ReminderStatus, TransitionError> {
        match (self, to) {
            (ReminderStatus::Pending, ReminderStatus::Done | ReminderStatus::Skipped) => Ok(to),
            (from, to) => Err(TransitionError { from, to }),
        }
    }
}

pub type ReminderId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(alias = "_id")]
    pub id: ReminderId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garden_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
    #[serde(flatten)]
    pub schedule: ScheduleModel,
    #[serde(default)]
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn apply_status(&mut self, to: ReminderStatus) -> Result<(), TransitionError> {
        self.status = self.status.transition(to)?;
        Ok(())
    }
}

/// Payload for creating a reminder or replacing an existing one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garden_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
    #[serde(flatten)]
    pub schedule: ScheduleModel,
}

impl NewReminder {
    pub fn new(title: impl Into<String>, schedule: ScheduleModel) -> Self {
        Self {
            title: title.into(),
            description: None,
            garden_id: None,
            plant_id: None,
            schedule,
        }
    }

    pub fn into_reminder(self, id: ReminderId) -> Reminder {
        Reminder {
            id,
            title: self.title,
            description: self.description,
            garden_id: self.garden_id,
            plant_id: self.plant_id,
            schedule: self.schedule,
            status: ReminderStatus::Pending,
        }
    }
}

impl From<Reminder> for NewReminder {
    fn from(value: Reminder) -> Self {
        Self {
            title: value.title,
            description: value.description,
            garden_id: value.garden_id,
            plant_id: value.plant_id,
            schedule: value.schedule,
        }
    }
}
