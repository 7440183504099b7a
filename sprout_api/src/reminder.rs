use std::sync::Arc;

use serde::Serialize;
use sprout_models::reminder::{NewReminder, Reminder, ReminderStatus};

use crate::{ApiEnvelope, ApiResponse, BaseClient};

#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: ReminderStatus,
}

pub(crate) fn reminder_path(id: &str) -> String {
    format!("reminders/{id}")
}

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> ApiResponse<Vec<Reminder>> {
        let envelope: ApiEnvelope<Vec<Reminder>> = self.base.get("reminders").await?;
        Ok(envelope.result)
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Reminder> {
        let envelope: ApiEnvelope<Reminder> = self.base.get(&reminder_path(id)).await?;
        Ok(envelope.result)
    }

    pub async fn create(&self, reminder: &NewReminder) -> ApiResponse<Reminder> {
        let envelope: ApiEnvelope<Reminder> = self.base.post(reminder, "reminders").await?;
        if let Some(message) = &envelope.message {
            log::info!("Reminder created: {message}");
        }
        Ok(envelope.result)
    }

    /// Replaces the whole reminder, schedule included.
    pub async fn replace(&self, id: &str, reminder: &NewReminder) -> ApiResponse<Reminder> {
        let envelope: ApiEnvelope<Reminder> = self.base.put(reminder, &reminder_path(id)).await?;
        Ok(envelope.result)
    }

    pub async fn set_status(&self, id: &str, status: ReminderStatus) -> ApiResponse<Reminder> {
        let path = format!("{}/status", reminder_path(id));
        let envelope: ApiEnvelope<Reminder> = self.base.put(&StatusUpdate { status }, &path).await?;
        Ok(envelope.result)
    }

    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.base
            .delete::<Option<serde_json::Value>>(&reminder_path(id))
            .await?;
        Ok(())
    }
}
