use async_trait::async_trait;
use tokio::sync::RwLock;

use sprout_models::reminder::{NewReminder, Reminder, ReminderId, ReminderStatus};

use crate::{ApiError, ReminderClient};

#[async_trait]
pub trait ReminderStore: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Reminder>>;
    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder>;
    async fn replace(&self, id: &str, reminder: NewReminder) -> anyhow::Result<Reminder>;
    async fn set_status(&self, id: &str, status: ReminderStatus) -> anyhow::Result<Reminder>;
    async fn delete(&self, id: &str) -> anyhow::Result<()>;
}

pub struct ApiReminderStore {
    client: ReminderClient,
}

impl ApiReminderStore {
    pub fn new(client: ReminderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReminderStore for ApiReminderStore {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Reminder>> {
        match self.client.get(id).await {
            Ok(reminder) => Ok(Some(reminder)),
            Err(ApiError::NotFound) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(self.client.list().await?)
    }

    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        Ok(self.client.create(&reminder).await?)
    }

    async fn replace(&self, id: &str, reminder: NewReminder) -> anyhow::Result<Reminder> {
        Ok(self.client.replace(id, &reminder).await?)
    }

    async fn set_status(&self, id: &str, status: ReminderStatus) -> anyhow::Result<Reminder> {
        Ok(self.client.set_status(id, status).await?)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        Ok(self.client.delete(id).await?)
    }
}

#[derive(Default)]
struct InMemoryStore {
    next_id: u64,
    reminders: Vec<Reminder>,
}

/// Keeps reminders in insertion order and applies the same status rules as the backend.
#[derive(Default)]
pub struct InMemoryReminderStore {
    store: RwLock<InMemoryStore>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReminderStore for InMemoryReminderStore {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Reminder>> {
        let store = self.store.read().await;
        Ok(store.reminders.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        Ok(store.reminders.clone())
    }

    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id: ReminderId = store.next_id.to_string();
        let reminder = reminder.into_reminder(id);
        store.reminders.push(reminder.clone());

        log::info!("Inserted reminder {}", reminder.id);
        Ok(reminder)
    }

    async fn replace(&self, id: &str, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        let Some(existing) = store.reminders.iter_mut().find(|r| r.id == id) else {
            anyhow::bail!("Does not exist");
        };

        let status = existing.status;
        *existing = reminder.into_reminder(existing.id.clone());
        existing.status = status;
        Ok(existing.clone())
    }

    async fn set_status(&self, id: &str, status: ReminderStatus) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        let Some(existing) = store.reminders.iter_mut().find(|r| r.id == id) else {
            anyhow::bail!("Does not exist");
        };

        existing.apply_status(status)?;
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let mut store = self.store.write().await;
        let before = store.reminders.len();
        store.reminders.retain(|r| r.id != id);
        if store.reminders.len() == before {
            anyhow::bail!("Does not exist");
        }
        Ok(())
    }
}
