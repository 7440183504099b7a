mod base;
mod reminder;
mod session;
mod store;

pub(crate) use base::BaseClient;
pub use base::{ApiEnvelope, ApiError, ApiResponse};
pub use reminder::ReminderClient;
pub use session::Session;
pub use store::{ApiReminderStore, InMemoryReminderStore, ReminderStore};

use std::sync::Arc;

/// Typed client for the gardening backend.
#[derive(Clone)]
pub struct SproutClient {
    pub reminders: ReminderClient,
}

impl SproutClient {
    pub fn new(address: impl Into<String>, session: Session) -> Self {
        let base = Arc::new(BaseClient::new(address.into(), session));
        let reminders = ReminderClient::new(base);

        Self { reminders }
    }
}
