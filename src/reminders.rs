use chrono::DateTime;
use chrono_tz::Tz;
use sprout_api::ReminderStore;
use sprout_models::reminder::{Reminder, ReminderStatus};
use sprout_schedule::{OccurrenceFormatter, next_reminder_occurrence, project};

/// Moves a reminder out of PENDING. Illegal transitions never reach the store.
pub async fn mark_reminder(
    store: &dyn ReminderStore,
    id: &str,
    status: ReminderStatus,
) -> anyhow::Result<Reminder> {
    let Some(mut reminder) = store.get(id).await? else {
        anyhow::bail!("No such reminder {id}");
    };

    reminder.apply_status(status)?;
    let updated = store.set_status(id, reminder.status).await?;

    log::info!("Reminder {} is now {:?}", updated.id, updated.status);
    Ok(updated)
}

pub fn display_reminder(
    reminder: &Reminder,
    formatter: &OccurrenceFormatter,
    now: &DateTime<Tz>,
) -> String {
    let badge = project(reminder.status);
    let occurrence = formatter.describe(&reminder.schedule);
    let next = next_reminder_occurrence(reminder, now)
        .map(|at| format!(" next: {}", at.format("%a %-d %b %H:%M")))
        .unwrap_or_default();

    let line = if occurrence.is_empty() {
        format!("[{}] {}", badge.label, reminder.title)
    } else {
        format!("[{}] {} ({occurrence})", badge.label, reminder.title)
    };

    format!("{line}{next} id={}", reminder.id)
}
