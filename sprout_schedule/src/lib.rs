mod next_occurrence;
mod occurrence;
mod status;

pub use next_occurrence::{next_occurrence, next_reminder_occurrence};
pub use occurrence::{OccurrenceFormatter, describe};
pub use status::{BadgeColor, StatusBadge, project};
