pub mod reminder;
pub mod schedule;
pub mod settings;

pub use chrono;
pub use chrono_tz;
