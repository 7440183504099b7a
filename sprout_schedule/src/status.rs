use sprout_models::reminder::ReminderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Active,
    Muted,
    Warning,
}

impl BadgeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BadgeColor::Active => "#2E7D32",
            BadgeColor::Muted => "#9E9E9E",
            BadgeColor::Warning => "#F9A825",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

pub fn project(status: ReminderStatus) -> StatusBadge {
    match status {
        ReminderStatus::Pending => StatusBadge {
            label: "PENDING",
            color: BadgeColor::Active,
        },
        ReminderStatus::Done => StatusBadge {
            label: "DONE",
            color: BadgeColor::Muted,
        },
        ReminderStatus::Skipped => StatusBadge {
            label: "SKIPPED",
            color: BadgeColor::Warning,
        },
    }
}
