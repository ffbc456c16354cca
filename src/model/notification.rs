use std::str::FromStr;

pub const CREATED_MESSAGE: &str = "Logged. Try not to forget it this time.";
pub const COMPLETED_MESSAGE: &str = "Completed. My faith in you rises slightly.";
pub const DELETED_MESSAGE: &str = "Gone. As if it never happened.";
pub const UPDATED_MESSAGE: &str = "Polished. Much better.";

/// Which kind of change a notification reports. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    Create,
    Update,
    Delete,
    Complete,
    /// Fallback for kind names nothing recognizes
    #[default]
    Neutral,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Create => "create",
            NotificationKind::Update => "update",
            NotificationKind::Delete => "delete",
            NotificationKind::Complete => "complete",
            NotificationKind::Neutral => "neutral",
        }
    }

    /// Lenient parse: anything unknown maps to `Neutral`
    pub fn from_name(name: &str) -> Self {
        match name {
            "create" => NotificationKind::Create,
            "update" => NotificationKind::Update,
            "delete" => NotificationKind::Delete,
            "complete" => NotificationKind::Complete,
            _ => NotificationKind::Neutral,
        }
    }
}

impl FromStr for NotificationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NotificationKind::from_name(s))
    }
}

/// A short-lived status message shown after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Notification {
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_round_trip_through_names() {
        for kind in [
            NotificationKind::Create,
            NotificationKind::Update,
            NotificationKind::Delete,
            NotificationKind::Complete,
        ] {
            assert_eq!(NotificationKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_kind_is_neutral() {
        assert_eq!(NotificationKind::from_name("panic"), NotificationKind::Neutral);
        assert_eq!(NotificationKind::from_name(""), NotificationKind::Neutral);
        assert_eq!(
            "Complete".parse::<NotificationKind>().unwrap(),
            NotificationKind::Neutral
        );
    }
}
