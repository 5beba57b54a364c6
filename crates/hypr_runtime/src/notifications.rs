//! Toast notification queue: append-ordered, self-expiring entries keyed by
//! creation timestamp.

use serde::{Deserialize, Serialize};

/// Expiry applied when a producer does not pick a duration.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual severity of a toast.
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Stable token used for styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Producer-side payload for a new toast.
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    /// Expiry override in milliseconds; defaults to
    /// [`DEFAULT_NOTIFICATION_DURATION_MS`].
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One queued toast. The id is the creation timestamp in unix milliseconds;
/// two entries created in the same millisecond share an id, and a dismissal
/// then removes both. Accepted, not deduplicated.
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    pub duration_ms: u64,
}

/// Appends a toast (insertion order is display order) and returns its id and
/// resolved duration so the caller can arm the expiry timer.
pub fn push(
    list: &mut Vec<Notification>,
    request: NotificationRequest,
    now_ms: u64,
) -> (u64, u64) {
    let duration_ms = request
        .duration_ms
        .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS);
    list.push(Notification {
        id: now_ms,
        kind: request.kind,
        title: request.title,
        message: request.message,
        duration_ms,
    });
    (now_ms, duration_ms)
}

/// Removes every entry with the given id.
pub fn dismiss(list: &mut Vec<Notification>, id: u64) {
    list.retain(|entry| entry.id != id);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(message: &str, duration_ms: Option<u64>) -> NotificationRequest {
        NotificationRequest {
            kind: NotificationKind::Info,
            title: None,
            message: message.to_string(),
            duration_ms,
        }
    }

    #[test]
    fn push_assigns_the_creation_timestamp_as_id() {
        let mut list = Vec::new();
        let (id, duration) = push(&mut list, request("hello", None), 1_700_000_000_000);
        assert_eq!(id, 1_700_000_000_000);
        assert_eq!(duration, DEFAULT_NOTIFICATION_DURATION_MS);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insertion_order_is_display_order() {
        let mut list = Vec::new();
        push(&mut list, request("first", None), 1);
        push(&mut list, request("second", None), 2);
        let messages: Vec<_> = list.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn dismiss_removes_only_matching_ids() {
        let mut list = Vec::new();
        push(&mut list, request("keep", None), 1);
        push(&mut list, request("drop", None), 2);
        dismiss(&mut list, 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].message, "keep");
    }

    #[test]
    fn same_millisecond_entries_share_an_id_and_dismiss_together() {
        let mut list = Vec::new();
        push(&mut list, request("a", None), 5);
        push(&mut list, request("b", None), 5);
        assert_eq!(list[0].id, list[1].id);
        dismiss(&mut list, 5);
        assert!(list.is_empty());
    }

    #[test]
    fn explicit_duration_overrides_the_default() {
        let mut list = Vec::new();
        let (_, duration) = push(&mut list, request("quick", Some(100)), 1);
        assert_eq!(duration, 100);
        assert_eq!(list[0].duration_ms, 100);
    }
}
