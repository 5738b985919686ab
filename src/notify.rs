//! Transient toast notifications for favourites mutations.

use std::time::{Duration, Instant};

/// How long a toast stays on screen before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_millis(1700);

/// Outcome flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Header text on the toast.
    pub fn header(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }
}

/// A toast shown after a favourites mutation. Destroyed by timeout or by
/// the user closing it.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    shown_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_TTL
    }

    /// Time left before auto-dismissal, for scheduling the next repaint.
    pub fn remaining(&self) -> Duration {
        NOTICE_TTL.saturating_sub(self.shown_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::success("Successfully added to Favourite");
        let shown = notice.shown_at;

        assert!(!notice.is_expired_at(shown));
        assert!(!notice.is_expired_at(shown + Duration::from_millis(1699)));
        assert!(notice.is_expired_at(shown + NOTICE_TTL));
        assert!(notice.is_expired_at(shown + Duration::from_secs(5)));
    }

    #[test]
    fn test_notice_headers() {
        assert_eq!(Notice::success("ok").kind.header(), "Success");
        assert_eq!(Notice::error("no").kind.header(), "Error");
    }
}
