//! Notice queue for brief, user-visible feedback.
//!
//! Notices are renderer-agnostic: a UI shows [`NoticeQueue::active`] however
//! it likes and calls [`NoticeQueue::dismiss`] when the user closes one.
//! Success and info notices expire on their own; warnings and errors stay
//! until dismissed.

use std::time::{Duration, Instant};

/// How long self-expiring notices stay up.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Get the icon for this level
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✓",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "✗",
        }
    }

    /// Whether notices of this level must be dismissed by the user.
    pub fn is_sticky(&self) -> bool {
        matches!(self, NoticeLevel::Warning | NoticeLevel::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

/// A single notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub level: NoticeLevel,
    pub created_at: Instant,
    /// `None` for notices that stay until dismissed.
    pub duration: Option<Duration>,
}

impl Notice {
    fn new(id: NoticeId, message: String, level: NoticeLevel, created_at: Instant) -> Self {
        let duration = if level.is_sticky() {
            None
        } else {
            Some(DEFAULT_NOTICE_DURATION)
        };
        Self {
            id,
            message,
            level,
            created_at,
            duration,
        }
    }

    /// Check if this notice has expired at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(duration) => now.saturating_duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

/// Ordered collection of live notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice created now
    pub fn push(&mut self, message: impl Into<String>, level: NoticeLevel) -> NoticeId {
        self.push_at(message, level, Instant::now())
    }

    pub fn push_at(&mut self, message: impl Into<String>, level: NoticeLevel, now: Instant) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        let message = message.into();
        log::debug!("Notice {:?} ({:?}): {}", id, level, message);
        self.notices.push(Notice::new(id, message, level, now));
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(message, NoticeLevel::Success)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(message, NoticeLevel::Info)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(message, NoticeLevel::Warning)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(message, NoticeLevel::Error)
    }

    /// Removes the notice; returns whether it was still present.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Remove expired notices, returning how many were dropped
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired_at(now));
        before - self.notices.len()
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
