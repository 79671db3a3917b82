//! User-facing messages shown after an operation completes.
//!
//! Add and delete always end with a list refresh, whatever the service
//! answered. Only the notice depends on the outcome.

use crate::error::ClientError;

/// success or failure styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// single message for the notice banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// a mutating record operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Delete,
}

/// what the ui does once an add or delete has answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notice: Notice,
    /// re-run the list fetch
    pub refresh: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(err: &ClientError) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: err.user_message(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl Operation {
    fn success_message(self) -> &'static str {
        match self {
            Self::Add => "Record added!",
            Self::Delete => "Record deleted!",
        }
    }

    /// Notice and follow-up for an answered request.
    ///
    /// The success message is shown only for a 2xx answer; the list is
    /// refreshed either way so rows never point at stale ids.
    pub fn complete(self, result: &Result<(), ClientError>) -> Completion {
        let notice = match result {
            Ok(()) => Notice::success(self.success_message()),
            Err(e) => Notice::error(e),
        };
        Completion { notice, refresh: true }
    }
}

impl Completion {
    /// Notice to show once the follow-up refresh has finished.
    ///
    /// A failed operation keeps its own error; a list error only replaces a
    /// success message.
    pub fn after_refresh(self, refresh: &Result<(), ClientError>) -> Notice {
        match refresh {
            Err(e) if !self.notice.is_error() => Notice::error(e),
            _ => self.notice,
        }
    }
}
