//! Transient notices — short-lived, non-blocking user-visible messages.
//!
//! The core only defines the message and its severity; how long a notice
//! stays on screen is the shell's business.

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn label(self) -> &'static str {
        match self {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Warning => "WARN",
            NoticeLevel::Error => "ERR",
        }
    }
}

/// A toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: NoticeLevel::Info }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: NoticeLevel::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: NoticeLevel::Error }
    }
}
