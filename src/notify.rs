/*!
 * User-facing notifications.
 *
 * Each failure category gets its own message, and error-class notifications
 * stay visible longer than success ones.
 */

use std::time::Duration;

/// How long success notifications stay visible
const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

/// How long error notifications stay visible
const ERROR_DISPLAY: Duration = Duration::from_secs(5);

/// Notification severity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational / success
    Success,
    /// Any failure category
    Error,
}

/// One user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text shown to the user
    pub message: String,
    /// Severity class, drives display duration
    pub severity: Severity,
}

impl Notification {
    /// Build a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Build an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Translation resolved and displayed
    pub fn translated() -> Self {
        Self::success("Translation complete.")
    }

    /// Dictionary and remote fallback both came up empty
    pub fn not_found() -> Self {
        Self::error("No translation available. Try different text.")
    }

    /// Something unexpected broke during resolution
    pub fn internal_error() -> Self {
        Self::error("An error occurred during translation.")
    }

    /// A capture collaborator could not produce input text
    pub fn capture_failed(detail: &str) -> Self {
        Self::error(format!("Capture failed: {}", detail))
    }

    /// Language direction changed
    pub fn languages_swapped() -> Self {
        Self::success("Languages swapped.")
    }

    /// How long this notification should stay on screen
    pub fn display_duration(&self) -> Duration {
        match self.severity {
            Severity::Success => SUCCESS_DISPLAY,
            Severity::Error => ERROR_DISPLAY,
        }
    }
}
