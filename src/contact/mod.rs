pub mod view;

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long the success notice stays up before it removes itself.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(3);

// Permissive on purpose: something, an @, something, a dot, something.
// Good enough to catch typos without rejecting unusual mailboxes.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Checks the three fields in order and collects every failure, so the
/// visitor sees all problems at once rather than one per attempt.
pub fn validate_form(data: &FormData) -> Vec<String> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }

    if data.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(&data.email) {
        errors.push("Please enter a valid email address".to_string());
    }

    if data.message.trim().is_empty() {
        errors.push("Message is required".to_string());
    }

    errors
}

/// One recorded message. Append-only: submissions are never edited or
/// removed once stamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Submission {
    pub fn new(data: FormData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            message: data.message,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    NoticeDismissed,
    NoticeExpired(usize),
}

/// The form's working state: field values, inline errors from the last
/// attempt, and the success notice with its expiry token.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: Vec<String>,
    notice: Option<usize>,
    notice_seq: usize,
}

impl ContactForm {
    pub fn data(&self) -> FormData {
        FormData {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Clears every field and any lingering errors.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors.clear();
    }

    /// Shows the success notice and returns the token its expiry must
    /// present. A newer notice invalidates older tokens, so a slow timer
    /// cannot take down a notice it does not own.
    pub fn show_notice(&mut self) -> usize {
        self.notice_seq += 1;
        self.notice = Some(self.notice_seq);
        self.notice_seq
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn expire_notice(&mut self, token: usize) {
        if self.notice == Some(token) {
            self.notice = None;
        }
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_some()
    }
}
