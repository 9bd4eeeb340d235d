//! The `.form-message` banner and expiry of success messages.

use std::time::Duration;

use crate::options::FormOptions;

/// Base class of the status element under the form.
pub const NOTICE_CLASS: &str = "form-message";

/// Success or failure flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The message was delivered.
    Success,
    /// Validation or delivery failed.
    Error,
}

impl NoticeKind {
    /// Modifier class appended to [`NOTICE_CLASS`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A status message to render under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNotice {
    /// Text content.
    pub text: String,
    /// Flavor.
    pub kind: NoticeKind,
}

impl FormNotice {
    /// Success notice.
    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            kind: NoticeKind::Success,
        }
    }

    /// Error notice.
    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            kind: NoticeKind::Error,
        }
    }

    /// Full `class` attribute, e.g. `form-message success`.
    pub fn class_name(&self) -> String {
        format!("{NOTICE_CLASS} {}", self.kind.as_str())
    }

    /// How long the notice stays up. Errors persist until replaced.
    pub fn lifetime(&self, options: &FormOptions) -> Option<Duration> {
        match self.kind {
            NoticeKind::Success => Some(options.success_clear_delay()),
            NoticeKind::Error => None,
        }
    }
}

/// Hands out a ticket per shown notice so a clear timer only removes the
/// notice it was armed for.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    generation: u64,
}

impl NoticeBoard {
    /// Board with nothing shown yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new notice replaced whatever was shown. Returns its ticket.
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// A clear timer fired for `ticket`. True when that notice is still
    /// the current one and should be removed.
    pub fn expire(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names() {
        assert_eq!(FormNotice::success("ok").class_name(), "form-message success");
        assert_eq!(FormNotice::error("no").class_name(), "form-message error");
    }

    #[test]
    fn only_success_expires() {
        let options = FormOptions::default();
        assert_eq!(
            FormNotice::success("ok").lifetime(&options),
            Some(Duration::from_secs(10))
        );
        assert_eq!(FormNotice::error("no").lifetime(&options), None);
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.show();
        let second = board.show();
        assert!(!board.expire(first));
        assert!(board.expire(second));
    }
}
