//! 添加域名对话框状态机
//!
//! ```text
//! Closed ──open──▶ Editing ──submit(valid)──▶ Submitting ──ok──▶ Closed
//!    ▲               │  ▲                          │
//!    └────cancel─────┘  └──submit(empty) / err─────┘
//! ```
//!
//! `Submitting` has no cancel exit.

use crate::types::normalize_domain_name;

/// Shown when the normalized name is empty.
pub const EMPTY_NAME_ERROR: &str = "Enter a domain name to continue.";
/// Shown when creation fails and the store gave no message.
pub const CREATE_FAILED_FALLBACK: &str = "Unable to add domain. Please try again.";

/// Focusable fields inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct AddDomainDialog {
    is_open: bool,
    name_input: String,
    submitting: bool,
    error: Option<String>,
    /// Input focus; held only while the dialog is open.
    focus: Option<DialogField>,
}

impl AddDomainDialog {
    pub fn phase(&self) -> DialogPhase {
        match (self.is_open, self.submitting) {
            (false, _) => DialogPhase::Closed,
            (true, false) => DialogPhase::Editing,
            (true, true) => DialogPhase::Submitting,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus(&self) -> Option<DialogField> {
        self.focus
    }

    /// Open with an empty input and focus on the name field.
    /// Ignored while a submission is outstanding.
    pub fn open(&mut self) {
        if self.submitting {
            return;
        }
        *self = Self {
            is_open: true,
            focus: Some(DialogField::Name),
            ..Self::default()
        };
    }

    /// Store raw input and clear any error.
    pub fn update_name(&mut self, value: impl Into<String>) {
        if !self.is_open {
            return;
        }
        self.name_input = value.into();
        self.error = None;
    }

    /// Validate the input. Returns the normalized name to create, or `None`
    /// when nothing should be sent (closed, already submitting, or empty
    /// input, in which case the error is set).
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.is_open || self.submitting {
            return None;
        }
        let name = normalize_domain_name(&self.name_input);
        if name.is_empty() {
            self.error = Some(EMPTY_NAME_ERROR.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(name)
    }

    /// Creation confirmed: reset to closed.
    pub fn finish_success(&mut self) {
        *self = Self::default();
    }

    /// Creation failed: stay open with the store's message or the fallback.
    pub fn finish_failure(&mut self, message: Option<String>) {
        self.submitting = false;
        self.error = Some(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| CREATE_FAILED_FALLBACK.to_string()),
        );
    }

    /// Close and reset, unless a submission is outstanding.
    /// Returns whether the dialog closed.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        *self = Self::default();
        true
    }
}
