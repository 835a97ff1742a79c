// SPDX-License-Identifier: MPL-2.0
//! Transient state of one submission feedback sequence.

/// Visible phase of the feedback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Overlay closed, nothing in flight.
    #[default]
    Idle,
    /// Overlay open with the loading card active.
    Loading,
    /// Overlay open with the success card active.
    Success,
}

/// State of the live sequence. Replaced wholesale by every accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    phase: Phase,
    display_name: String,
    contact_email: Option<String>,
    toast_text: String,
}

impl NotificationState {
    pub(super) fn loading(
        display_name: String,
        contact_email: Option<String>,
        toast_text: String,
    ) -> Self {
        Self {
            phase: Phase::Loading,
            display_name,
            contact_email,
            toast_text,
        }
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }

    /// Toast line prepared when the sequence started.
    #[must_use]
    pub fn toast_text(&self) -> &str {
        &self.toast_text
    }
}
