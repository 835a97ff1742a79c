// SPDX-License-Identifier: MPL-2.0
//! Render state of the application page.
//!
//! `Page` is the [`Surface`] the sequencer drives: every call just flips a
//! flag or stores a string, and the views read them back on the next frame.

use crate::form::{ApplicationForm, Validity};
use crate::sequencer::{Element, Surface};

/// Everything the page views need to render one frame.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub form: ApplicationForm,
    /// Inline validity failure from the last rejected submit.
    pub validation: Option<Validity>,
    overlay_visible: bool,
    loading_active: bool,
    success_active: bool,
    overlay_message: String,
    overlay_email: String,
    toast_text: String,
    toast_visible: bool,
    submit_disabled: bool,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    #[must_use]
    pub fn loading_active(&self) -> bool {
        self.loading_active
    }

    #[must_use]
    pub fn success_active(&self) -> bool {
        self.success_active
    }

    #[must_use]
    pub fn overlay_message(&self) -> &str {
        &self.overlay_message
    }

    #[must_use]
    pub fn overlay_email(&self) -> &str {
        &self.overlay_email
    }

    #[must_use]
    pub fn toast_text(&self) -> &str {
        &self.toast_text
    }

    /// Visible toast, also announced to assistive technology.
    #[must_use]
    pub fn toast_visible(&self) -> bool {
        self.toast_visible
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    fn visibility_mut(&mut self, element: Element) -> Option<&mut bool> {
        match element {
            Element::Overlay => Some(&mut self.overlay_visible),
            Element::LoadingCard => Some(&mut self.loading_active),
            Element::SuccessCard => Some(&mut self.success_active),
            Element::Toast => Some(&mut self.toast_visible),
            _ => None,
        }
    }
}

impl Surface for Page {
    fn contains(&self, _element: Element) -> bool {
        true
    }

    fn show(&mut self, element: Element) {
        match self.visibility_mut(element) {
            Some(flag) => *flag = true,
            None => tracing::debug!(?element, "element is always visible"),
        }
    }

    fn hide(&mut self, element: Element) {
        match self.visibility_mut(element) {
            Some(flag) => *flag = false,
            None => tracing::debug!(?element, "element cannot be hidden"),
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        let slot = match element {
            Element::OverlayMessage => &mut self.overlay_message,
            Element::OverlayEmail => &mut self.overlay_email,
            Element::Toast => &mut self.toast_text,
            _ => {
                tracing::debug!(?element, "element has no text");
                return;
            }
        };
        slot.clear();
        slot.push_str(text);
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.validation = None;
    }

    fn set_disabled(&mut self, element: Element, disabled: bool) {
        if element == Element::SubmitButton {
            self.submit_disabled = disabled;
        }
    }
}
