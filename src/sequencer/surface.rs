// SPDX-License-Identifier: MPL-2.0
//! Display collaborators driven by the sequencer.
//!
//! The sequencer never touches widgets directly. It names the element it
//! wants to change and the surface applies the change to whatever renders it.

/// Elements of the page the sequencer reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Full-window modal container holding the loading and success cards.
    Overlay,
    LoadingCard,
    SuccessCard,
    /// Thank-you text on the success card.
    OverlayMessage,
    /// Contact line on the success card.
    OverlayEmail,
    /// Auto-dismissing banner outside the overlay.
    Toast,
    /// The application form itself.
    Form,
    /// Submit control; optional on a page.
    SubmitButton,
}

impl Element {
    /// Elements that must all be present for the sequencer to attach.
    pub const REQUIRED: [Element; 7] = [
        Element::Form,
        Element::Toast,
        Element::Overlay,
        Element::LoadingCard,
        Element::SuccessCard,
        Element::OverlayMessage,
        Element::OverlayEmail,
    ];
}

/// Operations the sequencer invokes on the page.
///
/// `show`/`hide` cover both visibility and card activity: showing the toast
/// also exposes it to assistive technology, hiding it marks it hidden again.
pub trait Surface {
    /// Returns whether the page provides `element`.
    fn contains(&self, element: Element) -> bool;

    fn show(&mut self, element: Element);

    fn hide(&mut self, element: Element);

    fn set_text(&mut self, element: Element, text: &str);

    /// Clears every field of the form.
    fn reset_form(&mut self);

    fn set_disabled(&mut self, element: Element, disabled: bool);
}
