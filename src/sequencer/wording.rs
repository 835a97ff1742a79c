// SPDX-License-Identifier: MPL-2.0
//! Text written by the sequencer.

/// Label used when the applicant leaves the name field empty.
pub const FALLBACK_DISPLAY_NAME: &str = "Applicant";

/// Source of the user-facing strings the sequencer writes to the page.
///
/// The application implements this on top of its localization bundles;
/// [`English`] is the built-in wording.
pub trait Wording {
    /// Name shown when the applicant did not provide one.
    fn fallback_name(&self) -> String;

    /// Toast line shown once the submission "completes".
    fn toast_sent(&self, display_name: &str) -> String;

    /// Thank-you message on the success card.
    fn overlay_thanks(&self, display_name: &str) -> String;

    /// Contact line on the success card.
    fn contact(&self, email: Option<&str>) -> String;
}

/// Built-in English wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Wording for English {
    fn fallback_name(&self) -> String {
        FALLBACK_DISPLAY_NAME.to_string()
    }

    fn toast_sent(&self, display_name: &str) -> String {
        format!("{display_name}, your application was sent!")
    }

    fn overlay_thanks(&self, display_name: &str) -> String {
        format!("Thank you, {display_name}.\nYour EU citizenship application has been submitted.")
    }

    fn contact(&self, email: Option<&str>) -> String {
        match email {
            Some(email) => format!("We will contact you at {email}."),
            None => "We will contact you soon with more details.".to_string(),
        }
    }
}
