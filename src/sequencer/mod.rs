// SPDX-License-Identifier: MPL-2.0
//! Submission feedback sequencing.
//!
//! A submission opens the overlay on its loading card, swaps to the success
//! card and raises a toast after a short delay, hides the toast a little
//! later, and finally closes the overlay. The sequencer owns the three timers
//! behind this chain and guarantees that at most one chain is live: starting a
//! new sequence cancels every pending timer of the previous one before anything
//! new is scheduled.
//!
//! # Components
//!
//! - [`surface`] - `Surface` trait the sequencer drives, and the `Element` names
//! - [`wording`] - `Wording` trait supplying the text written to the page
//! - [`state`] - `NotificationState` and its `Phase`
//!
//! # Usage
//!
//! ```ignore
//! let mut sequencer = Sequencer::attach(&page).expect("page has every element");
//! sequencer.start_sequence(&mut page, &English, "Jane Doe", Some("jane@x.com"));
//! sequencer.advance(&mut page, Duration::from_millis(1_500)); // success card + toast
//! ```

mod state;
pub mod surface;
pub mod wording;

pub use state::{NotificationState, Phase};
pub use surface::{Element, Surface};
pub use wording::{English, Wording, FALLBACK_DISPLAY_NAME};

use crate::scheduler::{Scheduler, TimerId};
use std::time::Duration;
use tracing::debug;

/// Delay between the start of a sequence and the success transition.
pub const LOADING_DELAY: Duration = Duration::from_millis(1_500);

/// Toast lifetime, measured from the success transition.
pub const TOAST_DELAY: Duration = Duration::from_millis(2_800);

/// Delay between the start of a sequence and the overlay closing.
pub const OVERLAY_DELAY: Duration = Duration::from_millis(5_200);

/// Delays used by one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub loading: Duration,
    pub toast: Duration,
    pub overlay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading: LOADING_DELAY,
            toast: TOAST_DELAY,
            overlay: OVERLAY_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Loading,
    ToastHide,
    OverlayClose,
}

#[derive(Debug, Default)]
struct Handles {
    loading: Option<TimerId>,
    toast: Option<TimerId>,
    overlay: Option<TimerId>,
}

impl Handles {
    fn slot(&mut self, timer: Timer) -> &mut Option<TimerId> {
        match timer {
            Timer::Loading => &mut self.loading,
            Timer::ToastHide => &mut self.toast,
            Timer::OverlayClose => &mut self.overlay,
        }
    }

    fn is_empty(&self) -> bool {
        self.loading.is_none() && self.toast.is_none() && self.overlay.is_none()
    }
}

/// Drives the overlay and toast of a page through one feedback chain at a time.
#[derive(Debug)]
pub struct Sequencer {
    scheduler: Scheduler<Timer>,
    handles: Handles,
    state: Option<NotificationState>,
    timings: Timings,
}

impl Sequencer {
    /// Attaches to `surface` with the default timings.
    ///
    /// Returns `None` when the surface lacks one of [`Element::REQUIRED`]; the
    /// page then simply has no submission feedback.
    #[must_use]
    pub fn attach<S: Surface + ?Sized>(surface: &S) -> Option<Self> {
        Self::attach_with_timings(surface, Timings::default())
    }

    #[must_use]
    pub fn attach_with_timings<S: Surface + ?Sized>(surface: &S, timings: Timings) -> Option<Self> {
        if let Some(missing) = Element::REQUIRED
            .iter()
            .find(|element| !surface.contains(**element))
        {
            debug!(?missing, "sequencer not attached, page element missing");
            return None;
        }

        Some(Self {
            scheduler: Scheduler::new(),
            handles: Handles::default(),
            state: None,
            timings,
        })
    }

    /// Starts a new feedback chain for an accepted submission.
    ///
    /// Any chain still in flight is cancelled first, so none of its callbacks
    /// can touch the page afterwards. An empty `display_name` is replaced by
    /// the wording's fallback label and an empty `contact_email` by `None`.
    pub fn start_sequence<S, W>(
        &mut self,
        surface: &mut S,
        wording: &W,
        display_name: &str,
        contact_email: Option<&str>,
    ) where
        S: Surface + ?Sized,
        W: Wording + ?Sized,
    {
        let cancelled = self.cancel_pending();

        let display_name = match display_name.trim() {
            "" => wording.fallback_name(),
            name => name.to_string(),
        };
        let contact_email = contact_email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);

        surface.set_text(Element::OverlayMessage, &wording.overlay_thanks(&display_name));
        surface.set_text(Element::OverlayEmail, &wording.contact(contact_email.as_deref()));
        set_submit_disabled(surface, true);

        surface.show(Element::Overlay);
        surface.show(Element::LoadingCard);
        surface.hide(Element::SuccessCard);

        let toast_text = wording.toast_sent(&display_name);
        self.state = Some(NotificationState::loading(
            display_name,
            contact_email,
            toast_text,
        ));

        self.handles.loading = Some(self.scheduler.schedule(self.timings.loading, Timer::Loading));
        self.handles.overlay = Some(
            self.scheduler
                .schedule(self.timings.overlay, Timer::OverlayClose),
        );

        debug!(
            at = ?self.scheduler.now(),
            cancelled,
            "submission sequence started"
        );
    }

    /// Advances the sequencer clock by `delta`, firing every callback due on
    /// the way in deadline order. Returns the number of callbacks fired.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, delta: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(delta);
        self.advance_to(surface, until)
    }

    /// Advances the sequencer clock to the absolute time `until`.
    pub fn advance_to<S: Surface + ?Sized>(&mut self, surface: &mut S, until: Duration) -> usize {
        let mut fired = 0;
        while let Some((id, timer)) = self.scheduler.pop_due(until) {
            let handle = self.handles.slot(timer).take();
            debug_assert_eq!(handle, Some(id));
            self.fire(surface, timer);
            fired += 1;
        }
        self.scheduler.advance_to(until);

        if self.handles.is_empty() && self.state.is_some() {
            self.state = None;
        }
        fired
    }

    fn fire<S: Surface + ?Sized>(&mut self, surface: &mut S, timer: Timer) {
        match timer {
            Timer::Loading => {
                surface.hide(Element::LoadingCard);
                surface.show(Element::SuccessCard);

                if let Some(state) = self.state.as_mut() {
                    state.set_phase(Phase::Success);
                    surface.set_text(Element::Toast, state.toast_text());
                }
                surface.show(Element::Toast);
                surface.reset_form();

                self.handles.toast = Some(
                    self.scheduler
                        .schedule(self.timings.toast, Timer::ToastHide),
                );
                debug!(at = ?self.scheduler.now(), "sequence reached success");
            }
            Timer::ToastHide => {
                surface.hide(Element::Toast);
                debug!(at = ?self.scheduler.now(), "toast dismissed");
            }
            Timer::OverlayClose => {
                surface.hide(Element::Overlay);
                surface.hide(Element::SuccessCard);
                set_submit_disabled(surface, false);

                if let Some(state) = self.state.as_mut() {
                    state.set_phase(Phase::Idle);
                }
                debug!(at = ?self.scheduler.now(), "overlay closed");
            }
        }
    }

    /// Cancels every pending timer of the current chain.
    fn cancel_pending(&mut self) -> usize {
        let mut cancelled = 0;
        for timer in [Timer::Loading, Timer::ToastHide, Timer::OverlayClose] {
            if let Some(id) = self.handles.slot(timer).take() {
                if self.scheduler.cancel(id) {
                    cancelled += 1;
                }
            }
        }
        if cancelled > 0 {
            debug!(cancelled, "previous sequence cancelled");
        }
        cancelled
    }

    /// Phase of the live sequence, `Idle` when nothing is in flight.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state
            .as_ref()
            .map_or(Phase::Idle, NotificationState::phase)
    }

    /// State of the live sequence, if any.
    #[must_use]
    pub fn state(&self) -> Option<&NotificationState> {
        self.state.as_ref()
    }

    /// Returns whether any callback of the current sequence is still pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Number of pending callbacks.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Sequencer time of the next pending callback.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Current sequencer time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }
}

fn set_submit_disabled<S: Surface + ?Sized>(surface: &mut S, disabled: bool) {
    if surface.contains(Element::SubmitButton) {
        surface.set_disabled(Element::SubmitButton, disabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Show(Element),
        Hide(Element),
        SetText(Element, String),
        ResetForm,
        SetDisabled(Element, bool),
    }

    /// Page double that records every operation and keeps the resulting state.
    #[derive(Debug)]
    struct RecordingSurface {
        present: HashSet<Element>,
        visible: HashSet<Element>,
        texts: HashMap<Element, String>,
        disabled: bool,
        resets: usize,
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn full() -> Self {
            let mut present: HashSet<Element> = Element::REQUIRED.into_iter().collect();
            present.insert(Element::SubmitButton);
            Self {
                present,
                visible: HashSet::new(),
                texts: HashMap::new(),
                disabled: false,
                resets: 0,
                calls: Vec::new(),
            }
        }

        fn without(element: Element) -> Self {
            let mut surface = Self::full();
            surface.present.remove(&element);
            surface
        }

        fn is_visible(&self, element: Element) -> bool {
            self.visible.contains(&element)
        }

        fn text(&self, element: Element) -> &str {
            self.texts.get(&element).map_or("", String::as_str)
        }
    }

    impl Surface for RecordingSurface {
        fn contains(&self, element: Element) -> bool {
            self.present.contains(&element)
        }

        fn show(&mut self, element: Element) {
            self.visible.insert(element);
            self.calls.push(Call::Show(element));
        }

        fn hide(&mut self, element: Element) {
            self.visible.remove(&element);
            self.calls.push(Call::Hide(element));
        }

        fn set_text(&mut self, element: Element, text: &str) {
            self.texts.insert(element, text.to_string());
            self.calls.push(Call::SetText(element, text.to_string()));
        }

        fn reset_form(&mut self) {
            self.resets += 1;
            self.calls.push(Call::ResetForm);
        }

        fn set_disabled(&mut self, element: Element, disabled: bool) {
            self.disabled = disabled;
            self.calls.push(Call::SetDisabled(element, disabled));
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn attached() -> (Sequencer, RecordingSurface) {
        let surface = RecordingSurface::full();
        let sequencer = Sequencer::attach(&surface).expect("full surface attaches");
        (sequencer, surface)
    }

    fn count(surface: &RecordingSurface, call: &Call) -> usize {
        surface.calls.iter().filter(|c| *c == call).count()
    }

    #[test]
    fn attach_declines_when_required_element_missing() {
        for element in Element::REQUIRED {
            let surface = RecordingSurface::without(element);
            assert!(
                Sequencer::attach(&surface).is_none(),
                "attach should decline without {element:?}"
            );
        }
    }

    #[test]
    fn attach_accepts_page_without_submit_button() {
        let mut surface = RecordingSurface::without(Element::SubmitButton);
        let mut sequencer = Sequencer::attach(&surface).expect("submit button is optional");

        sequencer.start_sequence(&mut surface, &English, "Jane Doe", None);
        sequencer.advance(&mut surface, ms(6_000));

        assert!(!surface
            .calls
            .iter()
            .any(|call| matches!(call, Call::SetDisabled(..))));
    }

    #[test]
    fn new_sequencer_is_idle() {
        let (sequencer, _) = attached();
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(!sequencer.is_active());
        assert!(sequencer.state().is_none());
    }

    #[test]
    fn start_shows_loading_state_immediately() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane Doe", Some("jane@x.com"));

        assert_eq!(sequencer.phase(), Phase::Loading);
        assert!(surface.is_visible(Element::Overlay));
        assert!(surface.is_visible(Element::LoadingCard));
        assert!(!surface.is_visible(Element::SuccessCard));
        assert!(!surface.is_visible(Element::Toast));
        assert!(surface.disabled);
        assert_eq!(sequencer.pending_timers(), 2);
    }

    #[test]
    fn overlay_text_is_written_at_start() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane Doe", Some("jane@x.com"));

        assert!(surface
            .text(Element::OverlayMessage)
            .contains("Thank you, Jane Doe."));
        assert_eq!(
            surface.text(Element::OverlayEmail),
            "We will contact you at jane@x.com."
        );
    }

    #[test]
    fn jane_doe_timeline() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane Doe", Some("jane@x.com"));

        sequencer.advance_to(&mut surface, ms(1_499));
        assert_eq!(sequencer.phase(), Phase::Loading);
        assert!(!surface.is_visible(Element::Toast));

        sequencer.advance_to(&mut surface, ms(1_500));
        assert_eq!(sequencer.phase(), Phase::Success);
        assert!(!surface.is_visible(Element::LoadingCard));
        assert!(surface.is_visible(Element::SuccessCard));
        assert!(surface.is_visible(Element::Toast));
        assert_eq!(
            surface.text(Element::Toast),
            "Jane Doe, your application was sent!"
        );
        assert_eq!(surface.resets, 1);

        sequencer.advance_to(&mut surface, ms(4_299));
        assert!(surface.is_visible(Element::Toast));

        sequencer.advance_to(&mut surface, ms(4_300));
        assert!(!surface.is_visible(Element::Toast));
        assert!(surface.is_visible(Element::Overlay));

        sequencer.advance_to(&mut surface, ms(5_199));
        assert!(surface.disabled);

        sequencer.advance_to(&mut surface, ms(5_200));
        assert!(!surface.is_visible(Element::Overlay));
        assert!(!surface.is_visible(Element::SuccessCard));
        assert!(!surface.disabled);
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(!sequencer.is_active());
        assert!(sequencer.state().is_none());
    }

    #[test]
    fn single_large_advance_fires_everything_in_order() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane Doe", None);
        surface.calls.clear();

        let fired = sequencer.advance(&mut surface, ms(10_000));
        assert_eq!(fired, 3);

        let position = |call: &Call| surface.calls.iter().position(|c| c == call);
        let success = position(&Call::Show(Element::SuccessCard)).expect("success shown");
        let toast_hidden = position(&Call::Hide(Element::Toast)).expect("toast hidden");
        let overlay_hidden = position(&Call::Hide(Element::Overlay)).expect("overlay hidden");
        assert!(success < toast_hidden);
        assert!(toast_hidden < overlay_hidden);
    }

    #[test]
    fn exactly_one_success_transition_per_submission() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane Doe", None);
        sequencer.advance(&mut surface, ms(20_000));

        assert_eq!(count(&surface, &Call::Show(Element::SuccessCard)), 1);
        assert_eq!(count(&surface, &Call::ResetForm), 1);
    }

    #[test]
    fn restart_cancels_all_pending_callbacks_of_first_sequence() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "First", None);
        sequencer.advance(&mut surface, ms(2_000));
        assert_eq!(sequencer.phase(), Phase::Success);
        // loading fired; toast hide and overlay close still pending
        assert_eq!(sequencer.pending_timers(), 2);

        sequencer.start_sequence(&mut surface, &English, "Second", None);
        assert_eq!(sequencer.phase(), Phase::Loading);
        assert_eq!(sequencer.pending_timers(), 2);

        // First sequence would have closed the overlay at 5200.
        sequencer.advance_to(&mut surface, ms(5_200));
        assert!(surface.is_visible(Element::Overlay));
        assert!(surface.disabled);

        // Second sequence: success at 3500, toast hidden at 6300, close at 7200.
        assert_eq!(
            surface.text(Element::Toast),
            "Second, your application was sent!"
        );
        sequencer.advance_to(&mut surface, ms(7_200));
        assert!(!surface.is_visible(Element::Overlay));
        assert!(!surface.is_visible(Element::Toast));
        assert_eq!(count(&surface, &Call::Show(Element::SuccessCard)), 2);
        assert_eq!(count(&surface, &Call::Hide(Element::Overlay)), 1);
    }

    #[test]
    fn restart_during_loading_prevents_first_success() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "First", None);
        sequencer.advance(&mut surface, ms(1_000));
        sequencer.start_sequence(&mut surface, &English, "Second", None);

        sequencer.advance_to(&mut surface, ms(2_499));
        assert_eq!(count(&surface, &Call::Show(Element::SuccessCard)), 0);

        sequencer.advance_to(&mut surface, ms(2_500));
        assert_eq!(count(&surface, &Call::Show(Element::SuccessCard)), 1);
        assert_eq!(
            surface.text(Element::Toast),
            "Second, your application was sent!"
        );
    }

    #[test]
    fn cancellation_wins_at_overlay_boundary() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "First", None);
        sequencer.advance_to(&mut surface, ms(5_199));

        // The overlay-close deadline (5200) is reached in the same tick as the
        // new submission, which is handled first.
        sequencer.start_sequence(&mut surface, &English, "Second", None);
        sequencer.advance_to(&mut surface, ms(5_200));

        assert!(surface.is_visible(Element::Overlay));
        assert_eq!(count(&surface, &Call::Hide(Element::Overlay)), 0);
        assert_eq!(sequencer.phase(), Phase::Loading);
    }

    #[test]
    fn empty_name_uses_fallback_label_throughout() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "   ", None);

        assert_eq!(
            sequencer.state().map(NotificationState::display_name),
            Some(FALLBACK_DISPLAY_NAME)
        );
        assert!(surface
            .text(Element::OverlayMessage)
            .contains("Thank you, Applicant."));

        sequencer.advance(&mut surface, LOADING_DELAY);
        assert_eq!(
            surface.text(Element::Toast),
            "Applicant, your application was sent!"
        );
    }

    #[test]
    fn whitespace_email_uses_generic_contact_line() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane", Some("  \t "));

        assert_eq!(
            surface.text(Element::OverlayEmail),
            "We will contact you soon with more details."
        );
        assert_eq!(sequencer.state().and_then(NotificationState::contact_email), None);
    }

    #[test]
    fn email_is_embedded_trimmed() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "Jane", Some("  jane@x.com "));

        assert_eq!(
            surface.text(Element::OverlayEmail),
            "We will contact you at jane@x.com."
        );
    }

    #[test]
    fn cancellation_precedes_new_scheduling() {
        let (mut sequencer, mut surface) = attached();
        sequencer.start_sequence(&mut surface, &English, "First", None);
        sequencer.start_sequence(&mut surface, &English, "Second", None);
        sequencer.start_sequence(&mut surface, &English, "Third", None);

        // Only the latest sequence's two timers remain.
        assert_eq!(sequencer.pending_timers(), 2);
        assert_eq!(sequencer.next_deadline(), Some(LOADING_DELAY));
    }

    #[test]
    fn custom_timings_are_respected() {
        let surface = RecordingSurface::full();
        let timings = Timings {
            loading: ms(10),
            toast: ms(20),
            overlay: ms(50),
        };
        let mut sequencer =
            Sequencer::attach_with_timings(&surface, timings).expect("attaches");
        let mut surface = surface;

        sequencer.start_sequence(&mut surface, &English, "Jane", None);
        sequencer.advance(&mut surface, ms(10));
        assert_eq!(sequencer.phase(), Phase::Success);
        sequencer.advance(&mut surface, ms(20));
        assert!(!surface.is_visible(Element::Toast));
        sequencer.advance(&mut surface, ms(20));
        assert_eq!(sequencer.phase(), Phase::Idle);
    }
}
