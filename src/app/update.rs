// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::App;
use crate::sequencer::Wording;
use iced::{window, Task};
use std::time::{Duration, Instant};
use tracing::debug;

impl App {
    /// Validates the form and, when it passes, starts the feedback sequence.
    pub(super) fn handle_submit(&mut self, now: Instant) {
        if self.page.submit_disabled() {
            debug!("submit ignored while a submission is in flight");
            return;
        }

        if let Err(validity) = self.page.form.check_validity() {
            debug!(%validity, "submission rejected");
            self.page.validation = Some(validity);
            return;
        }
        self.page.validation = None;

        // Bring both clocks up to the submit instant so the sequence starts
        // now, not at the last tick. With no tick running the clock is stale
        // and is restarted instead, so the idle gap is not charged.
        if self.shapes_animating() || self.sequence_active() {
            self.handle_tick(now);
        } else {
            self.clock = Some(now);
        }

        let Some(sequencer) = self.sequencer.as_mut() else {
            debug!("page lacks feedback elements, submission not sequenced");
            return;
        };
        let submission = self.page.form.submission(&self.i18n.fallback_name());
        sequencer.start_sequence(
            &mut self.page,
            &self.i18n,
            &submission.display_name,
            submission.contact_email.as_deref(),
        );
    }

    /// Feeds the wall-clock time elapsed since the previous tick into the
    /// backdrop and sequencer clocks.
    pub(super) fn handle_tick(&mut self, now: Instant) {
        let delta = self
            .clock
            .replace(now)
            .map_or(Duration::ZERO, |previous| now.saturating_duration_since(previous));

        if self.animate_shapes {
            self.shapes.advance(delta);
        }
        if let Some(sequencer) = self.sequencer.as_mut() {
            sequencer.advance(&mut self.page, delta);
        }
    }

    pub(super) fn handle_close_requested(&mut self, id: window::Id) -> Task<super::Message> {
        let stopped = self.shapes.stop();
        debug!(stopped, sequence_active = self.sequence_active(), "window close requested");
        window::close(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::config::Config;
    use crate::app::App;
    use crate::form::Validity;
    use crate::i18n::fluent::I18n;
    use crate::sequencer::Phase;
    use crate::ui::theming::ThemeMode;
    use std::time::{Duration, Instant};

    fn app() -> App {
        app_with_shapes(false)
    }

    fn app_with_shapes(animate_shapes: bool) -> App {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        App::with_parts(i18n, ThemeMode::Light, animate_shapes)
    }

    fn tick(app: &mut App, at: Instant) {
        app.handle_tick(at);
    }

    #[test]
    fn invalid_email_shows_validation_and_skips_sequence() {
        let mut app = app();
        app.page.form.email = "not-an-email".into();

        app.handle_submit(Instant::now());

        assert_eq!(app.page().validation, Some(Validity::TypeMismatch));
        assert!(!app.page().overlay_visible());
        assert!(!app.sequence_active());
    }

    #[test]
    fn valid_submit_runs_full_sequence_on_ticks() {
        let mut app = app();
        app.page.form.full_name = "Jane Doe".into();
        app.page.form.email = "jane@x.com".into();
        let start = Instant::now();

        app.handle_submit(start);
        assert!(app.page().overlay_visible());
        assert!(app.page().loading_active());
        assert!(app.page().submit_disabled());

        tick(&mut app, start + Duration::from_millis(1_500));
        assert!(app.page().success_active());
        assert!(app.page().toast_visible());
        assert_eq!(app.page().toast_text(), "Jane Doe, your application was sent!");
        assert!(app.page().form.is_empty());

        tick(&mut app, start + Duration::from_millis(4_300));
        assert!(!app.page().toast_visible());
        assert!(app.page().overlay_visible());

        tick(&mut app, start + Duration::from_millis(5_200));
        assert!(!app.page().overlay_visible());
        assert!(!app.page().submit_disabled());
        assert_eq!(app.sequencer().map(|s| s.phase()), Some(Phase::Idle));
    }

    #[test]
    fn submit_while_disabled_is_ignored() {
        let mut app = app();
        app.page.form.full_name = "Jane".into();
        let start = Instant::now();
        app.handle_submit(start);

        tick(&mut app, start + Duration::from_millis(1_000));
        app.page.form.full_name = "Someone Else".into();
        app.handle_submit(start + Duration::from_millis(1_000));

        tick(&mut app, start + Duration::from_millis(1_500));
        assert_eq!(app.page().toast_text(), "Jane, your application was sent!");
    }

    #[test]
    fn idle_gap_before_submit_is_not_counted() {
        let mut app = app();
        let start = Instant::now();
        tick(&mut app, start);

        // Submit long after the last tick.
        let submitted = start + Duration::from_secs(60);
        app.handle_submit(submitted);
        tick(&mut app, submitted + Duration::from_millis(100));

        assert!(app.page().loading_active());
        assert!(!app.page().success_active());
    }

    #[test]
    fn empty_name_uses_fallback() {
        let mut app = app();
        let start = Instant::now();
        app.handle_submit(start);
        tick(&mut app, start + Duration::from_millis(1_500));
        assert_eq!(app.page().toast_text(), "Applicant, your application was sent!");
        assert_eq!(
            app.page().overlay_email(),
            "We will contact you soon with more details."
        );
    }

    #[test]
    fn sequence_starts_at_submit_while_shapes_animate() {
        let mut app = app_with_shapes(true);
        let start = Instant::now();
        tick(&mut app, start);
        tick(&mut app, start + Duration::from_millis(10));

        // Submit lands between two animation ticks.
        let submitted = start + Duration::from_millis(40);
        app.handle_submit(submitted);

        tick(&mut app, submitted + Duration::from_millis(1_480));
        assert!(app.page().loading_active());
        assert!(!app.page().success_active());

        tick(&mut app, submitted + Duration::from_millis(1_500));
        assert!(app.page().success_active());

        tick(&mut app, submitted + Duration::from_millis(5_190));
        assert!(app.page().overlay_visible());
        tick(&mut app, submitted + Duration::from_millis(5_200));
        assert!(!app.page().overlay_visible());
    }

    #[test]
    fn spinner_needs_frame_ticks_only_while_loading() {
        let mut app = app();
        let start = Instant::now();
        assert!(!app.spinner_visible());

        app.handle_submit(start);
        assert!(app.spinner_visible());

        tick(&mut app, start + Duration::from_millis(1_500));
        assert!(!app.spinner_visible());
        assert!(app.sequence_active());
    }
}
