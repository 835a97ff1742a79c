// SPDX-License-Identifier: MPL-2.0
//! Event and tick subscriptions for the application.

use super::config::{ANIMATION_TICK, SEQUENCE_TICK};
use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window close requests so the app can stop its timers first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Picks the tick rate needed by whatever is currently moving.
///
/// The backdrop and the loading spinner need a smooth frame rate. Past the
/// loading phase the sequence only needs its deadlines honoured. With nothing
/// running no tick is produced.
#[must_use]
pub fn tick_interval(
    shapes_animating: bool,
    spinner_visible: bool,
    sequence_active: bool,
) -> Option<Duration> {
    if shapes_animating || spinner_visible {
        Some(ANIMATION_TICK)
    } else if sequence_active {
        Some(SEQUENCE_TICK)
    } else {
        None
    }
}

pub fn create_tick_subscription(
    shapes_animating: bool,
    spinner_visible: bool,
    sequence_active: bool,
) -> Subscription<Message> {
    match tick_interval(shapes_animating, spinner_visible, sequence_active) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_takes_precedence() {
        assert_eq!(tick_interval(true, false, true), Some(ANIMATION_TICK));
        assert_eq!(tick_interval(true, false, false), Some(ANIMATION_TICK));
    }

    #[test]
    fn loading_spinner_ticks_at_animation_rate() {
        assert_eq!(tick_interval(false, true, true), Some(ANIMATION_TICK));
    }

    #[test]
    fn sequence_past_loading_ticks_slowly() {
        assert_eq!(tick_interval(false, false, true), Some(SEQUENCE_TICK));
    }

    #[test]
    fn idle_page_does_not_tick() {
        assert_eq!(tick_interval(false, false, false), None);
    }
}
