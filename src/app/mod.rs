// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the page render state, the submission [`Sequencer`] and the
//! backdrop [`ShapeField`], and wires them into Iced. A single tick
//! subscription feeds wall-clock time into both virtual clocks.

pub mod config;
mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::sequencer::{Phase, Sequencer};
use crate::ui::shapes::{ShapeField, DEFAULT_SHAPES};
use crate::ui::theming::{ColorScheme, ThemeMode};
use config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use page::Page;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: Page,
    sequencer: Option<Sequencer>,
    shapes: ShapeField,
    animate_shapes: bool,
    theme: Theme,
    colors: ColorScheme,
    /// Wall-clock time of the last tick fed to the virtual clocks.
    clock: Option<Instant>,
    /// i18n key of a startup warning shown under the form.
    notice: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("sequence_active", &self.sequence_active())
            .field("animate_shapes", &self.animate_shapes)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // Close requests are routed through `update` so timers stop first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and locale, then builds the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, notice) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let app = Self::with_parts(i18n, config.general.theme_mode, config.animate_shapes());
        let app = Self { notice, ..app };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            animate_shapes = app.animate_shapes,
            "application started"
        );
        (app, Task::none())
    }

    /// Builds the app from already resolved parts.
    #[must_use]
    pub fn with_parts(i18n: I18n, theme_mode: ThemeMode, animate_shapes: bool) -> Self {
        let page = Page::new();
        let sequencer = Sequencer::attach(&page);
        let shapes = if animate_shapes {
            ShapeField::new(&DEFAULT_SHAPES, fastrand::Rng::new())
        } else {
            ShapeField::at_rest(&DEFAULT_SHAPES)
        };
        let dark = theme_mode.is_dark();

        Self {
            i18n,
            page,
            sequencer,
            shapes,
            animate_shapes,
            theme: if dark { Theme::Dark } else { Theme::Light },
            colors: if dark {
                ColorScheme::dark()
            } else {
                ColorScheme::light()
            },
            clock: None,
            notice: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Current page render state.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn sequencer(&self) -> Option<&Sequencer> {
        self.sequencer.as_ref()
    }

    #[must_use]
    pub fn shapes_animating(&self) -> bool {
        self.animate_shapes && self.shapes.is_running()
    }

    #[must_use]
    pub fn sequence_active(&self) -> bool {
        self.sequencer.as_ref().is_some_and(Sequencer::is_active)
    }

    /// The spinner turns with the sequencer clock, so it needs frame-rate ticks.
    #[must_use]
    pub fn spinner_visible(&self) -> bool {
        self.sequencer
            .as_ref()
            .is_some_and(|sequencer| sequencer.phase() == Phase::Loading)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.shapes_animating(),
            self.spinner_visible(),
            self.sequence_active(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FullNameChanged(value) => {
                self.page.form.full_name = value;
                Task::none()
            }
            Message::EmailChanged(value) => {
                self.page.form.email = value;
                self.page.validation = None;
                Task::none()
            }
            Message::Submit => {
                self.handle_submit(Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.handle_tick(now);
                Task::none()
            }
            Message::WindowCloseRequested(id) => self.handle_close_requested(id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
