// SPDX-License-Identifier: MPL-2.0
//! User interface of the application page.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! the [`Page`](crate::app::page::Page) render state and emit
//! [`Message`](crate::app::Message)s.
//!
//! # Layers
//!
//! - [`shapes`] - Drifting backdrop shapes and their canvas
//! - [`form_card`] - The application form
//! - [`overlay`] - Loading and success cards over a scrim
//! - [`toast`] - Confirmation toast in the bottom-right corner
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod form_card;
pub mod overlay;
pub mod shapes;
pub mod styles;
pub mod theming;
pub mod toast;
pub mod widgets;

use crate::app::page::Page;
use crate::i18n::fluent::I18n;
use theming::ColorScheme;

/// Read-only data shared by the page views.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Optional i18n key of a notice shown under the form fields.
    pub notice: Option<&'a str>,
}
