// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    FullNameChanged(String),
    EmailChanged(String),
    /// Submit button pressed or Enter hit in a field.
    Submit,
    Tick(Instant), // Drives the backdrop animation and the feedback timers
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the launcher to configure startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
}
