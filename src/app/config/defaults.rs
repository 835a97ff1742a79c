// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and runtime constants.
//!
//! # Categories
//!
//! - **Window**: Default and minimum window size
//! - **Ticks**: Refresh intervals of the tick subscription
//! - **Appearance**: Backdrop animation

use std::time::Duration;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick interval while the backdrop shapes or the loading spinner move (~30 fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// Tick interval while only the sequence's remaining deadlines need driving.
pub const SEQUENCE_TICK: Duration = Duration::from_millis(100);

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Whether the backdrop shapes drift by default.
pub const DEFAULT_ANIMATE_SHAPES: bool = true;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    assert!(ANIMATION_TICK.as_millis() < SEQUENCE_TICK.as_millis());
};
