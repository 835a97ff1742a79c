// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: Base colors, including the backdrop shape tints
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use iced_apply::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

/// Colors. Brand hues follow the EU flag: reflex blue and yellow.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.35, 0.8);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.2, 0.6);
    pub const PRIMARY_700: Color = Color::from_rgb(0.0, 0.13, 0.4);
    pub const GOLD_400: Color = Color::from_rgb(1.0, 0.85, 0.3);
    pub const GOLD_500: Color = Color::from_rgb(1.0, 0.8, 0.0);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Backdrop shapes stay in the background.
    pub const SHAPE: f32 = 0.35;

    /// Cards over the backdrop.
    pub const SURFACE: f32 = 0.95;
}

/// Multiples of an 8px grid unit.
pub mod spacing {
    const UNIT: f32 = 8.0;

    pub const XXS: f32 = UNIT * 0.5;
    pub const XS: f32 = UNIT;
    pub const SM: f32 = UNIT * 1.5;
    pub const MD: f32 = UNIT * 2.0;
    pub const LG: f32 = UNIT * 3.0;
    pub const XL: f32 = UNIT * 4.0;
}

pub mod sizing {
    /// Loading spinner.
    pub const ICON_XL: f32 = 48.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;

    pub const FORM_WIDTH: f32 = 420.0;
    pub const OVERLAY_CARD_WIDTH: f32 = 380.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Form heading
    pub const TITLE_LG: f32 = 30.0;
    /// Overlay card headings, toast check mark
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field labels and validation hints
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent, ring shapes
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

/// Soft drop shadows lifting cards off the backdrop.
pub mod shadow {
    use super::{palette, Color};
    use iced::{Shadow, Vector};

    const SHADE: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const MD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHAPE > 0.0 && opacity::SHAPE < opacity::OVERLAY_MEDIUM);

    assert!(sizing::TOAST_WIDTH < sizing::FORM_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
