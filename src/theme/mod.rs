//! Light theme for the visitor form
//!
//! Grey page, white cards and a deep purple accent strip on the page header.

use gpui::Hsla;

/// Color palette
pub mod colors {
    use gpui::rgb;

    // Background colors
    pub fn page() -> gpui::Hsla { rgb(0xf0f0f0).into() }         // #f0f0f0 - Page background
    pub fn card() -> gpui::Hsla { rgb(0xffffff).into() }         // #ffffff - Cards and inputs
    pub fn hover() -> gpui::Hsla { rgb(0xf3eefb).into() }        // #f3eefb - Hovered option
    pub fn selected() -> gpui::Hsla { rgb(0xe9e1f7).into() }     // #e9e1f7 - Selected option

    // Foreground colors
    pub fn text() -> gpui::Hsla { rgb(0x202124).into() }         // #202124 - Main text
    pub fn text_muted() -> gpui::Hsla { rgb(0x6b7280).into() }   // #6b7280 - Secondary text
    pub fn text_on_accent() -> gpui::Hsla { rgb(0xffffff).into() }

    // Accent colors
    pub fn purple() -> gpui::Hsla { rgb(0x673ab7).into() }       // #673ab7 - Header strip, buttons
    pub fn purple_light() -> gpui::Hsla { rgb(0xede7f6).into() } // #ede7f6 - Badge
    pub fn red() -> gpui::Hsla { rgb(0xef4444).into() }          // #ef4444 - Errors, required mark
    pub fn green() -> gpui::Hsla { rgb(0x16a34a).into() }        // #16a34a - Success toast

    // Border colors
    pub fn border() -> gpui::Hsla { rgb(0xe5e7eb).into() }
    pub fn border_focus() -> gpui::Hsla { rgb(0x673ab7).into() }
    pub fn disabled() -> gpui::Hsla { rgb(0xb39ddb).into() }     // Submit while pending
}

/// Theme configuration
#[derive(Clone)]
pub struct FormTheme {
    pub page_background: Hsla,
    pub card_background: Hsla,
    pub option_hover: Hsla,
    pub option_selected: Hsla,

    pub foreground: Hsla,
    pub foreground_muted: Hsla,
    pub foreground_on_accent: Hsla,

    pub accent: Hsla,
    pub accent_subtle: Hsla,
    pub accent_disabled: Hsla,

    pub error: Hsla,
    pub success: Hsla,

    pub border: Hsla,
    pub border_focus: Hsla,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            page_background: colors::page(),
            card_background: colors::card(),
            option_hover: colors::hover(),
            option_selected: colors::selected(),

            foreground: colors::text(),
            foreground_muted: colors::text_muted(),
            foreground_on_accent: colors::text_on_accent(),

            accent: colors::purple(),
            accent_subtle: colors::purple_light(),
            accent_disabled: colors::disabled(),

            error: colors::red(),
            success: colors::green(),

            border: colors::border(),
            border_focus: colors::border_focus(),
        }
    }
}

impl FormTheme {
    pub fn new() -> Self {
        Self::default()
    }
}
