// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) placeholder_colour: Color,
    pub(crate) cursor_colour: Color,
    pub(crate) status_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Dark background with a red accent.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(36, 36, 36),
            accent_colour: Color::Rgb(255, 78, 69),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(52, 52, 52),

            text_colour: Color::Rgb(235, 235, 235),
            placeholder_colour: Color::Rgb(140, 140, 140),
            cursor_colour: Color::Rgb(70, 70, 90),
            status_colour: Color::Rgb(162, 161, 166),
            error_colour: Color::Rgb(255, 120, 100),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background color.
    ///
    /// Returns `None` for anything other than a [`Color::Rgb`] colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(36, 36, 36)).as_deref(), Some("#242424"));
        assert_eq!(Theme::to_hex(Color::Rgb(255, 0, 16)).as_deref(), Some("#ff0010"));
    }

    #[test]
    fn named_colours_have_no_hex() {
        assert_eq!(Theme::to_hex(Color::Cyan), None);
    }
}
