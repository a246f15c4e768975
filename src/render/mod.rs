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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod help;
pub(crate) mod icons;
mod player;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{help::draw_help, player::draw_player, status::draw_status},
};

const TITLE: &str = "YouTube Music Player";

const LOAD_PROMPT: &str = "Enter a Playlist ID or YouTube Video URL to load.";

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the title, the two input fields,
///   the player and playlist area, and the status line.
/// * **State Mapping**: Showing the load prompt until something has been
///   loaded, then the now playing panel beside the playlist.
/// * **Overlays**: The help popup, drawn last over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, outer[0]);

    app.collection_input.draw(f, outer[1], &app.theme);
    app.url_input.draw(f, outer[2], &app.theme);

    if app.state.is_loaded() {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[3]);

        draw_player(f, main[0], app);
        app.playlist_view.draw(f, main[1], &app.theme);
    } else {
        let prompt = Paragraph::new(LOAD_PROMPT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.text_colour))
            .block(Block::default().padding(ratatui::widgets::Padding::top(1)));
        f.render_widget(prompt, outer[3]);
    }

    draw_status(f, outer[4], app);

    if app.show_help {
        draw_help(f, area, &app.theme);
    }
}
