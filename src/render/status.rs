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

//! Render the status line.
//!
//! Shows, in order of priority, a playlist load error, any other error, an
//! in-flight request, or the basic key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str = "Tab focus  Enter load/play  n/p next/previous  space pause  ? help  q quit";

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, colour) = if let Some(error) = app.state.last_error() {
        (format!("Error loading playlist: {}", error), app.theme.error_colour)
    } else if let Some(message) = &app.status {
        (message.clone(), app.theme.error_colour)
    } else if let Some(request) = app.state.pending_request() {
        (
            format!("Loading playlist {}...", request.collection_id),
            app.theme.status_colour,
        )
    } else {
        (KEY_HINTS.to_string(), app.theme.status_colour)
    };

    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(colour)
                .bg(app.theme.gauge_track_colour),
        ),
        container[0],
    );
}
