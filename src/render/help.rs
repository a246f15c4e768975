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

//! Render the help popup.
//!
//! The popup explains where to find a playlist ID and lists the key bindings.
//! It is dismissed by any key.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{render::icons::ICON_HELP, theme::Theme};

const HELP_TITLE: &str = "How To Get Playlist ID";

const HELP_TEXT: &str = "To get your Playlist ID, visit your YouTube playlist and copy the part after \"list=\" in the URL.";

const KEY_BINDINGS: [(&str, &str); 9] = [
    ("Tab", "switch between fields and playlist"),
    ("i / u", "edit playlist ID / video URL"),
    ("Enter", "load, or play the item under the cursor"),
    ("Esc", "leave the input field"),
    ("j k", "move the playlist cursor"),
    ("n p", "next / previous item"),
    ("space s", "pause / stop"),
    (", . < >", "seek"),
    ("- = _ + m", "volume and mute"),
];

pub(super) fn draw_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup_area = centered(area, 64, 17);

    let block = Block::default()
        .title(format!(" {} {} ", ICON_HELP, HELP_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::uniform(1));

    let mut lines = vec![
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(theme.text_colour))),
        Line::default(),
    ];
    lines.extend(KEY_BINDINGS.iter().map(|(keys, description)| {
        Line::from(vec![
            Span::styled(
                format!("{:>10}  ", keys),
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::default().fg(theme.text_colour)),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
