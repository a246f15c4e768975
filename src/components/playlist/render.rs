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

//! UI rendering logic for the playlist view.
//!
//! Draws the item titles with the selected item highlighted, and beneath them
//! the Previous and Next controls that are currently available.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    components::PlaylistView,
    render::icons::{ICON_NEXT, ICON_PREV, ICON_SELECTED},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(format!(" Playlist ({}) ", self.items.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner_area);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if Some(index) == self.selected {
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{} ", ICON_SELECTED)),
                        Span::raw(item.display_title()),
                    ]))
                    .style(
                        Style::default()
                            .fg(theme.accent_colour)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", item.display_title()))
                        .style(Style::default().fg(theme.text_colour))
                }
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.cursor_colour)
                .add_modifier(Modifier::REVERSED),
        );

        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let mut controls = vec![];
        if self.can_previous {
            controls.push(Span::styled(
                format!("{} Previous [p]", ICON_PREV),
                Style::default().fg(theme.accent_colour),
            ));
        }
        if self.can_next {
            if !controls.is_empty() {
                controls.push(Span::raw("   "));
            }
            controls.push(Span::styled(
                format!("Next [n] {}", ICON_NEXT),
                Style::default().fg(theme.accent_colour),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(controls).centered()), chunks[1]);
    }
}
