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

//! Render an input field, its placeholder, the submit hint and the cursor.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::InputField, theme::Theme};

impl InputField {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(24)])
            .split(inner_area);

        let text = if self.value().is_empty() && !self.is_active {
            Paragraph::new(self.placeholder).style(Style::default().fg(theme.placeholder_colour))
        } else {
            let width = chunks[0].width.max(1) as usize;
            let scroll = self.input.visual_scroll(width);
            Paragraph::new(self.value())
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
        };
        f.render_widget(text, chunks[0]);

        let hint = Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(theme.border_colour)),
            Span::styled(
                self.action_label,
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [?]", Style::default().fg(theme.border_colour)),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(hint), chunks[1]);

        if self.is_active {
            let width = chunks[0].width.max(1) as usize;
            let scroll = self.input.visual_scroll(width);
            let cursor_x = chunks[0].x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            let cursor_y = chunks[0].y;
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
