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

//! Render the now playing panel.
//!
//! The video itself is shown in the player window; this panel shows what is
//! playing, the watch URL handed to the player, progress and volume.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    resolver, util,
};

/// Renders the now playing widget including item info and progress.
pub(super) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Now Playing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let Some(item) = app.state.displayed_item() else {
        f.render_widget(
            Paragraph::new("Nothing to play.").fg(app.theme.placeholder_colour),
            chunks[0],
        );
        return;
    };

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    // The playlist title is authoritative; single videos only get a title
    // once the player has resolved it.
    let title = match (&item.title, &app.player_title) {
        (Some(title), _) => title.as_str(),
        (None, Some(player_title)) => player_title.as_str(),
        (None, None) => item.media_id.as_str(),
    };

    let title_line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(title_line), chunks[0]);

    let url_line = Line::from(resolver::watch_url(&item.media_id)).fg(app.theme.placeholder_colour);
    f.render_widget(Paragraph::new(url_line), chunks[1]);

    let position_label = match app.state.selected_index() {
        Some(index) if !item.is_single() => {
            format!("{} of {}", index + 1, app.state.collection().len())
        }
        _ => "Single video".to_string(),
    };

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);
    let remaining = duration.saturating_sub(time);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(chunks[3]);

    f.render_widget(
        Paragraph::new(position_label).fg(app.theme.text_colour),
        info_chunks[0],
    );

    let time_line = Line::from(vec![
        Span::styled(util::format::format_time(time), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(util::format::format_time(duration), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(util::format::format_time(remaining), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);
    let position_gauge = Gauge::default()
        .gauge_style(Style::default()
            .fg(app.theme.accent_colour)
            .bg(app.theme.gauge_track_colour)
        )
        .ratio(position)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[4]);

    let volume = app.volume.unwrap_or(0);
    let vol_ratio = (volume as f64 / 130.0).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(chunks[5]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.theme.accent_colour).bg(app.theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[1]);
}
