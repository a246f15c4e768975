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

//! Keyboard routing.
//!
//! Keys go first to the help popup when it is open, then to whichever
//! component has focus, and only then to the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App, Focus,
    events::{AppEvent, AppEventProcessor},
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// Maps keyboard input to application actions and playback commands.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Help**: Any key dismisses the help popup.
/// * **Focus**: `Tab` and `Shift+Tab` cycle between the two input fields and
///   the playlist.
/// * **Input**: Text entry and submission in the focused input field.
/// * **Navigation**: Moving through and selecting from the playlist.
/// * **Playback**: Controlling the player (pause, seek, volume).
///
/// # Errors
///
/// Returns an error if an event fails to send or if a player command cannot
/// be delivered to the player worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.show_help {
        app.event_tx.send(AppEvent::ToggleHelp)?;
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.event_tx.send(AppEvent::SetFocus(app.focus.next()))?;
            return Ok(());
        }
        KeyCode::BackTab => {
            app.event_tx.send(AppEvent::SetFocus(app.focus.previous()))?;
            return Ok(());
        }
        _ => {}
    }

    let event = Event::Key(key);
    let handled = match app.focus {
        Focus::CollectionInput => app.collection_input.process_event(&event, &app.event_tx)?,
        Focus::UrlInput => app.url_input.process_event(&event, &app.event_tx)?,
        Focus::Playlist => app.playlist_view.process_event(&event, &app.event_tx)?,
    };

    if !handled {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('?'), _) => app.event_tx.send(AppEvent::ToggleHelp)?,

        (KeyCode::Char('i'), _) | (KeyCode::Char('/'), _) => app
            .event_tx
            .send(AppEvent::SetFocus(Focus::CollectionInput))?,
        (KeyCode::Char('u'), _) => app.event_tx.send(AppEvent::SetFocus(Focus::UrlInput))?,

        (KeyCode::Char(','), _) => app.video_player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.video_player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.video_player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.video_player.seek(SEEK_DELTA)?,
        (KeyCode::Char(' '), _) => app.video_player.toggle_pause()?,
        (KeyCode::Char('s'), _) => app.video_player.stop()?,
        (KeyCode::Char('-'), _) => app.video_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.video_player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.video_player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.video_player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.video_player.toggle_mute()?,

        _ => {}
    }

    Ok(())
}
