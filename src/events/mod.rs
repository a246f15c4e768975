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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every input, whether a key press, a finished playlist request
//! or a change reported by the player, arrives here as an [`AppEvent`] and is
//! translated into a state transition followed by a redraw.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, Focus, api::LoadError, model::Item, player::PlayerState, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetFocus(Focus),
    ToggleHelp,

    SubmitCollectionField(String),
    SubmitUrlField(String),

    SelectItem(String),
    NextItem,
    PreviousItem,

    CollectionLoaded { token: u64, items: Vec<Item> },
    CollectionLoadFailed { token: u64, error: LoadError },

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Implemented by UI components that consume terminal input.
pub(crate) trait AppEventProcessor {
    /// Processes a terminal event, returning `true` if the component consumed
    /// it.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. A fatal error from a worker ends the loop with that error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            event => handle_event(app, event)?,
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::SetFocus(focus) => handle_set_focus(app, focus),
        AppEvent::ToggleHelp => handle_toggle_help(app),
        AppEvent::SubmitCollectionField(text) => handle_submit_collection_field(app, &text)?,
        AppEvent::SubmitUrlField(text) => handle_submit_url_field(app, &text)?,
        AppEvent::SelectItem(id) => handle_select_item(app, id)?,
        AppEvent::NextItem => handle_next_item(app)?,
        AppEvent::PreviousItem => handle_previous_item(app)?,
        AppEvent::CollectionLoaded { token, items } => handle_collection_loaded(app, token, items)?,
        AppEvent::CollectionLoadFailed { token, error } => {
            handle_collection_load_failed(app, token, error)?
        }
        AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
        AppEvent::TitleChanged(title) => handle_title_changed(app, title),
        AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
        AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
        AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick | AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    Ok(())
}
