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

//! # YouTube Player TUI.
//!
//! A terminal front end for playing YouTube playlists and single videos.
//!
//! The user enters a playlist ID or a video URL. Playlists are fetched from
//! the YouTube Data API and shown in a sidebar; the selected video is played
//! by MPV in its own window.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all application
//!   state and renders the UI.
//! * A **Task Worker** performs the blocking playlist request.
//! * A **Player Worker** drives MPV and reports playback progress.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a failure. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod api;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod resolver;
mod state;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    api::YouTubeClient,
    components::{InputField, PlaylistView},
    config::AppConfig,
    events::{AppEvent, process_events},
    player::{PlayerOptions, PlayerState, VideoPlayer},
    state::PlaybackState,
    tasks::AppTask,
    theme::Theme,
};

/// Which component receives keyboard input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Focus {
    CollectionInput,
    UrlInput,
    Playlist,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::CollectionInput => Focus::UrlInput,
            Focus::UrlInput => Focus::Playlist,
            Focus::Playlist => Focus::CollectionInput,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::CollectionInput => Focus::Playlist,
            Focus::UrlInput => Focus::CollectionInput,
            Focus::Playlist => Focus::UrlInput,
        }
    }
}

/// Application state.
pub(crate) struct App {
    pub theme: Theme,
    pub focus: Focus,
    pub show_help: bool,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub video_player: VideoPlayer,

    pub state: PlaybackState,

    pub collection_input: InputField,
    pub url_input: InputField,
    pub playlist_view: PlaylistView,

    pub status: Option<String>,

    pub player_state: PlayerState,
    pub player_title: Option<String>,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub volume: Option<u32>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let player_event_tx = event_tx.clone();

        let mut collection_input = InputField::new(
            "Playlist",
            "Enter Playlist ID",
            "Load Playlist",
            AppEvent::SubmitCollectionField,
        );
        collection_input.is_active = true;

        let url_input = InputField::new(
            "Video",
            "Enter YouTube Video URL",
            "Play Video",
            AppEvent::SubmitUrlField,
        );

        let status = config
            .api_key
            .is_empty()
            .then(|| "No API key configured, set YTPLAY_API_KEY to load playlists".to_string());

        Ok(Self {
            theme: Theme::default(),
            focus: Focus::CollectionInput,
            show_help: false,
            event_tx,
            event_rx,
            task_tx,
            video_player: VideoPlayer::new(PlayerOptions::from(config), player_event_tx)?,
            state: PlaybackState::new(),
            collection_input,
            url_input,
            playlist_view: PlaylistView::new(),
            status,
            player_state: PlayerState::Stopped,
            player_title: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
        })
    }

    /// Forgets what the player last reported, ready for a new item.
    pub(crate) fn reset_player_info(&mut self) {
        self.player_title = None;
        self.player_duration = None;
        self.player_time = None;
        self.player_position = None;
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    logging::init_logging(&config)?;
    log::info!("Starting with API endpoint {}", config.api_base_url);
    if config.api_key.is_empty() {
        log::warn!("No API key configured");
    }

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(&config, task_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, &config, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform playlist requests.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(YouTubeClient::new(config), task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Terminal input failure: {}", e)));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
