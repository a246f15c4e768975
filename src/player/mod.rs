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

//! Video playback control and state management.
//!
//! This module provides the high-level [`VideoPlayer`] interface used by the
//! UI to control playback. It manages a background worker thread that
//! interfaces with MPV, which resolves YouTube watch URLs itself and renders
//! the video in its own window.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{config::AppConfig, events::AppEvent, player::commands::VideoPlayerCommand};

/// Represents the current playback status of the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Options the player window is created with.
#[derive(Clone, Debug)]
pub(crate) struct PlayerOptions {
    pub(crate) geometry: String,
}

impl From<&AppConfig> for PlayerOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            geometry: config.player_geometry(),
        }
    }
}

/// A handle to the playback engine.
///
/// This struct acts as a command proxy; it does not perform any media
/// processing itself but instead sends instructions to a background worker
/// thread.
pub(crate) struct VideoPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<VideoPlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `options` - Window options applied when MPV is initialised.
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(options: PlayerOptions, event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<VideoPlayerCommand>();

        commands::spawn_player_worker(options, command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to load and play a URL, replacing whatever is
    /// currently playing.
    pub(crate) fn play_url(&self, url: &str) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::PlayUrl(url.to_string()))?;
        Ok(())
    }

    /// Toggles the playback state between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::TogglePause)?;
        Ok(())
    }

    /// Stop playback.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Adjusts the playback position forward or backwards relative to the
    /// current position.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Seek(delta))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wins_over_pause() {
        assert_eq!(VideoPlayer::player_state(true, true), PlayerState::Stopped);
        assert_eq!(VideoPlayer::player_state(false, true), PlayerState::Stopped);
        assert_eq!(VideoPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(VideoPlayer::player_state(false, false), PlayerState::Playing);
    }

    #[test]
    fn options_use_configured_geometry() {
        let config = AppConfig {
            player_width: 1280,
            player_height: 720,
            ..AppConfig::default()
        };
        assert_eq!(PlayerOptions::from(&config).geometry, "1280x720");
    }
}
