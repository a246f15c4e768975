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

//! Application configuration.
//!
//! This module manages the application configuration file. The API key may
//! also be supplied through the environment, which takes precedence over the
//! stored value.

use std::env;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "ytplay";

const API_KEY_ENV: &str = "YTPLAY_API_KEY";

/// The provider caps a single page of playlist items at this size.
pub(crate) const MAX_PAGE_SIZE: u32 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) api_key: String,
    pub(crate) api_base_url: String,
    pub(crate) max_results: u32,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) player_width: u32,
    pub(crate) player_height: u32,
    pub(crate) log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            max_results: MAX_PAGE_SIZE,
            request_timeout_secs: None,
            player_width: 900,
            player_height: 500,
            log_file: Some("ytplay.log".to_string()),
        }
    }
}

impl AppConfig {
    /// The mpv window geometry, e.g. `900x500`.
    pub(crate) fn player_geometry(&self) -> String {
        format!("{}x{}", self.player_width, self.player_height)
    }

    fn with_env_overrides(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self.max_results = self.max_results.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

pub(crate) fn load_config() -> AppConfig {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.with_env_overrides(env::var(API_KEY_ENV).ok())
}
