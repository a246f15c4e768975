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

//! YouTube Data API playlist listing.
//!
//! This module fetches the items of a playlist from the `playlistItems`
//! endpoint in a single request. Only the first page is requested, there is
//! no continuation handling.
//!
//! The request is blocking and is only ever issued from the task worker
//! thread.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use ureq::Agent;

use crate::{config::AppConfig, model::Item};

/// The reasons a playlist could not be loaded.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub(crate) enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A source of playlist contents.
pub(crate) trait CollectionSource {
    fn fetch(&self, collection_id: &str) -> Result<Vec<Item>, LoadError>;
}

#[derive(Debug, Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    id: String,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl From<PlaylistItem> for Item {
    fn from(item: PlaylistItem) -> Self {
        Item::new(item.id, item.snippet.title, item.snippet.resource_id.video_id)
    }
}

/// Client for the `playlistItems` endpoint.
pub(crate) struct YouTubeClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    max_results: u32,
}

impl YouTubeClient {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);

        // Non-2xx responses are read rather than raised so the API error
        // body can be reported.
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/playlistItems", self.base_url)
    }
}

impl CollectionSource for YouTubeClient {
    fn fetch(&self, collection_id: &str) -> Result<Vec<Item>, LoadError> {
        log::info!("Fetching playlist {}", collection_id);

        let mut response = self
            .agent
            .get(&self.endpoint())
            .query("part", "snippet")
            .query("maxResults", self.max_results.to_string())
            .query("playlistId", collection_id)
            .query("key", &self.api_key)
            .call()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(decode_error(status, &body));
        }

        let items = decode_playlist_items(&body)?;
        log::info!("Playlist {} has {} items", collection_id, items.len());

        Ok(items)
    }
}

/// Decodes a successful `playlistItems` response body, keeping the provider
/// order.
pub(crate) fn decode_playlist_items(body: &str) -> Result<Vec<Item>, LoadError> {
    let response: PlaylistItemsResponse =
        serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    Ok(response.items.into_iter().map(Item::from).collect())
}

/// Decodes an error response, falling back to the bare status when the body
/// is not the usual API error document.
pub(crate) fn decode_error(status: u16, body: &str) -> LoadError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => LoadError::Api {
            code: response.error.code,
            message: response.error.message,
        },
        Err(_) => LoadError::Status(status),
    }
}
