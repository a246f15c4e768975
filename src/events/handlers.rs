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

use std::mem;

use anyhow::Result;

use crate::{
    App, Focus,
    api::LoadError,
    model::Item,
    player::PlayerState,
    resolver::{self, Resolution},
    state::{Action, PlaybackState},
    tasks::AppTask,
};

/// What the player has to do after a state transition.
#[derive(Debug, Eq, PartialEq)]
pub(super) enum PlayerChange {
    Play(String),
    Stop,
    Unchanged,
}

/// The result of running an action through the reducer, along with the side
/// effects the new state calls for.
#[derive(Debug)]
pub(super) struct Transition {
    pub(super) state: PlaybackState,
    pub(super) task: Option<AppTask>,
    pub(super) player: PlayerChange,
}

/// Works out what the player must do when the displayed item changes from
/// `before` to `after`.
pub(super) fn player_change(before: Option<&Item>, after: Option<&Item>) -> PlayerChange {
    match (before, after) {
        (before, after) if before == after => PlayerChange::Unchanged,
        (_, Some(item)) => PlayerChange::Play(resolver::watch_url(&item.media_id)),
        (Some(_), None) => PlayerChange::Stop,
        (None, None) => PlayerChange::Unchanged,
    }
}

/// Applies `action` to `state`.
///
/// A playlist request is dispatched only when the reducer issued a new one,
/// and it always carries the token the reducer will accept the response for.
pub(super) fn transition(state: PlaybackState, action: Action) -> Transition {
    let before_item = state.displayed_item().cloned();
    let before_token = state.pending_request().map(|request| request.token);

    let state = state.reduce(action);

    let task = state
        .pending_request()
        .filter(|request| Some(request.token) != before_token)
        .map(|request| AppTask::LoadCollection {
            token: request.token,
            collection_id: request.collection_id.clone(),
        });

    let player = player_change(before_item.as_ref(), state.displayed_item());

    Transition {
        state,
        task,
        player,
    }
}

/// The action for text submitted from the playlist field, if any.
pub(super) fn collection_field_action(text: &str) -> Option<Action> {
    match resolver::resolve_collection_field(text) {
        Resolution::Collection(collection_id) => Some(Action::RequestCollection(collection_id)),
        Resolution::SingleItem(media_id) => Some(Action::LoadSingleItem(media_id)),
        Resolution::Clear => Some(Action::ClearCollection),
        Resolution::Ignore => None,
    }
}

/// The action for text submitted from the URL field. This is always a single
/// video, even when no video ID could be found.
pub(super) fn url_field_action(text: &str) -> Action {
    let media_id = resolver::extract_media_id(text.trim());
    if media_id.is_empty() {
        log::warn!("No video id found in {:?}", text);
    }
    Action::LoadSingleItem(media_id)
}

/// Runs `action` through the state reducer, then brings the playlist view,
/// the task worker and the player in line with the new state.
fn apply(app: &mut App, action: Action) -> Result<()> {
    let Transition {
        state,
        task,
        player,
    } = transition(mem::take(&mut app.state), action);

    app.state = state;
    app.playlist_view.sync(&app.state);

    if let Some(task) = task {
        app.task_tx.send(task)?;
    }

    match player {
        PlayerChange::Play(url) => {
            app.reset_player_info();
            app.video_player.play_url(&url)?;
        }
        PlayerChange::Stop => {
            app.reset_player_info();
            app.video_player.stop()?;
        }
        PlayerChange::Unchanged => {}
    }

    Ok(())
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    app.collection_input.is_active = focus == Focus::CollectionInput;
    app.url_input.is_active = focus == Focus::UrlInput;
    app.playlist_view.is_active = focus == Focus::Playlist;
    app.focus = focus;
}

pub(super) fn handle_toggle_help(app: &mut App) {
    app.show_help = !app.show_help;
}

pub(super) fn handle_submit_collection_field(app: &mut App, text: &str) -> Result<()> {
    app.status = None;

    match collection_field_action(text) {
        Some(action) => apply(app, action)?,
        None => log::debug!("Ignoring playlist field input {:?}", text),
    }

    handle_set_focus(app, Focus::Playlist);

    Ok(())
}

pub(super) fn handle_submit_url_field(app: &mut App, text: &str) -> Result<()> {
    app.status = None;

    apply(app, url_field_action(text))?;

    handle_set_focus(app, Focus::Playlist);

    Ok(())
}

pub(super) fn handle_select_item(app: &mut App, id: String) -> Result<()> {
    apply(app, Action::SelectById(id))
}

pub(super) fn handle_next_item(app: &mut App) -> Result<()> {
    apply(app, Action::Next)
}

pub(super) fn handle_previous_item(app: &mut App) -> Result<()> {
    apply(app, Action::Previous)
}

pub(super) fn handle_collection_loaded(app: &mut App, token: u64, items: Vec<Item>) -> Result<()> {
    if !app.state.is_current(token) {
        log::debug!("Dropping stale playlist response {}", token);
        return Ok(());
    }

    apply(
        app,
        Action::CollectionLoaded {
            token,
            result: Ok(items),
        },
    )
}

pub(super) fn handle_collection_load_failed(
    app: &mut App,
    token: u64,
    error: LoadError,
) -> Result<()> {
    if !app.state.is_current(token) {
        log::debug!("Dropping stale playlist failure {}: {}", token, error);
        return Ok(());
    }

    apply(
        app,
        Action::CollectionLoaded {
            token,
            result: Err(error),
        },
    )
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.player_title = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_volume_changed(app: &mut App, vol: u32) {
    app.volume = Some(vol);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, media_id: &str) -> Item {
        Item::new(id.to_string(), id.to_string(), media_id.to_string())
    }

    fn abc() -> Vec<Item> {
        vec![item("A", "vidA"), item("B", "vidB"), item("C", "vidC")]
    }

    fn requested_token(transition: &Transition) -> u64 {
        match &transition.task {
            Some(AppTask::LoadCollection { token, .. }) => *token,
            None => panic!("no playlist request dispatched"),
        }
    }

    #[test]
    fn unchanged_item_keeps_playing() {
        let a = item("A", "vidA");
        assert_eq!(player_change(Some(&a), Some(&a.clone())), PlayerChange::Unchanged);
        assert_eq!(player_change(None, None), PlayerChange::Unchanged);
    }

    #[test]
    fn new_item_is_played_by_watch_url() {
        let a = item("A", "vidA");
        let b = item("B", "vidB");
        assert_eq!(
            player_change(Some(&a), Some(&b)),
            PlayerChange::Play("https://www.youtube.com/watch?v=vidB".to_string())
        );
        assert_eq!(
            player_change(None, Some(&Item::single("XYZ".into()))),
            PlayerChange::Play("https://www.youtube.com/watch?v=XYZ".to_string())
        );
    }

    #[test]
    fn losing_the_item_stops_playback() {
        let a = item("A", "vidA");
        assert_eq!(player_change(Some(&a), None), PlayerChange::Stop);
    }

    #[test]
    fn playlist_id_dispatches_request_with_pending_token() {
        let action = collection_field_action(" PLabc123 ").unwrap();
        let transition = transition(PlaybackState::new(), action);

        let pending = transition.state.pending_request().unwrap();
        match &transition.task {
            Some(AppTask::LoadCollection {
                token,
                collection_id,
            }) => {
                assert_eq!(*token, pending.token);
                assert_eq!(collection_id, "PLabc123");
            }
            None => panic!("no playlist request dispatched"),
        }
        assert_eq!(transition.player, PlayerChange::Unchanged);
    }

    #[test]
    fn loaded_response_plays_first_item_without_new_request() {
        let requested = transition(PlaybackState::new(), Action::RequestCollection("PLabc123".into()));
        let token = requested_token(&requested);

        let loaded = transition(
            requested.state,
            Action::CollectionLoaded {
                token,
                result: Ok(abc()),
            },
        );
        assert!(loaded.task.is_none());
        assert_eq!(
            loaded.player,
            PlayerChange::Play("https://www.youtube.com/watch?v=vidA".to_string())
        );
    }

    #[test]
    fn response_for_superseded_request_changes_nothing() {
        let first = transition(PlaybackState::new(), Action::RequestCollection("PLfirst".into()));
        let first_token = requested_token(&first);
        let second = transition(first.state, Action::RequestCollection("PLsecond".into()));
        assert!(requested_token(&second) > first_token);

        let before = second.state.clone();
        let stale = transition(
            second.state,
            Action::CollectionLoaded {
                token: first_token,
                result: Ok(abc()),
            },
        );
        assert_eq!(stale.state, before);
        assert!(stale.task.is_none());
        assert_eq!(stale.player, PlayerChange::Unchanged);
    }

    #[test]
    fn unrecognised_playlist_field_input_is_ignored() {
        assert_eq!(collection_field_action("hello"), None);
        assert_eq!(collection_field_action("https://youtu.be/abcdef"), None);
    }

    #[test]
    fn playlist_field_resolves_to_actions() {
        assert_eq!(collection_field_action("  "), Some(Action::ClearCollection));
        assert_eq!(
            collection_field_action("https://www.youtube.com/watch?v=XYZ"),
            Some(Action::LoadSingleItem("XYZ".into()))
        );
    }

    #[test]
    fn url_field_always_loads_single_item() {
        assert_eq!(
            url_field_action("https://www.youtube.com/embed/XYZ?rel=0"),
            Action::LoadSingleItem("XYZ".into())
        );
        assert_eq!(url_field_action("not a url"), Action::LoadSingleItem(String::new()));

        let transition = transition(PlaybackState::new(), url_field_action("not a url"));
        assert!(transition.state.is_loaded());
        assert!(transition.task.is_none());
        assert_eq!(
            transition.player,
            PlayerChange::Play("https://www.youtube.com/watch?v=".to_string())
        );
    }

    #[test]
    fn clearing_stops_playback_and_retires_request() {
        let requested = transition(PlaybackState::new(), Action::RequestCollection("PLabc123".into()));
        let token = requested_token(&requested);
        let loaded = transition(
            requested.state,
            Action::CollectionLoaded {
                token,
                result: Ok(abc()),
            },
        );

        let cleared = transition(loaded.state, collection_field_action("").unwrap());
        assert!(cleared.task.is_none());
        assert_eq!(cleared.player, PlayerChange::Stop);
        assert!(!cleared.state.is_current(token));
    }
}
