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

//! Playlist and selection state.
//!
//! [`PlaybackState`] is an immutable snapshot of what is loaded and what is
//! selected. Every change goes through [`PlaybackState::reduce`], which takes
//! the current snapshot and an [`Action`] and returns the next snapshot. The
//! reducer performs no I/O; the event handlers dispatch the playlist request
//! and drive the player based on the snapshot it returns.
//!
//! # Selection
//!
//! The item on screen is never stored on its own while a playlist is active.
//! It is always derived from the playlist and the selected index, see
//! [`PlaybackState::displayed_item`].
//!
//! # Stale responses
//!
//! Each playlist request is issued with a new, strictly increasing token.
//! Only the response carrying the most recently issued token is applied, so a
//! slow response for an earlier playlist ID can not overwrite a newer one.
//! Clearing the playlist also retires the outstanding token.

use crate::{api::LoadError, model::Item};

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) enum Selection {
    #[default]
    None,
    Index(usize),
    Single(Item),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct LoadRequest {
    pub(crate) token: u64,
    pub(crate) collection_id: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Action {
    RequestCollection(String),
    CollectionLoaded {
        token: u64,
        result: Result<Vec<Item>, LoadError>,
    },
    ClearCollection,
    SelectById(String),
    Next,
    Previous,
    LoadSingleItem(String),
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct PlaybackState {
    collection_id: Option<String>,
    collection: Vec<Item>,
    selection: Selection,
    loaded: bool,
    latest_token: u64,
    pending: Option<LoadRequest>,
    last_error: Option<LoadError>,
}

impl PlaybackState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the state that results from applying `action`.
    pub(crate) fn reduce(self, action: Action) -> Self {
        match action {
            Action::RequestCollection(collection_id) => self.request_collection(collection_id),
            Action::CollectionLoaded { token, result } => self.collection_loaded(token, result),
            Action::ClearCollection => self.clear_collection(),
            Action::SelectById(id) => self.select_by_id(&id),
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::LoadSingleItem(media_id) => self.load_single_item(media_id),
        }
    }

    fn request_collection(self, collection_id: String) -> Self {
        let token = self.latest_token + 1;
        Self {
            collection_id: Some(collection_id.clone()),
            latest_token: token,
            pending: Some(LoadRequest {
                token,
                collection_id,
            }),
            last_error: None,
            ..self
        }
    }

    fn collection_loaded(self, token: u64, result: Result<Vec<Item>, LoadError>) -> Self {
        if !self.is_current(token) {
            return self;
        }

        match result {
            Ok(items) => {
                let selection = if items.is_empty() {
                    Selection::None
                } else {
                    Selection::Index(0)
                };
                Self {
                    collection: items,
                    selection,
                    loaded: true,
                    pending: None,
                    last_error: None,
                    ..self
                }
            }
            Err(error) => Self {
                pending: None,
                last_error: Some(error),
                ..self
            },
        }
    }

    fn clear_collection(self) -> Self {
        Self {
            latest_token: self.latest_token + 1,
            ..Self::default()
        }
    }

    fn select_by_id(self, id: &str) -> Self {
        match self
            .collection
            .iter()
            .position(|item| item.id.as_deref() == Some(id))
        {
            Some(index) => Self {
                selection: Selection::Index(index),
                ..self
            },
            None => self,
        }
    }

    fn next(self) -> Self {
        match self.selection {
            Selection::Index(index) if index + 1 < self.collection.len() => Self {
                selection: Selection::Index(index + 1),
                ..self
            },
            _ => self,
        }
    }

    fn previous(self) -> Self {
        match self.selection {
            Selection::Index(index) if index > 0 && index < self.collection.len() => Self {
                selection: Selection::Index(index - 1),
                ..self
            },
            _ => self,
        }
    }

    fn load_single_item(self, media_id: String) -> Self {
        Self {
            selection: Selection::Single(Item::single(media_id)),
            loaded: true,
            ..self
        }
    }

    /// Whether `token` belongs to the most recently issued playlist request.
    pub(crate) fn is_current(&self, token: u64) -> bool {
        self.pending.as_ref().is_some_and(|p| p.token == token)
    }

    /// The item the player should be showing.
    pub(crate) fn displayed_item(&self) -> Option<&Item> {
        match &self.selection {
            Selection::None => None,
            Selection::Index(index) => self.collection.get(*index),
            Selection::Single(item) => Some(item),
        }
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Index(index) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn can_next(&self) -> bool {
        self.selected_index()
            .is_some_and(|index| index + 1 < self.collection.len())
    }

    pub(crate) fn can_previous(&self) -> bool {
        self.selected_index().is_some_and(|index| index > 0)
    }

    pub(crate) fn collection(&self) -> &[Item] {
        &self.collection
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn pending_request(&self) -> Option<&LoadRequest> {
        self.pending.as_ref()
    }

    pub(crate) fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(id.to_string(), format!("Title {}", id), format!("vid{}", id))
    }

    fn abc() -> Vec<Item> {
        vec![item("A"), item("B"), item("C")]
    }

    fn request(state: PlaybackState, id: &str) -> (PlaybackState, u64) {
        let state = state.reduce(Action::RequestCollection(id.to_string()));
        let token = state.pending_request().unwrap().token;
        (state, token)
    }

    fn loaded_with(items: Vec<Item>) -> PlaybackState {
        let (state, token) = request(PlaybackState::new(), "PLabc123");
        state.reduce(Action::CollectionLoaded {
            token,
            result: Ok(items),
        })
    }

    fn displayed_id(state: &PlaybackState) -> Option<&str> {
        state.displayed_item().and_then(|item| item.id.as_deref())
    }

    #[test]
    fn starts_empty() {
        let state = PlaybackState::new();
        assert!(state.collection().is_empty());
        assert_eq!(&state.selection, &Selection::None);
        assert!(!state.is_loaded());
        assert!(state.displayed_item().is_none());
    }

    #[test]
    fn playlist_navigation_scenario() {
        let state = loaded_with(abc());
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(displayed_id(&state), Some("A"));
        assert!(state.is_loaded());

        let state = state.reduce(Action::Next);
        assert_eq!(displayed_id(&state), Some("B"));

        let state = state.reduce(Action::Next);
        assert_eq!(state.selected_index(), Some(2));
        assert_eq!(displayed_id(&state), Some("C"));

        let state = state.reduce(Action::Next);
        assert_eq!(state.selected_index(), Some(2));
        assert_eq!(displayed_id(&state), Some("C"));

        let state = state.reduce(Action::Previous);
        assert_eq!(state.selected_index(), Some(1));
        assert_eq!(displayed_id(&state), Some("B"));
    }

    #[test]
    fn previous_at_first_is_noop() {
        let state = loaded_with(abc());
        let after = state.clone().reduce(Action::Previous);
        assert_eq!(after, state);
    }

    #[test]
    fn navigation_never_leaves_bounds() {
        let mut state = loaded_with(abc());
        let actions = [
            Action::Next,
            Action::Next,
            Action::Next,
            Action::Next,
            Action::Previous,
            Action::Previous,
            Action::Previous,
            Action::Previous,
            Action::Next,
        ];
        for action in actions {
            state = state.reduce(action);
            let index = state.selected_index().unwrap();
            assert!(index < state.collection().len());
        }
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn navigation_gating_follows_position() {
        let state = loaded_with(abc());
        assert!(!state.can_previous());
        assert!(state.can_next());

        let state = state.reduce(Action::Next).reduce(Action::Next);
        assert!(state.can_previous());
        assert!(!state.can_next());

        let single = loaded_with(vec![item("A")]);
        assert!(!single.can_previous());
        assert!(!single.can_next());
    }

    #[test]
    fn next_and_previous_are_noops_without_playlist() {
        let empty = PlaybackState::new();
        assert_eq!(empty.clone().reduce(Action::Next), empty);
        assert_eq!(empty.clone().reduce(Action::Previous), empty);

        let single = PlaybackState::new().reduce(Action::LoadSingleItem("XYZ".into()));
        assert_eq!(single.clone().reduce(Action::Next), single);
        assert_eq!(single.clone().reduce(Action::Previous), single);
    }

    #[test]
    fn select_by_id_moves_selection() {
        let state = loaded_with(abc()).reduce(Action::SelectById("C".into()));
        assert_eq!(state.selected_index(), Some(2));
        assert_eq!(displayed_id(&state), Some("C"));
    }

    #[test]
    fn select_by_unknown_id_is_noop() {
        let state = loaded_with(abc()).reduce(Action::Next);
        let after = state.clone().reduce(Action::SelectById("missing".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn single_item_from_url_scenario() {
        let state = loaded_with(abc());
        let state = state.reduce(Action::LoadSingleItem("XYZ".into()));

        let displayed = state.displayed_item().unwrap();
        assert!(displayed.is_single());
        assert_eq!(displayed.media_id, "XYZ");
        assert!(state.is_loaded());
        assert_eq!(state.collection(), abc().as_slice());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn single_item_without_playlist() {
        let state = PlaybackState::new().reduce(Action::LoadSingleItem("XYZ".into()));
        assert!(state.is_loaded());
        assert!(state.collection().is_empty());
        assert_eq!(&state.selection, &Selection::Single(Item::single("XYZ".into())));
    }

    #[test]
    fn empty_media_id_still_loads() {
        let state = PlaybackState::new().reduce(Action::LoadSingleItem(String::new()));
        assert!(state.is_loaded());
        assert_eq!(state.displayed_item().unwrap().media_id, "");
    }

    #[test]
    fn selecting_from_playlist_leaves_single_item() {
        let state = loaded_with(abc())
            .reduce(Action::LoadSingleItem("XYZ".into()))
            .reduce(Action::SelectById("B".into()));
        assert_eq!(state.selected_index(), Some(1));
        assert_eq!(displayed_id(&state), Some("B"));
    }

    #[test]
    fn new_playlist_resets_selection() {
        let state = loaded_with(abc()).reduce(Action::Next).reduce(Action::Next);
        assert_eq!(state.selected_index(), Some(2));

        let (state, token) = request(state, "PLother");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Ok(vec![item("X"), item("Y")]),
        });
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(displayed_id(&state), Some("X"));
        assert_eq!(state.collection_id.as_deref(), Some("PLother"));
    }

    #[test]
    fn new_playlist_replaces_single_item() {
        let state = PlaybackState::new().reduce(Action::LoadSingleItem("XYZ".into()));
        let (state, token) = request(state, "PLabc123");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Ok(abc()),
        });
        assert_eq!(displayed_id(&state), Some("A"));
    }

    #[test]
    fn empty_playlist_is_loaded_but_unselectable() {
        let state = loaded_with(abc()).reduce(Action::Next);
        let (state, token) = request(state, "PLempty");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Ok(vec![]),
        });
        assert!(state.collection().is_empty());
        assert_eq!(&state.selection, &Selection::None);
        assert!(state.displayed_item().is_none());
        assert!(state.is_loaded());
        assert!(!state.can_next());
        assert!(!state.can_previous());
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let state = loaded_with(abc()).reduce(Action::Next);
        let (requested, token) = request(state.clone(), "PLbroken");
        let failed = requested.reduce(Action::CollectionLoaded {
            token,
            result: Err(LoadError::Status(403)),
        });

        assert_eq!(failed.collection(), state.collection());
        assert_eq!(&failed.selection, &state.selection);
        assert_eq!(failed.is_loaded(), state.is_loaded());
        assert_eq!(failed.last_error(), Some(&LoadError::Status(403)));
        assert!(failed.pending_request().is_none());
    }

    #[test]
    fn failed_first_load_stays_unloaded() {
        let (state, token) = request(PlaybackState::new(), "PLbroken");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Err(LoadError::Network("connection refused".into())),
        });
        assert!(!state.is_loaded());
        assert!(state.collection().is_empty());
        assert!(state.last_error().is_some());
    }

    #[test]
    fn new_request_clears_last_error() {
        let (state, token) = request(PlaybackState::new(), "PLbroken");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Err(LoadError::Status(500)),
        });
        let (state, _) = request(state, "PLabc123");
        assert!(state.last_error().is_none());
    }

    #[test]
    fn stale_response_is_dropped() {
        let (state, first) = request(PlaybackState::new(), "PLfirst");
        let (state, second) = request(state, "PLsecond");
        assert!(second > first);

        let state = state.reduce(Action::CollectionLoaded {
            token: second,
            result: Ok(vec![item("S")]),
        });
        let after = state.clone().reduce(Action::CollectionLoaded {
            token: first,
            result: Ok(vec![item("F")]),
        });

        assert_eq!(after, state);
        assert_eq!(displayed_id(&after), Some("S"));
    }

    #[test]
    fn stale_failure_is_dropped() {
        let (state, first) = request(PlaybackState::new(), "PLfirst");
        let (state, _) = request(state, "PLsecond");
        let after = state.clone().reduce(Action::CollectionLoaded {
            token: first,
            result: Err(LoadError::Status(404)),
        });
        assert_eq!(after, state);
        assert!(after.last_error().is_none());
    }

    #[test]
    fn duplicate_response_is_dropped() {
        let (state, token) = request(PlaybackState::new(), "PLabc123");
        let state = state.reduce(Action::CollectionLoaded {
            token,
            result: Ok(abc()),
        });
        let state = state.reduce(Action::Next);
        let after = state.clone().reduce(Action::CollectionLoaded {
            token,
            result: Ok(abc()),
        });
        assert_eq!(after.selected_index(), Some(1));
    }

    #[test]
    fn clear_resets_everything() {
        let states = [
            PlaybackState::new(),
            loaded_with(abc()).reduce(Action::Next),
            PlaybackState::new().reduce(Action::LoadSingleItem("XYZ".into())),
            request(loaded_with(abc()), "PLpending").0,
        ];

        for state in states {
            let cleared = state.reduce(Action::ClearCollection);
            assert!(cleared.collection().is_empty());
            assert_eq!(&cleared.selection, &Selection::None);
            assert!(!cleared.is_loaded());
            assert!(cleared.collection_id.is_none());
            assert!(cleared.pending_request().is_none());
        }
    }

    #[test]
    fn clear_retires_in_flight_request() {
        let (state, token) = request(PlaybackState::new(), "PLabc123");
        let state = state.reduce(Action::ClearCollection);
        let after = state.clone().reduce(Action::CollectionLoaded {
            token,
            result: Ok(abc()),
        });
        assert_eq!(after, state);
        assert!(!after.is_loaded());

        let (after, next) = request(after, "PLnext");
        assert!(next > token);
        assert!(after.is_current(next));
    }
}
