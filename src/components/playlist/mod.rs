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

//! Playlist sidebar state.
//!
//! The sidebar mirrors the loaded playlist, the selected index and the
//! Previous/Next availability from the playback state. It adds a cursor of its
//! own so the user can move through the list before choosing an item; choosing
//! an item is what changes the selection.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{model::Item, state::PlaybackState};

#[derive(Default)]
pub(crate) struct PlaylistView {
    pub(crate) items: Vec<Item>,
    pub(crate) selected: Option<usize>,
    pub(crate) can_previous: bool,
    pub(crate) can_next: bool,
    pub(crate) list_state: ListState,
    pub(crate) is_active: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Brings the view in line with the playback state.
    ///
    /// The cursor follows the selection whenever the selection moves, and is
    /// reset whenever a different playlist is shown.
    pub(crate) fn sync(&mut self, state: &PlaybackState) {
        let items = state.collection();
        let selected = state.selected_index();

        self.can_previous = state.can_previous();
        self.can_next = state.can_next();

        let items_changed = self.items != items;
        if items_changed {
            self.items = items.to_vec();
        }

        if items_changed || selected != self.selected {
            self.selected = selected;
            let cursor = selected.or_else(|| (!self.items.is_empty()).then_some(0));
            self.list_state.select(cursor);
        }
    }

    pub(crate) fn cursor_item(&self) -> Option<&Item> {
        self.list_state.selected().and_then(|index| self.items.get(index))
    }

    fn goto_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }
}
