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

//! Event routing for the playlist view.
//!
//! Cursor movement is handled locally. `Enter` selects the item under the
//! cursor, `n` and `p` move the selection, but only when the corresponding
//! control is currently offered.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::PlaylistView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                if let Some(id) = self.cursor_item().and_then(|item| item.id.clone()) {
                    event_tx.send(AppEvent::SelectItem(id))?;
                }
            }

            KeyCode::Char('n') | KeyCode::Right => {
                if self.can_next {
                    event_tx.send(AppEvent::NextItem)?;
                }
            }

            KeyCode::Char('p') | KeyCode::Left => {
                if self.can_previous {
                    event_tx.send(AppEvent::PreviousItem)?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{
        model::Item,
        state::{Action, PlaybackState},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view(selected: &str) -> PlaylistView {
        let items: Vec<Item> = ["A", "B", "C"]
            .iter()
            .map(|id| Item::new(id.to_string(), id.to_string(), format!("vid{}", id)))
            .collect();
        let state = PlaybackState::new().reduce(Action::RequestCollection("PLabc123".into()));
        let token = state.pending_request().unwrap().token;
        let state = state
            .reduce(Action::CollectionLoaded {
                token,
                result: Ok(items),
            })
            .reduce(Action::SelectById(selected.to_string()));

        let mut view = PlaylistView::new();
        view.sync(&state);
        view.is_active = true;
        view
    }

    #[test]
    fn enter_selects_item_under_cursor() {
        let (tx, rx) = mpsc::channel();
        let mut view = view("A");

        view.process_event(&key(KeyCode::Down), &tx).unwrap();
        view.process_event(&key(KeyCode::Down), &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::SelectItem(id) => assert_eq!(id, "C"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn previous_is_not_offered_at_first_item() {
        let (tx, rx) = mpsc::channel();
        let mut view = view("A");

        view.process_event(&key(KeyCode::Char('p')), &tx).unwrap();
        assert!(rx.try_recv().is_err());

        view.process_event(&key(KeyCode::Char('n')), &tx).unwrap();
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::NextItem));
    }

    #[test]
    fn next_is_not_offered_at_last_item() {
        let (tx, rx) = mpsc::channel();
        let mut view = view("C");

        view.process_event(&key(KeyCode::Char('n')), &tx).unwrap();
        assert!(rx.try_recv().is_err());

        view.process_event(&key(KeyCode::Char('p')), &tx).unwrap();
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PreviousItem));
    }

    #[test]
    fn unknown_keys_fall_through() {
        let (tx, _rx) = mpsc::channel();
        let mut view = view("A");
        assert!(!view.process_event(&key(KeyCode::Char('q')), &tx).unwrap());
    }
}
