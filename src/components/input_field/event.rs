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

//! Event routing for input fields.
//!
//! While a field is active it consumes every key: `Enter` submits, `Esc`
//! hands focus back to the playlist, `?` opens the help popup while the field
//! is still empty, and everything else is delegated to the managed input
//! component.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    Focus,
    components::InputField,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for InputField {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Enter => {
                event_tx.send(self.submit_event())?;
            }

            KeyCode::Esc => {
                event_tx.send(AppEvent::SetFocus(Focus::Playlist))?;
            }

            KeyCode::Char('?') if self.value().is_empty() => {
                event_tx.send(AppEvent::ToggleHelp)?;
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn field() -> InputField {
        let mut field = InputField::new("Playlist", "Enter Playlist ID", "Load Playlist", AppEvent::SubmitCollectionField);
        field.is_active = true;
        field
    }

    #[test]
    fn inactive_field_ignores_keys() {
        let (tx, rx) = mpsc::channel();
        let mut field = field();
        field.is_active = false;

        assert!(!field.process_event(&key(KeyCode::Char('P')), &tx).unwrap());
        assert_eq!(field.value(), "");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn typing_then_enter_submits_text() {
        let (tx, rx) = mpsc::channel();
        let mut field = field();

        for c in "PLabc".chars() {
            assert!(field.process_event(&key(KeyCode::Char(c)), &tx).unwrap());
        }
        field.process_event(&key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::SubmitCollectionField(text) => assert_eq!(text, "PLabc"),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(field.value(), "PLabc");
    }

    #[test]
    fn backspace_edits_buffer() {
        let (tx, _rx) = mpsc::channel();
        let mut field = field();

        for c in "PLx".chars() {
            field.process_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        field.process_event(&key(KeyCode::Backspace), &tx).unwrap();
        assert_eq!(field.value(), "PL");
    }

    #[test]
    fn escape_returns_focus_to_playlist() {
        let (tx, rx) = mpsc::channel();
        let mut field = field();

        assert!(field.process_event(&key(KeyCode::Esc), &tx).unwrap());
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SetFocus(Focus::Playlist)));
    }

    #[test]
    fn question_mark_in_empty_field_opens_help() {
        let (tx, rx) = mpsc::channel();
        let mut field = field();

        assert!(field.process_event(&key(KeyCode::Char('?')), &tx).unwrap());
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::ToggleHelp));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn question_mark_after_text_is_typed() {
        let (tx, rx) = mpsc::channel();
        let mut field = field();

        for c in "watch?v=ab".chars() {
            field.process_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(field.value(), "watch?v=ab");
    }
}
