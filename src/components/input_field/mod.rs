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

//! Single-line text input with a submit action.
//!
//! The application has two of these, one for a playlist ID and one for a
//! video URL. Each owns its raw text buffer; the text is only interpreted when
//! it is submitted, at which point the field emits its submit event carrying
//! the current contents. The contents are kept after submission.

mod event;
mod render;

use tui_input::Input;

use crate::events::AppEvent;

pub(crate) struct InputField {
    pub(crate) title: &'static str,
    pub(crate) placeholder: &'static str,
    pub(crate) action_label: &'static str,
    pub(crate) input: Input,
    pub(crate) is_active: bool,
    on_submit: fn(String) -> AppEvent,
}

impl InputField {
    pub(crate) fn new(
        title: &'static str,
        placeholder: &'static str,
        action_label: &'static str,
        on_submit: fn(String) -> AppEvent,
    ) -> Self {
        Self {
            title,
            placeholder,
            action_label,
            input: Input::default(),
            is_active: false,
            on_submit,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    fn submit_event(&self) -> AppEvent {
        (self.on_submit)(self.input.value().to_string())
    }
}
