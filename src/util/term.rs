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

//! Terminal background colour control.
//!
//! Uses OSC 11 and OSC 111 escape sequences. Terminals that do not support
//! them simply ignore the sequence.

use std::io::{self, Write};

/// Sets the terminal background to a `#rrggbb` colour.
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_colour: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_colour)?;
    out.flush()
}

/// Restores the user's own terminal background.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_osc_sequences() {
        let mut out = Vec::new();
        set_terminal_bg(&mut out, "#242424").unwrap();
        reset_terminal_bg(&mut out).unwrap();
        assert_eq!(out, b"\x1b]11;#242424\x07\x1b]111\x07");
    }
}
