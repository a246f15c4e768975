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

//! Domain models and core data structures.
//!
//! This module defines the central entity of the application, the playable
//! [`Item`], as it appears both in a loaded playlist and when synthesized from
//! a single video URL.

/// One playable video.
///
/// Items that come from a playlist always carry the playlist item `id` and a
/// display `title`. An item synthesized from a video URL only knows its
/// `media_id`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct Item {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) media_id: String,
}

impl Item {
    pub(crate) fn new(id: String, title: String, media_id: String) -> Self {
        Self {
            id: Some(id),
            title: Some(title),
            media_id,
        }
    }

    /// Synthesizes a stand-alone item for a video that is not part of a
    /// playlist.
    pub(crate) fn single(media_id: String) -> Self {
        Self {
            id: None,
            title: None,
            media_id,
        }
    }

    pub(crate) fn is_single(&self) -> bool {
        self.id.is_none()
    }

    /// The text shown for this item, falling back to the media id for
    /// synthesized items.
    pub(crate) fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.media_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_has_only_media_id() {
        let item = Item::single("XYZ".to_string());
        assert!(item.is_single());
        assert_eq!(item.id, None);
        assert_eq!(item.title, None);
        assert_eq!(item.display_title(), "XYZ");
    }

    #[test]
    fn playlist_item_displays_title() {
        let item = Item::new("a1".into(), "First".into(), "vid1".into());
        assert!(!item.is_single());
        assert_eq!(item.display_title(), "First");
    }
}
