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

//! Free-form user input resolution.
//!
//! Text typed by the user is either a playlist ID or something that looks
//! like a video URL. This module decides which, and pulls the video ID out of
//! the common YouTube URL shapes.
//!
//! Nothing here fails: an unrecognised URL yields an empty video ID, which is
//! passed on as-is and left for the player to reject.

use std::sync::LazyLock;

use regex::Regex;

const COLLECTION_PREFIX: &str = "PL";

const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

static MEDIA_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\?v=|/embed/|/watch\?v=|/\d{1,2}/|/vi/)([^#&?]*)")
        .expect("media id pattern is valid")
});

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum InputKind {
    CollectionId(String),
    MediaUrl(String),
}

/// What a submitted playlist field should do to the application state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Resolution {
    Collection(String),
    SingleItem(String),
    Clear,
    Ignore,
}

pub(crate) fn classify(text: &str) -> InputKind {
    if text.starts_with(COLLECTION_PREFIX) {
        InputKind::CollectionId(text.to_string())
    } else {
        InputKind::MediaUrl(text.to_string())
    }
}

/// Extracts the video ID from a YouTube URL.
///
/// Recognises `?v=`, `/embed/`, `/watch?v=`, `/vi/` and short numeric path
/// segments, stopping at the first `#`, `&` or `?`. Returns an empty string
/// when no shape matches.
pub(crate) fn extract_media_id(url: &str) -> String {
    MEDIA_ID_PATTERN
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Resolves the text submitted from the playlist field.
///
/// An empty field clears the current playlist. Text that is not a playlist ID
/// switches to a single video, but only when a video ID can actually be
/// extracted from it.
pub(crate) fn resolve_collection_field(text: &str) -> Resolution {
    let text = text.trim();
    if text.is_empty() {
        return Resolution::Clear;
    }

    match classify(text) {
        InputKind::CollectionId(id) => Resolution::Collection(id),
        InputKind::MediaUrl(url) => {
            let media_id = extract_media_id(&url);
            if media_id.is_empty() {
                Resolution::Ignore
            } else {
                Resolution::SingleItem(media_id)
            }
        }
    }
}

/// Builds the URL handed to the player for a video ID.
pub(crate) fn watch_url(media_id: &str) -> String {
    format!("{}?v={}", WATCH_BASE_URL, media_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_playlist_prefix() {
        assert_eq!(
            classify("PLabc123"),
            InputKind::CollectionId("PLabc123".to_string())
        );
        assert_eq!(classify("PL"), InputKind::CollectionId("PL".to_string()));
    }

    #[test]
    fn classifies_everything_else_as_url() {
        for text in ["", "pl123", "https://youtu.be/abc", " PLabc", "OLAK5uy_x"] {
            assert_eq!(classify(text), InputKind::MediaUrl(text.to_string()));
        }
    }

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(extract_media_id("https://www.youtube.com/watch?v=XYZ"), "XYZ");
    }

    #[test]
    fn extracts_from_query_param() {
        assert_eq!(extract_media_id("https://example.com/video?v=ID&t=10"), "ID");
    }

    #[test]
    fn extracts_from_embed_url() {
        assert_eq!(extract_media_id("https://www.youtube.com/embed/ID?autoplay=1"), "ID");
    }

    #[test]
    fn extracts_from_vi_url() {
        assert_eq!(extract_media_id("https://img.youtube.com/vi/ID#frag"), "ID");
    }

    #[test]
    fn extracts_from_numeric_segment() {
        assert_eq!(extract_media_id("https://www.youtube.com/v/1/ID"), "ID");
        assert_eq!(extract_media_id("https://example.com/12/ID&x=1"), "ID");
    }

    #[test]
    fn stops_at_separators() {
        assert_eq!(extract_media_id("https://youtube.com/watch?v=ID#t=3"), "ID");
        assert_eq!(extract_media_id("https://youtube.com/watch?v=ID&list=PL1"), "ID");
        assert_eq!(extract_media_id("https://youtube.com/embed/ID?rel=0"), "ID");
    }

    #[test]
    fn unmatched_url_yields_empty() {
        assert_eq!(extract_media_id("https://youtu.be/abcdef"), "");
        assert_eq!(extract_media_id("not a url at all"), "");
        assert_eq!(extract_media_id(""), "");
    }

    #[test]
    fn partial_url_is_tolerated() {
        assert_eq!(extract_media_id("?v="), "");
        assert_eq!(extract_media_id("watch?v=ab"), "ab");
    }

    #[test]
    fn resolves_playlist_field() {
        assert_eq!(resolve_collection_field("   "), Resolution::Clear);
        assert_eq!(
            resolve_collection_field(" PLabc123 "),
            Resolution::Collection("PLabc123".to_string())
        );
        assert_eq!(
            resolve_collection_field("https://www.youtube.com/watch?v=XYZ"),
            Resolution::SingleItem("XYZ".to_string())
        );
        assert_eq!(resolve_collection_field("hello"), Resolution::Ignore);
    }

    #[test]
    fn builds_watch_url() {
        assert_eq!(watch_url("XYZ"), "https://www.youtube.com/watch?v=XYZ");
    }
}
