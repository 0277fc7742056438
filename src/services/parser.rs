//! Heuristic extraction of song lines from generated playlist text.
//!
//! A line is treated as a song when it contains a hyphen or en-dash, or the
//! letters "by" in any case. This deliberately matches words like "maybe"
//! too; callers rely on the exact filter, so it is not tightened.

pub const FALLBACK_PLAYLIST_NAME: &str = "Your Mood Playlist";

fn looks_like_song(line: &str) -> bool {
    line.contains(&['-', '–'][..]) || line.to_lowercase().contains("by")
}

/// Returns the first `limit` song-like lines, in their original order
pub fn parse_candidates(raw_text: &str, limit: usize) -> Vec<String> {
    raw_text
        .split('\n')
        .filter(|line| looks_like_song(line))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// First line of the generated text, or the fallback name when that line is empty
pub fn playlist_name(raw_text: &str) -> String {
    match raw_text.split('\n').next() {
        Some(first) if !first.is_empty() => first.to_string(),
        _ => FALLBACK_PLAYLIST_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Sunny Vibes\nArtist A - Song One\nArtist B - Song Two\nJust a mood description";

    #[test]
    fn test_keeps_hyphenated_lines_in_order() {
        let candidates = parse_candidates(SAMPLE, 10);
        assert_eq!(
            candidates,
            vec!["Artist A - Song One", "Artist B - Song Two"]
        );
    }

    #[test]
    fn test_en_dash_and_by_markers() {
        let text = "Heading\nArtist C – Song Three\n\"Song Four\" BY Artist D\nnothing here";
        let candidates = parse_candidates(text, 10);
        assert_eq!(
            candidates,
            vec!["Artist C – Song Three", "\"Song Four\" BY Artist D"]
        );
    }

    #[test]
    fn test_by_inside_other_words_still_matches() {
        let candidates = parse_candidates("Maybe tomorrow\nLullaby\nplain line", 10);
        assert_eq!(candidates, vec!["Maybe tomorrow", "Lullaby"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let text = "1. A - a\n2. B - b\n3. C - c\n4. D - d";
        assert_eq!(parse_candidates(text, 2), vec!["1. A - a", "2. B - b"]);
        assert!(parse_candidates(text, 0).is_empty());
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(parse_candidates("", 10).is_empty());
    }

    #[test]
    fn test_playlist_name_is_first_line() {
        assert_eq!(playlist_name(SAMPLE), "Sunny Vibes");
        assert_eq!(playlist_name("  Spaced Out  \nA - B"), "  Spaced Out  ");
    }

    #[test]
    fn test_playlist_name_fallback() {
        assert_eq!(playlist_name("\nArtist A - Song One"), FALLBACK_PLAYLIST_NAME);
        assert_eq!(playlist_name(""), FALLBACK_PLAYLIST_NAME);
    }
}
