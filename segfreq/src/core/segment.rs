// src/core/segment.rs

/// ASCII punctuation removed from every segment.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Unicode whitespace plus the ASCII file, group, record and unit
/// separators (U+001C..=U+001F).
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Removes every ASCII punctuation character from a token.
///
/// Remaining characters keep their original order. Non-ASCII punctuation
/// such as `。` or `«` is left untouched.
#[inline]
#[must_use]
pub fn strip_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect()
}

/// Splits text into segments in file order.
///
/// Each line is split on runs of [`is_separator`] characters and every
/// token is passed through [`strip_punctuation`]. Tokens made only of
/// punctuation become empty segments and are still yielded.
#[inline]
pub fn segments(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .flat_map(|line| line.split(is_separator).filter(|piece| !piece.is_empty()))
        .map(strip_punctuation)
}
