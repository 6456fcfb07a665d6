// lessonguard-wordlist/src/normalize/mod.rs
//! Byte-level folding applied to both terms and haystacks before matching.
//!
//! Folding only ever rewrites ASCII bytes into ASCII bytes, so offsets found in
//! the folded buffer are valid offsets (and char boundaries) in the original.

use alloc::vec::Vec;

/// Maps a character substitution back to the letter it usually stands for.
fn fold_leet(byte: u8) -> u8 {
    match byte {
        b'0' => b'o',
        b'1' => b'i',
        b'3' => b'e',
        b'4' | b'@' => b'a',
        b'5' | b'$' => b's',
        b'7' => b't',
        other => other,
    }
}

/// Lower-cases ASCII letters, maps ASCII whitespace to `b' '` and, when
/// `leet_variants` is set, folds substitution characters. The result has
/// exactly `input.len()` bytes.
pub fn fold_for_matching(input: &str, leet_variants: bool) -> Vec<u8> {
    input
        .bytes()
        .map(|b| {
            if b.is_ascii_whitespace() {
                return b' ';
            }
            let lower = b.to_ascii_lowercase();
            if leet_variants { fold_leet(lower) } else { lower }
        })
        .collect()
}

/// Collapses runs of spaces in a folded buffer to one space, the way terms
/// are stored. Also returns, for each kept byte, its offset in `folded`.
pub(crate) fn collapse_spaces(folded: &[u8]) -> (Vec<u8>, Vec<usize>) {
    let mut compact = Vec::with_capacity(folded.len());
    let mut offsets = Vec::with_capacity(folded.len());
    for (i, &byte) in folded.iter().enumerate() {
        if byte == b' ' && compact.last() == Some(&b' ') {
            continue;
        }
        compact.push(byte);
        offsets.push(i);
    }
    (compact, offsets)
}

/// Whether the ASCII `byte` continues a word.
pub(crate) fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whether a match may start at byte `start`. Non-ASCII neighbours are decoded
/// from `text` so "é" blocks a match while "“" does not.
pub(crate) fn is_boundary_before(text: &str, folded: &[u8], start: usize) -> bool {
    if start == 0 {
        return true;
    }
    let prev = folded[start - 1];
    if prev.is_ascii() {
        return !is_word_byte(prev);
    }
    text[..start].chars().next_back().map_or(true, |c| !c.is_alphanumeric())
}

/// Whether a match may end at byte `end`.
pub(crate) fn is_boundary_after(text: &str, folded: &[u8], end: usize) -> bool {
    if end == folded.len() {
        return true;
    }
    let next = folded[end];
    if next.is_ascii() {
        return !is_word_byte(next);
    }
    text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_preserves_length() {
        let input = "Grüße, D@MN 1t!";
        assert_eq!(fold_for_matching(input, true).len(), input.len());
        assert_eq!(fold_for_matching(input, false).len(), input.len());
    }

    #[test]
    fn test_fold_leet_variants() {
        assert_eq!(fold_for_matching("Sh1T", true), b"shit".as_slice());
        assert_eq!(fold_for_matching("a$$", true), b"ass".as_slice());
        assert_eq!(fold_for_matching("a$$", false), b"a$$".as_slice());
    }

    #[test]
    fn test_fold_whitespace_to_space() {
        assert_eq!(fold_for_matching("a\tb\nc\r d", false), b"a b c  d".as_slice());
    }

    #[test]
    fn test_collapse_spaces_keeps_offsets() {
        let (compact, offsets) = collapse_spaces(b"ab   c d");
        assert_eq!(compact, b"ab c d".as_slice());
        assert_eq!(offsets, [0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn test_word_bytes() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'7'));
        assert!(!is_word_byte(b' '));
        assert!(!is_word_byte(b'\''));
        assert!(!is_word_byte(b'*'));
    }

    #[test]
    fn test_boundaries_decode_non_ascii() {
        let text = "“damn” damné";
        let folded = fold_for_matching(text, false);
        let start = text.find("damn").unwrap();
        assert!(is_boundary_before(text, &folded, start));
        assert!(is_boundary_after(text, &folded, start + 4));

        let accented = text.rfind("damn").unwrap();
        assert!(!is_boundary_after(text, &folded, accented + 4));
    }
}
