//! International Morse code table and text encoder.
//!
//! Patterns are strings over {'.', '-', ' '}. Letters within a phrase are
//! joined by a single space, which the playback stage times as the
//! inter-letter gap. A space in the input maps to the ' ' table entry, so
//! together with the join separators it yields a longer silence.

/// Supported characters and their patterns.
///
/// Uppercase letters, digits, and the space. Everything else is
/// unsupported and dropped by [`encode`].
pub static MORSE_TABLE: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', " "),
];

/// Look up the pattern for a single character (case-insensitive).
///
/// Returns `None` for unsupported characters.
#[inline]
pub fn pattern(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, pat)| *pat)
}

/// Encode text into a Morse pattern string.
///
/// Case-insensitive. Per-character patterns are joined with a single
/// space. Unsupported characters contribute nothing, which silently
/// merges their neighbors into adjacent letter tokens.
pub fn encode(text: &str) -> String {
    text.chars()
        .filter_map(pattern)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters() {
        assert_eq!(encode("A"), ".-");
        assert_eq!(encode("E"), ".");
        assert_eq!(encode("0"), "-----");
        assert_eq!(encode("9"), "----.");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(encode("sos"), "... --- ...");
        assert_eq!(encode("SOS"), "... --- ...");
        assert_eq!(encode("SoS"), encode("sos"));
    }

    #[test]
    fn test_unknown_characters_dropped() {
        assert_eq!(encode("a!b"), ".- -...");
        assert_eq!(encode("??"), "");
    }

    #[test]
    fn test_space_joins_as_letter_gap_token() {
        // 'a b' = ".-" + sep + " " + sep + "-..." (three spaces total)
        assert_eq!(encode("a b"), ".-   -...");
    }

    #[test]
    fn test_encode_is_pure() {
        let text = "hello world 123";
        assert_eq!(encode(text), encode(text));
    }
}
