//! International Morse code translation.
//!
//! Letters are separated by a single space and words by ` / `.

const MORSE_TABLE: &[(char, &str)] = &[
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
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('¿', "..-.-"),
    ('¡', "--...-"),
];

/// Placeholder for characters or symbols without a mapping
pub const UNKNOWN_SYMBOL: &str = "?";

fn encode_char(c: char) -> &'static str {
    let upper = c.to_uppercase().next().unwrap_or(c);
    MORSE_TABLE
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map(|(_, code)| *code)
        .unwrap_or(UNKNOWN_SYMBOL)
}

fn decode_symbol(symbol: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, code)| *code == symbol)
        .map(|(letter, _)| *letter)
}

pub fn text_to_morse(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(encode_char)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn morse_to_text(morse: &str) -> String {
    let normalized = morse.split_whitespace().collect::<Vec<_>>().join(" ");

    normalized
        .split(" / ")
        .map(|word| {
            word.split(' ')
                .filter(|symbol| !symbol.is_empty())
                .map(|symbol| decode_symbol(symbol).unwrap_or('?'))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_morse() {
        assert_eq!(text_to_morse("SOS"), "... --- ...");
        assert_eq!(text_to_morse("hi there"), ".... .. / - .... . .-. .");
    }

    #[test]
    fn test_text_to_morse_unknown_char() {
        assert_eq!(text_to_morse("a#"), ".- ?");
    }

    #[test]
    fn test_text_to_morse_collapses_whitespace() {
        assert_eq!(text_to_morse("  a   b "), ".- / -...");
        assert_eq!(text_to_morse(""), "");
    }

    #[test]
    fn test_text_to_morse_inverted_punctuation() {
        assert_eq!(text_to_morse("¿¡"), "..-.- --...-");
    }

    #[test]
    fn test_morse_to_text() {
        assert_eq!(morse_to_text("... --- ..."), "SOS");
        assert_eq!(morse_to_text(".... .. / - .... . .-. ."), "HI THERE");
    }

    #[test]
    fn test_morse_to_text_irregular_spacing() {
        assert_eq!(morse_to_text("  ....   ..  /   -- "), "HI M");
    }

    #[test]
    fn test_morse_to_text_unknown_symbol() {
        assert_eq!(morse_to_text("...... .-"), "?A");
    }

    #[test]
    fn test_morse_table_has_unique_codes() {
        for (idx, (_, code)) in MORSE_TABLE.iter().enumerate() {
            assert!(
                MORSE_TABLE[idx + 1..].iter().all(|(_, other)| other != code),
                "duplicate code {code}"
            );
        }
    }
}
