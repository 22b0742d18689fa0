// src/morse/decoder.rs  —  Morse → text, pulse train → Morse
use crate::morse::error::Result;
use crate::morse::table::lookup_code;
use crate::morse::timing::{find_unit_length, Timing};

/// Three spaces between words, one between symbols
pub const WORD_SEP: &str = "   ";
pub const CHAR_SEP: &str = " ";

/// Decode dot/dash notation into upper-case text.
///
/// Unmapped symbols are dropped without a placeholder. Decoded words are
/// joined with a single space.
pub fn decode(morse: &str) -> String {
    morse
        .split(WORD_SEP)
        .map(|word| {
            word.split(CHAR_SEP)
                .filter_map(|code| {
                    let text = lookup_code(code);
                    if text.is_none() && !code.is_empty() {
                        log::warn!("[decoder] unmapped symbol '{}' dropped", code);
                    }
                    text
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a pulse train ('1' = key down, '0' = key up) into dot/dash notation.
///
/// Leading and trailing silence is ignored. The unit length is inferred from
/// the shortest run; substitution runs longest pattern first.
pub fn bits_to_morse(bits: &str) -> Result<String> {
    let bits = bits.trim_matches('0');
    let t = Timing::from_unit(find_unit_length(bits)?);
    log::debug!("[decoder] bits_to_morse unit={} len={}", t.unit, bits.len());

    let morse = bits
        .replace(&t.dash_bits(), "-")
        .replace(&t.dot_bits(), ".")
        .replace(&t.word_gap_bits(), WORD_SEP)
        .replace(&t.char_gap_bits(), CHAR_SEP)
        .replace(&t.elem_gap_bits(), "");
    Ok(morse)
}
