// src/morse/table.rs  —  Symbol table + deterministic inverse
use std::collections::HashMap;
use std::sync::OnceLock;

/// ITU Morse code table: dot/dash sequence → decoded text.
/// Order matters for the inverse: the first entry for a character wins.
pub static SYMBOLS: &[(&str, &str)] = &[
    (".-",      "A"), ("-...",    "B"), ("-.-.",    "C"), ("-..",     "D"),
    (".",       "E"), ("..-.",    "F"), ("--.",     "G"), ("....",    "H"),
    ("..",      "I"), (".---",    "J"), ("-.-",     "K"), (".-..",    "L"),
    ("--",      "M"), ("-.",      "N"), ("---",     "O"), (".--.",    "P"),
    ("--.-",    "Q"), (".-.",     "R"), ("...",     "S"), ("-",       "T"),
    ("..-",     "U"), ("...-",    "V"), (".--",     "W"), ("-..-",    "X"),
    ("-.--",    "Y"), ("--..",    "Z"),
    ("-----",   "0"), (".----",   "1"), ("..---",   "2"), ("...--",   "3"),
    ("....-",   "4"), (".....",   "5"), ("-....",   "6"), ("--...",   "7"),
    ("---..",   "8"), ("----.",   "9"),
    (".-.-.-",  "."), ("--..--",  ","), ("..--..",  "?"), (".----.",  "'"),
    ("-.-.--",  "!"), ("-..-.",   "/"), ("-.--.",   "("), ("-.--.-",  ")"),
    (".-...",   "&"), ("---...",  ":"), ("-.-.-.",  ";"), ("-...-",   "="),
    (".-.-.",   "+"), ("-....-",  "-"), ("..--.-",  "_"), (".-..-.",  "\""),
    ("...-..-", "$"), (".--.-.",  "@"),
    // Prosign, decoded as a whole word
    ("...---...", "SOS"),
];

fn decode_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYMBOLS.iter().copied().collect())
}

fn encode_table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = HashMap::new();
        for &(code, text) in SYMBOLS {
            // Multi-character entries (SOS) are never produced by per-char encoding
            let mut chars = text.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                m.entry(ch).or_insert(code);
            }
        }
        m
    })
}

/// Dot/dash sequence → text, `None` for unmapped sequences
pub fn lookup_code(code: &str) -> Option<&'static str> {
    decode_table().get(code).copied()
}

/// Character → dot/dash sequence. Expects an already upper-cased char.
pub fn lookup_char(ch: char) -> Option<&'static str> {
    encode_table().get(&ch).copied()
}
