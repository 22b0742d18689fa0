// src/demo.rs  —  Fixed conversion walk-through printed at startup
use crate::config::AppConfig;
use crate::i18n::Label;
use crate::morse;
use anyhow::{Context, Result};

/// Run every conversion once and return the labelled output lines:
/// bits → Morse, Morse → text, text → Morse, Morse → bits, and the
/// decode of the encoded text.
pub fn run_demo(cfg: &AppConfig) -> Result<Vec<String>> {
    let lang = cfg.language;

    let morse = morse::bits_to_morse(&cfg.demo_bits)
        .with_context(|| format!("Decoding demo bits {:?}", cfg.demo_bits))?;
    let morse_from_text = morse::encode(&cfg.demo_text);

    Ok(vec![
        lang.line(Label::BitsToMorse, &morse),
        lang.line(Label::MorseToText, &morse::decode(&morse)),
        lang.line(Label::TextToMorse, &morse_from_text),
        lang.line(Label::MorseToBits, &morse::morse_to_bits(&morse_from_text)),
        lang.line(Label::MorseToText, &morse::decode(&morse_from_text)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn default_demo_output() {
        let lines = run_demo(&AppConfig::default()).unwrap();
        assert_eq!(lines, vec![
            "Bits to Morse: .... . -.--   .--- ..- -.. .".to_string(),
            "Morse to Text: HEY JUDE".to_string(),
            "Text to Morse: .... . -.--     .--- ..- -.. .".to_string(),
            format!(
                "Morse to Bits: {}",
                "10101010001000111010111011100000000000001011101110111000101011100011101010001"
            ),
            "Morse to Text: HEY JUDE".to_string(),
        ]);
    }

    #[test]
    fn turkish_labels() {
        let cfg = AppConfig { language: Language::Tr, ..AppConfig::default() };
        let lines = run_demo(&cfg).unwrap();
        assert!(lines[0].starts_with("Bitlerden Mors'a: "));
        assert!(lines[4].starts_with("Mors'tan Metne: "));
    }

    #[test]
    fn silent_demo_bits_fail() {
        let cfg = AppConfig { demo_bits: "0000".into(), ..AppConfig::default() };
        assert!(run_demo(&cfg).is_err());
    }
}
