// src/i18n/mod.rs  —  Output labels, English + Turkish
use serde::{Deserialize, Serialize};

/// Label language, shared by the CLI (`--lang`) and the TOML file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Tr,
}

/// Every labelled line the program prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    BitsToMorse,
    MorseToText,
    TextToMorse,
    MorseToBits,
    UnitLength,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
        }
    }

    pub fn label(self, label: Label) -> &'static str {
        use Label::*;
        match self {
            Language::En => match label {
                BitsToMorse => "Bits to Morse:",
                MorseToText => "Morse to Text:",
                TextToMorse => "Text to Morse:",
                MorseToBits => "Morse to Bits:",
                UnitLength  => "Unit length:",
            },
            Language::Tr => match label {
                BitsToMorse => "Bitlerden Mors'a:",
                MorseToText => "Mors'tan Metne:",
                TextToMorse => "Metinden Mors'a:",
                MorseToBits => "Mors'tan Bitlere:",
                UnitLength  => "Birim uzunluğu:",
            },
        }
    }

    /// `"<label> <value>"`, one output line
    pub fn line(self, label: Label, value: &str) -> String {
        format!("{} {}", self.label(label), value)
    }
}
