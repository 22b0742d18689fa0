// src/config.rs  —  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::i18n::Language;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  morse-bits --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

/// "HEY JUDE" keyed at two bits per unit, with leading and trailing silence
pub const DEMO_BITS: &str = "1100110011001100000011000000111111001100111111001111110000000000000011001111110011111100111111000000110011001111110000001111110011001100000011";
pub const DEMO_TEXT: &str = "HEY JUDE";

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug)]
#[command(
    name        = "morse-bits",
    about       = "Morse code converter: text, dot/dash notation, pulse trains",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/morse-bits/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output label language
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the built-in conversion demo (default)
    Demo,
    /// Morse (single space between symbols, three between words) → text
    Decode {
        #[arg(allow_hyphen_values = true)]
        morse: String,
    },
    /// Text → Morse
    Encode {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Pulse train of '0'/'1' → Morse, unit length inferred
    BitsToMorse { bits: String },
    /// Morse → pulse train
    MorseToBits {
        #[arg(allow_hyphen_values = true)]
        morse: String,
        /// Bits per unit (1-65535)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        unit: u16,
    },
    /// Print the inferred unit length of a pulse train
    Unit { bits: String },
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub general: GeneralCfg,
    #[serde(default)]
    pub demo:    DemoCfg,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralCfg {
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoCfg {
    pub bits: Option<String>,
    pub text: Option<String>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub language:  Language,
    /// Pulse train decoded by the demo
    pub demo_bits: String,
    /// Text encoded by the demo
    pub demo_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language:  Language::default(),
            demo_bits: DEMO_BITS.into(),
            demo_text: DEMO_TEXT.into(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the TOML file (if any), then CLI flags
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = config_path(cli);
        let mut cfg = Self::default();

        match read_file(&path)? {
            Some(fc) => cfg.merge_file(fc),
            None if cli.config.is_some() => eprintln!(
                "Config {} does not exist, using defaults (create it with --write-config)",
                path.display()
            ),
            None => log::debug!("[config] no file at {}", path.display()),
        }

        if let Some(lang) = cli.lang { cfg.language = lang; }
        Ok(cfg)
    }

    fn merge_file(&mut self, fc: FileConfig) {
        self.language = fc.general.language.unwrap_or(self.language);
        if let Some(bits) = fc.demo.bits { self.demo_bits = bits; }
        if let Some(text) = fc.demo.text { self.demo_text = text; }
    }
}

/// Write the embedded example to `path`, creating parent directories
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Creating {}", dir.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("Writing {}", path.display()))
}

/// `None` when the file does not exist
fn read_file(path: &Path) -> Result<Option<FileConfig>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Reading {}", path.display())),
    };
    let fc = parse_file(&raw).with_context(|| format!("Parsing {}", path.display()))?;
    log::debug!("[config] loaded {}", path.display());
    Ok(Some(fc))
}

fn parse_file(raw: &str) -> Result<FileConfig> {
    Ok(toml::from_str(raw)?)
}

pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| config_home().join("morse-bits").join("config.toml"))
}

fn config_home() -> PathBuf {
    ["XDG_CONFIG_HOME", "APPDATA"]
        .into_iter()
        .find_map(std::env::var_os)
        .map(PathBuf::from)
        .or_else(|| {
            ["HOME", "USERPROFILE"]
                .into_iter()
                .find_map(std::env::var_os)
                .map(|home| PathBuf::from(home).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"))
}
