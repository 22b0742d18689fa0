// src/main.rs  —  morse-bits  entry point
mod config;
mod demo;
mod i18n;
mod morse;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, Cli, Command};
use i18n::Label;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = config::config_path(&cli);
        config::write_default_config(&path)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    log::debug!("[main] labels: {}", cfg.language.name());

    match cli.command.clone().unwrap_or(Command::Demo) {
        Command::Demo => {
            for line in demo::run_demo(&cfg)? {
                println!("{line}");
            }
        }
        Command::Decode { morse } => println!("{}", morse::decode(&morse)),
        Command::Encode { text }  => println!("{}", morse::encode(&text)),
        Command::BitsToMorse { bits } => {
            let m = morse::bits_to_morse(&bits)
                .with_context(|| format!("Converting bits {:?}", bits))?;
            println!("{m}");
        }
        Command::MorseToBits { morse, unit } => {
            println!("{}", morse::morse_to_bits_with_unit(&morse, usize::from(unit)));
        }
        Command::Unit { bits } => {
            let unit = morse::find_unit_length(bits.trim_matches('0'))
                .with_context(|| format!("Measuring bits {:?}", bits))?;
            println!("{}", cfg.language.line(Label::UnitLength, &unit.to_string()));
        }
    }

    Ok(())
}
