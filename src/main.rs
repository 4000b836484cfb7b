// This file is part of diceware.
//
// Copyright (c) 2025  The diceware authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use diceware::{Diceware, Language};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "diceware",
    version,
    about = "Cryptographically secure Diceware passphrase generator",
    after_help = "Recommended word counts:\n  \
        4 words  - ~52 bits  - low-value accounts\n  \
        6 words  - ~78 bits  - most accounts\n  \
        8 words  - ~103 bits - high security accounts\n  \
        12 words - ~155 bits - cryptocurrency wallets"
)]
struct Cli {
    /// Number of words in the passphrase
    #[arg(
        short,
        long,
        env = "DICEWARE_WORDS",
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    words: u8,

    /// Separator between words; empty joins them in CamelCase
    #[arg(
        short,
        long,
        env = "DICEWARE_SEPARATOR",
        default_value = "",
        allow_hyphen_values = true
    )]
    separator: String,

    /// Wordlist language: en, ro or mixed
    #[arg(short, long, env = "DICEWARE_LANG", default_value = "en")]
    lang: Language,

    /// Show the dice rolls behind each word
    #[arg(short, long)]
    rolls: bool,

    /// Print only the passphrase
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let separator = ui::normalize_separator(&cli.separator)?;
    let word_count = usize::from(cli.words);

    let dice = Diceware::shared();
    let store = dice.store();
    tracing::debug!(
        english = store.size(Language::English),
        romanian = store.size(Language::Romanian),
        "Wordlists loaded"
    );
    if !store.english().is_complete() || !store.romanian().is_complete() {
        tracing::warn!("Embedded wordlist is missing entries; some rolls will fail");
    }

    tracing::info!(
        words = word_count,
        language = %cli.lang,
        rolls = cli.rolls,
        "Generating passphrase"
    );

    let (passphrase, rolls) = if cli.rolls {
        let (passphrase, rolls) = dice
            .generate_with_rolls_language_and_separator(word_count, cli.lang, &separator)
            .context("Failed to generate passphrase")?;
        (passphrase, Some(rolls))
    } else {
        let passphrase = dice
            .generate_with_language_and_separator(word_count, cli.lang, &separator)
            .context("Failed to generate passphrase")?;
        (passphrase, None)
    };

    tracing::info!("Passphrase generated");

    let output_config = ui::OutputConfig {
        word_count,
        language: cli.lang,
        separator,
        wordlist_size: store.size(cli.lang),
        entropy: diceware::entropy(word_count),
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    ui::display_output(&passphrase, rolls.as_deref(), &output_config, &options);

    Ok(())
}
