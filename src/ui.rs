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

use anyhow::Result;
use console::Style;
use diceware::{Language, RollCode};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 64.0;
pub const PARANOID_ENTROPY: f64 = 100.0;

pub const MIN_SAFE_WORD_COUNT: usize = 6;

pub struct OutputConfig {
    pub word_count: usize,
    pub language: Language,
    pub separator: String,
    pub wordlist_size: usize,
    pub entropy: f64,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

pub fn strength_label(entropy: f64) -> &'static str {
    if entropy >= PARANOID_ENTROPY {
        "Paranoid"
    } else if entropy >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

/// NFC-normalizes a separator, keeping surrounding spaces. Control
/// characters are rejected since they would not survive copy and paste.
pub fn normalize_separator(separator: &str) -> Result<String> {
    let normalized: String = separator.nfc().collect();

    let control_chars: Vec<usize> = normalized
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .map(|(pos, _)| pos)
        .collect();

    if !control_chars.is_empty() {
        anyhow::bail!(
            "Separator contains {} control character(s) at position(s): {}",
            control_chars.len(),
            control_chars
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(normalized)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, secure) {
        (false, _) => Style::new(),
        (true, true) => Style::new().for_stderr().green(),
        (true, false) => Style::new().for_stderr().yellow(),
    }
}

pub fn display_output(
    output: &Zeroizing<String>,
    rolls: Option<&[RollCode]>,
    config: &OutputConfig,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", &**output);
        if let Some(rolls) = rolls {
            println!("{}", format_rolls(rolls));
        }
        return;
    }

    println!("Out[0]:\n{}\n", &**output);

    if let Some(rolls) = rolls {
        display_rolls(rolls);
    }

    display_settings(config);
    display_stats(output.chars().count(), config, options);
}

fn format_rolls(rolls: &[RollCode]) -> String {
    rolls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_rolls(rolls: &[RollCode]) {
    println!("Rolls:");
    for (i, roll) in rolls.iter().enumerate() {
        let prefix = if i == rolls.len() - 1 { "└─" } else { "├─" };
        println!("  {} {:>2}  {}", prefix, i + 1, roll);
    }
    println!();
}

fn display_settings(config: &OutputConfig) {
    eprintln!("Settings:");
    eprintln!("  ├─ Dice       5 × d6 per word (OS CSPRNG)");
    eprintln!("  ├─ Sampling   Unbiased rejection");
    eprintln!("  ├─ Language   {}", config.language.display_name());

    if config.separator.is_empty() {
        eprintln!("  ├─ Separator  none (CamelCase)");
    } else {
        eprintln!("  ├─ Separator  {:?}", config.separator);
    }

    eprintln!(
        "  └─ Output     {} {}",
        config.word_count,
        plural(config.word_count, "word", "words")
    );
    eprintln!();
}

fn display_stats(length: usize, config: &OutputConfig, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let entropy_secure = config.entropy >= MIN_SAFE_ENTROPY;
    let entropy_style = status_style(entropy_secure, options);
    let entropy_icon = if entropy_secure { check_ok } else { check_warn };

    let length_secure = config.word_count >= MIN_SAFE_WORD_COUNT;
    let length_style = status_style(length_secure, options);
    let length_icon = if length_secure { check_ok } else { check_warn };

    let label = strength_label(config.entropy);

    eprintln!("Stats:");
    eprintln!(
        "  ├─ Entropy    {} {} bits ({})",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(format!("{:.1}", config.entropy)),
        entropy_style.apply_to(label)
    );
    eprintln!(
        "  ├─ Length     {} {}",
        length,
        plural(length, "char", "chars")
    );
    eprintln!(
        "  ├─ Words      {} {} {}",
        length_style.apply_to(format!("[{}]", length_icon)),
        length_style.apply_to(config.word_count),
        plural(config.word_count, "word", "words")
    );
    eprintln!(
        "  └─ Wordlist   {} ({} words)",
        config.language.display_name(),
        config.wordlist_size
    );

    eprintln!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(label)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_strength_label() {
        assert_eq!(strength_label(diceware::entropy(4)), "Weak");
        assert_eq!(strength_label(diceware::entropy(6)), "Strong");
        assert_eq!(strength_label(diceware::entropy(8)), "Paranoid");
    }

    #[test]
    fn test_normalize_separator_nfc() {
        let nfc = "é";
        let nfd = "e\u{0301}";

        assert_ne!(nfc.as_bytes(), nfd.as_bytes());
        assert_eq!(
            normalize_separator(nfc).unwrap(),
            normalize_separator(nfd).unwrap()
        );
    }

    #[test]
    fn test_normalize_separator_keeps_spaces() {
        let cases = [("", ""), (" ", " "), (" | ", " | "), ("-", "-"), ("·", "·")];

        for (input, expected) in cases {
            assert_eq!(normalize_separator(input).unwrap(), expected);
        }
    }

    #[test]
    fn test_normalize_separator_rejects_control_characters() {
        for input in ["\t", "a\nb", "\u{7}", "-\u{1b}[31m"] {
            let err = normalize_separator(input).unwrap_err().to_string();
            assert!(err.contains("control character"), "{:?}: {}", input, err);
        }

        let err = normalize_separator("-\t-\n").unwrap_err().to_string();
        assert!(err.contains("2 control character(s) at position(s): 1, 3"));
    }

    #[test]
    fn test_format_rolls() {
        let rolls: Vec<RollCode> = ["16253", "42511"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(format_rolls(&rolls), "16253 42511");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(7, "word", "words"), "words");
    }
}
