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

//! Diceware passphrase generation.
//!
//! Five secure dice rolls pick each word from a 7776-entry wordlist. English
//! and Romanian lists are embedded; mixed mode picks a list per word.
//!
//! ```no_run
//! use diceware::Language;
//!
//! let passphrase = diceware::generate(6)?;
//! let romanian = diceware::generate_with_language_and_separator(6, Language::Romanian, "-")?;
//! println!("{} / {} ({:.1} bits)", *passphrase, *romanian, diceware::entropy(6));
//! # Ok::<(), diceware::DicewareError>(())
//! ```

pub mod dice;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod language;
pub mod wordlist;

pub use dice::{EntropySource, OsEntropy, RollCode};
pub use entropy::{bits_per_word, entropy};
pub use error::{DicewareError, Result};
pub use generator::{
    Diceware, Passphrase, capitalize, generate, generate_with_language,
    generate_with_language_and_separator, generate_with_rolls, generate_with_rolls_and_language,
    generate_with_rolls_language_and_separator, generate_with_separator,
};
pub use language::Language;
pub use wordlist::{
    WORDLIST_SIZE, Wordlist, WordlistStore, parse_wordlist, wordlist_size,
    wordlist_size_by_language,
};
