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

use zeroize::Zeroizing;

use crate::dice::{EntropySource, OsEntropy, RollCode, coin_flip, roll_code};
use crate::error::{DicewareError, Result};
use crate::language::Language;
use crate::wordlist::WordlistStore;

/// A generated passphrase, wiped from memory on drop.
pub type Passphrase = Zeroizing<String>;

/// Passphrase generator over a shared wordlist store.
///
/// Holds the store by reference and draws every die from `E`. Generation
/// never mutates the store, so one `Diceware` can serve any number of threads
/// when its entropy source is `Sync`.
#[derive(Debug, Clone, Copy)]
pub struct Diceware<'a, E = OsEntropy> {
    store: &'a WordlistStore<'a>,
    entropy: E,
}

impl Diceware<'static, OsEntropy> {
    /// The embedded wordlists with the OS random source.
    pub fn shared() -> Self {
        Self::new(WordlistStore::shared(), OsEntropy)
    }
}

impl<'a, E: EntropySource> Diceware<'a, E> {
    pub fn new(store: &'a WordlistStore<'a>, entropy: E) -> Self {
        Self { store, entropy }
    }

    pub fn store(&self) -> &'a WordlistStore<'a> {
        self.store
    }

    /// Looks `code` up for `language` and reports which wordlist answered.
    ///
    /// In mixed mode a fresh coin flip picks the list for this word alone.
    pub fn resolve(&self, code: &RollCode, language: Language) -> Result<(Language, &'a str)> {
        let (source, list) = match language {
            Language::English => (Language::English, self.store.english()),
            Language::Romanian => (Language::Romanian, self.store.romanian()),
            Language::Mixed if coin_flip(&self.entropy)? => {
                (Language::Romanian, self.store.romanian())
            }
            Language::Mixed => (Language::English, self.store.english()),
        };

        list.get(code)
            .map(|word| (source, word))
            .ok_or(DicewareError::WordNotFound(*code))
    }

    /// The capitalized word for `code`.
    pub fn select_word(&self, code: &RollCode, language: Language) -> Result<String> {
        let (_, word) = self.resolve(code, language)?;
        Ok(capitalize(word))
    }

    fn draw(
        &self,
        word_count: usize,
        language: Language,
    ) -> Result<(Zeroizing<Vec<String>>, Vec<RollCode>)> {
        if word_count < 1 {
            return Err(DicewareError::InvalidWordCount(word_count));
        }

        let mut words: Zeroizing<Vec<String>> = Zeroizing::new(Vec::with_capacity(word_count));
        let mut rolls: Zeroizing<Vec<RollCode>> = Zeroizing::new(Vec::with_capacity(word_count));

        for _ in 0..word_count {
            let code = roll_code(&self.entropy)?;
            words.push(self.select_word(&code, language)?);
            rolls.push(code);
        }

        Ok((words, rolls.to_vec()))
    }

    pub fn generate(&self, word_count: usize) -> Result<Passphrase> {
        self.generate_with_language_and_separator(word_count, Language::English, "")
    }

    pub fn generate_with_separator(
        &self,
        word_count: usize,
        separator: &str,
    ) -> Result<Passphrase> {
        self.generate_with_language_and_separator(word_count, Language::English, separator)
    }

    pub fn generate_with_language(
        &self,
        word_count: usize,
        language: Language,
    ) -> Result<Passphrase> {
        self.generate_with_language_and_separator(word_count, language, "")
    }

    /// Rolls `word_count` words and joins them with `separator`.
    ///
    /// Fails with [`DicewareError::InvalidWordCount`] before touching the random
    /// source when `word_count` is zero. Any failure while drawing a word aborts
    /// the whole passphrase.
    pub fn generate_with_language_and_separator(
        &self,
        word_count: usize,
        language: Language,
        separator: &str,
    ) -> Result<Passphrase> {
        let (words, _) = self.draw(word_count, language)?;
        Ok(Zeroizing::new(words.join(separator)))
    }

    pub fn generate_with_rolls(&self, word_count: usize) -> Result<(Passphrase, Vec<RollCode>)> {
        self.generate_with_rolls_language_and_separator(word_count, Language::English, "")
    }

    pub fn generate_with_rolls_and_language(
        &self,
        word_count: usize,
        language: Language,
    ) -> Result<(Passphrase, Vec<RollCode>)> {
        self.generate_with_rolls_language_and_separator(word_count, language, "")
    }

    /// Like [`Self::generate_with_language_and_separator`], also returning the
    /// roll behind each word in order.
    pub fn generate_with_rolls_language_and_separator(
        &self,
        word_count: usize,
        language: Language,
        separator: &str,
    ) -> Result<(Passphrase, Vec<RollCode>)> {
        let (words, rolls) = self.draw(word_count, language)?;
        Ok((Zeroizing::new(words.join(separator)), rolls))
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English passphrase in CamelCase, e.g. `ColtDefaultArousalThimble`.
pub fn generate(word_count: usize) -> Result<Passphrase> {
    Diceware::shared().generate(word_count)
}

pub fn generate_with_separator(word_count: usize, separator: &str) -> Result<Passphrase> {
    Diceware::shared().generate_with_separator(word_count, separator)
}

pub fn generate_with_language(word_count: usize, language: Language) -> Result<Passphrase> {
    Diceware::shared().generate_with_language(word_count, language)
}

pub fn generate_with_language_and_separator(
    word_count: usize,
    language: Language,
    separator: &str,
) -> Result<Passphrase> {
    Diceware::shared().generate_with_language_and_separator(word_count, language, separator)
}

pub fn generate_with_rolls(word_count: usize) -> Result<(Passphrase, Vec<RollCode>)> {
    Diceware::shared().generate_with_rolls(word_count)
}

pub fn generate_with_rolls_and_language(
    word_count: usize,
    language: Language,
) -> Result<(Passphrase, Vec<RollCode>)> {
    Diceware::shared().generate_with_rolls_and_language(word_count, language)
}

pub fn generate_with_rolls_language_and_separator(
    word_count: usize,
    language: Language,
    separator: &str,
) -> Result<(Passphrase, Vec<RollCode>)> {
    Diceware::shared().generate_with_rolls_language_and_separator(word_count, language, separator)
}
