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

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::dice::RollCode;
use crate::language::Language;

/// Number of five-dice codes, 6^5.
pub const WORDLIST_SIZE: usize = 7776;

const ENGLISH_DATA: &str = include_str!("../assets/english_wordlist.txt");
const ROMANIAN_DATA: &str = include_str!("../assets/romanian_wordlist.txt");

#[cfg(test)]
const ENGLISH_SHA256: &str = "b4abfd3d5ca473c1e6d19a595b5faf7afa5e5b97d9c36c3ed5d1353df0db3697";
#[cfg(test)]
const ROMANIAN_SHA256: &str = "8f2d7194849a011f2f11040bd5ebdf1543739f0054adfff82c7088fad3583631";

static SHARED_STORE: OnceLock<WordlistStore<'static>> = OnceLock::new();

/// Roll code to word mapping for a single language.
#[derive(Debug, Clone, Default)]
pub struct Wordlist<'a> {
    entries: HashMap<RollCode, &'a str>,
}

impl<'a> Wordlist<'a> {
    /// Parses `<code><whitespace><word>` lines.
    ///
    /// Blank lines, lines without exactly two fields and lines whose first
    /// field is not a roll code are skipped. A repeated code keeps its last word.
    pub fn parse(data: &'a str) -> Self {
        let entries = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(code), Some(word), None) => Some((code.parse().ok()?, word)),
                    _ => None,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, code: &RollCode) -> Option<&'a str> {
        self.entries.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every one of the 7776 codes has a word.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == WORDLIST_SIZE
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.values().copied()
    }
}

pub fn parse_wordlist(data: &str) -> Wordlist<'_> {
    Wordlist::parse(data)
}

/// The English and Romanian wordlists, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct WordlistStore<'a> {
    english: Wordlist<'a>,
    romanian: Wordlist<'a>,
}

impl<'a> WordlistStore<'a> {
    pub fn new(english: Wordlist<'a>, romanian: Wordlist<'a>) -> Self {
        Self { english, romanian }
    }

    pub fn english(&self) -> &Wordlist<'a> {
        &self.english
    }

    pub fn romanian(&self) -> &Wordlist<'a> {
        &self.romanian
    }

    /// Words available to `language`; mixed mode draws from both lists.
    pub fn size(&self, language: Language) -> usize {
        match language {
            Language::English => self.english.len(),
            Language::Romanian => self.romanian.len(),
            Language::Mixed => self.english.len() + self.romanian.len(),
        }
    }
}

impl WordlistStore<'static> {
    /// Parses the wordlists bundled into the binary.
    pub fn embedded() -> Self {
        Self::new(Wordlist::parse(ENGLISH_DATA), Wordlist::parse(ROMANIAN_DATA))
    }

    /// Process-wide embedded store, parsed on first access.
    pub fn shared() -> &'static WordlistStore<'static> {
        SHARED_STORE.get_or_init(Self::embedded)
    }
}

/// Size of the English wordlist.
pub fn wordlist_size() -> usize {
    wordlist_size_by_language(Language::English)
}

pub fn wordlist_size_by_language(language: Language) -> usize {
    WordlistStore::shared().size(language)
}
