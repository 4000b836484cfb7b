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

use std::fmt;
use std::str::FromStr;

use crate::error::DicewareError;

/// Which wordlist supplies the words of a passphrase.
///
/// `Mixed` has no wordlist of its own: every word independently flips a coin
/// between the English and Romanian lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Romanian,
    Mixed,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Romanian, Language::Mixed];

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Romanian => "Romanian",
            Language::Mixed => "Mixed (English + Romanian)",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Romanian => "ro",
            Language::Mixed => "mixed",
        }
    }
}

impl FromStr for Language {
    type Err = DicewareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ro" | "romanian" => Ok(Language::Romanian),
            "mixed" | "mix" => Ok(Language::Mixed),
            _ => Err(DicewareError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
