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

//! Error kinds surfaced by passphrase generation.

use thiserror::Error;

use crate::dice::RollCode;

/// Errors produced by the generation engine.
///
/// Every error is returned to the immediate caller. Nothing is retried and no
/// partial passphrase is ever handed out alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DicewareError {
    /// The requested word count was below one.
    #[error("word count must be at least 1, got {0}")]
    InvalidWordCount(usize),

    /// The secure random source could not supply entropy.
    #[error("secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    /// A rolled code has no entry in the active wordlist.
    #[error("no word found for dice roll: {0}")]
    WordNotFound(RollCode),

    /// A language selector outside English, Romanian and mixed.
    #[error("unsupported language \"{0}\" (expected en, ro or mixed)")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, DicewareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            DicewareError::InvalidWordCount(0).to_string(),
            "word count must be at least 1, got 0"
        );

        let code: RollCode = "16253".parse().unwrap();
        assert_eq!(
            DicewareError::WordNotFound(code).to_string(),
            "no word found for dice roll: 16253"
        );

        assert!(DicewareError::UnsupportedLanguage("klingon".into())
            .to_string()
            .contains("\"klingon\""));
    }
}
