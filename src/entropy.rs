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

use crate::wordlist::WORDLIST_SIZE;

/// Bits contributed by one word drawn uniformly from 7776, about 12.925.
pub fn bits_per_word() -> f64 {
    (WORDLIST_SIZE as f64).log2()
}

/// Entropy in bits of a `word_count`-word passphrase.
///
/// Depends only on the word count; the language a passphrase was built from
/// does not enter into it.
pub fn entropy(word_count: usize) -> f64 {
    word_count as f64 * bits_per_word()
}
