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

//! Secure dice rolls.
//!
//! A die is a uniform draw from `1..=6` obtained by rejection sampling bytes
//! from an [`EntropySource`]. Five dice make a [`RollCode`], the lookup key of
//! a Diceware wordlist.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{DicewareError, Result};

pub const DICE_PER_CODE: usize = 5;
pub const DIE_FACES: u8 = 6;

// Largest multiple of six below 256.
const REJECTION_THRESHOLD: u8 = 252;

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `dest` entirely or fails with [`DicewareError::RandomnessUnavailable`].
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| DicewareError::RandomnessUnavailable(format!("CSPRNG fill failed: {e}")))
    }
}

/// Five die outcomes, stored as the ASCII digits `'1'..='6'`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Zeroize)]
pub struct RollCode([u8; DICE_PER_CODE]);

impl RollCode {
    fn from_faces(faces: [u8; DICE_PER_CODE]) -> Self {
        Self(faces.map(|face| b'0' + face))
    }

    /// Die outcomes in roll order, each in `1..=6`.
    pub fn faces(&self) -> [u8; DICE_PER_CODE] {
        self.0.map(|digit| digit - b'0')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("roll code must be exactly five digits between 1 and 6")]
pub struct ParseRollCodeError;

impl FromStr for RollCode {
    type Err = ParseRollCodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits: [u8; DICE_PER_CODE] = s.as_bytes().try_into().map_err(|_| ParseRollCodeError)?;

        if digits.iter().all(|d| (b'1'..=b'6').contains(d)) {
            Ok(Self(digits))
        } else {
            Err(ParseRollCodeError)
        }
    }
}

impl fmt::Display for RollCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{}", digit as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RollCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RollCode(\"{self}\")")
    }
}

/// Rolls a single fair die.
pub fn roll_die<E: EntropySource + ?Sized>(source: &E) -> Result<u8> {
    let mut byte = Zeroizing::new([0u8; 1]);

    loop {
        source.fill(&mut byte[..])?;

        if byte[0] < REJECTION_THRESHOLD {
            return Ok(byte[0] % DIE_FACES + 1);
        }
    }
}

/// Rolls five dice into a wordlist key.
pub fn roll_code<E: EntropySource + ?Sized>(source: &E) -> Result<RollCode> {
    let mut faces = [0u8; DICE_PER_CODE];
    for face in faces.iter_mut() {
        *face = roll_die(source)?;
    }
    Ok(RollCode::from_faces(faces))
}

/// One unbiased random bit.
pub fn coin_flip<E: EntropySource + ?Sized>(source: &E) -> Result<bool> {
    let mut byte = Zeroizing::new([0u8; 1]);
    source.fill(&mut byte[..])?;
    Ok(byte[0] & 1 == 1)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Always fails, like an exhausted or broken OS source.
    pub struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn fill(&self, _dest: &mut [u8]) -> Result<()> {
            Err(DicewareError::RandomnessUnavailable("source offline".into()))
        }
    }

    /// Replays a fixed byte sequence, then fails.
    pub struct ScriptedEntropy(RefCell<VecDeque<u8>>);

    impl ScriptedEntropy {
        pub fn new(bytes: &[u8]) -> Self {
            Self(RefCell::new(bytes.iter().copied().collect()))
        }
    }

    impl EntropySource for ScriptedEntropy {
        fn fill(&self, dest: &mut [u8]) -> Result<()> {
            let mut queue = self.0.borrow_mut();
            for slot in dest.iter_mut() {
                *slot = queue.pop_front().ok_or_else(|| {
                    DicewareError::RandomnessUnavailable("script exhausted".into())
                })?;
            }
            Ok(())
        }
    }

    /// Counts fill calls made against the OS source.
    #[derive(Default)]
    pub struct CountingEntropy(AtomicUsize);

    impl CountingEntropy {
        pub fn draws(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl EntropySource for CountingEntropy {
        fn fill(&self, dest: &mut [u8]) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            OsEntropy.fill(dest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_roll_die_range() {
        for _ in 0..100 {
            let face = roll_die(&OsEntropy).unwrap();
            assert!((1..=6).contains(&face), "die rolled {}", face);
        }
    }

    #[test]
    fn test_roll_code_format() {
        for _ in 0..100 {
            let code = roll_code(&OsEntropy).unwrap().to_string();
            assert_eq!(code.len(), 5, "roll {} has length {}", code, code.len());
            assert!(
                code.chars().all(|c| ('1'..='6').contains(&c)),
                "roll {} contains an invalid digit",
                code
            );
        }
    }

    #[test]
    fn test_randomness_distribution() {
        let mut counts = [0usize; 6];

        for _ in 0..6000 {
            let face = roll_die(&OsEntropy).unwrap();
            counts[usize::from(face - 1)] += 1;
        }

        for (i, count) in counts.iter().enumerate() {
            assert!(
                (700..=1300).contains(count),
                "face {} appeared {} times (expected ~1000)",
                i + 1,
                count
            );
        }
    }

    #[test]
    fn test_rejection_sampling_skips_biased_bytes() {
        // 252..=255 would favour faces 1 to 4.
        let source = ScriptedEntropy::new(&[255, 252, 5]);
        assert_eq!(roll_die(&source).unwrap(), 6);

        let source = ScriptedEntropy::new(&[0, 251]);
        assert_eq!(roll_die(&source).unwrap(), 1);
        assert_eq!(roll_die(&source).unwrap(), 6);
    }

    #[test]
    fn test_roll_code_uses_five_dice_in_order() {
        let source = ScriptedEntropy::new(&[0, 1, 2, 3, 4]);
        let code = roll_code(&source).unwrap();
        assert_eq!(code.to_string(), "12345");
        assert_eq!(code.faces(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failing_source_propagates() {
        assert!(matches!(
            roll_die(&FailingEntropy),
            Err(DicewareError::RandomnessUnavailable(_))
        ));
        assert!(matches!(
            roll_code(&FailingEntropy),
            Err(DicewareError::RandomnessUnavailable(_))
        ));
        assert!(matches!(
            coin_flip(&FailingEntropy),
            Err(DicewareError::RandomnessUnavailable(_))
        ));
    }

    #[test]
    fn test_source_failure_mid_code_aborts() {
        let source = ScriptedEntropy::new(&[0, 1, 2]);
        assert!(roll_code(&source).is_err());
    }

    #[test]
    fn test_coin_flip_reads_low_bit() {
        let source = ScriptedEntropy::new(&[2, 7]);
        assert!(!coin_flip(&source).unwrap());
        assert!(coin_flip(&source).unwrap());
    }

    #[test]
    fn test_roll_code_parse() {
        let code: RollCode = "66666".parse().unwrap();
        assert_eq!(code.faces(), [6; 5]);
        assert_eq!(format!("{:?}", code), "RollCode(\"66666\")");

        for bad in ["", "1111", "111111", "11117", "01111", "1a111", "１1111"] {
            assert_eq!(bad.parse::<RollCode>(), Err(ParseRollCodeError), "{:?}", bad);
        }
    }
}
