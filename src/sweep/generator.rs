//! Fixed-length letter combination generator

use super::ALPHABET;

/// Lexicographic enumeration of every lowercase string of a given length.
///
/// Works as an odometer over [`ALPHABET`]: the last position turns fastest
/// and carries into the one before it, so no recursion is involved and
/// memory stays at one digit per position regardless of length.
#[derive(Debug, Clone)]
pub struct CombinationGenerator {
    digits: Vec<usize>,
    emitted: u64,
    exhausted: bool,
}

impl CombinationGenerator {
    /// Create a new generator for combinations of the given length.
    ///
    /// A zero length yields nothing.
    pub fn new(length: usize) -> Self {
        Self {
            digits: vec![0; length],
            emitted: 0,
            exhausted: length == 0,
        }
    }

    /// Length of every emitted combination
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Total number of combinations, `None` if it overflows `u64`
    pub fn total(&self) -> Option<u64> {
        total_combinations(self.length())
    }

    /// Combinations emitted so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn current(&self) -> String {
        self.digits.iter().map(|&d| ALPHABET[d]).collect()
    }

    /// Advance the odometer; marks the generator exhausted on wrap-around.
    fn advance(&mut self) {
        for position in (0..self.digits.len()).rev() {
            if self.digits[position] + 1 < ALPHABET.len() {
                self.digits[position] += 1;
                return;
            }
            self.digits[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CombinationGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = self.current();
        self.emitted += 1;
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self
            .total()
            .and_then(|total| usize::try_from(total - self.emitted).ok())
        {
            Some(remaining) => (remaining, Some(remaining)),
            // Uncountable: no lower bound, so `collect` does not preallocate
            None => (0, None),
        }
    }
}

/// `26^length`, `None` on overflow
pub fn total_combinations(length: usize) -> Option<u64> {
    let exponent = u32::try_from(length).ok()?;
    (ALPHABET.len() as u64).checked_pow(exponent)
}

/// Every lowercase string of `length` letters, in lexicographic order.
pub fn generate(length: usize) -> CombinationGenerator {
    CombinationGenerator::new(length)
}
