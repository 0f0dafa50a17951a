//! The working set of codes still consistent with every hint so far

use super::code::validate_length;
use super::{Code, Hint, check_similarity};
use crate::error::Result;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Enumerate every `length`-digit code with pairwise-distinct digits
///
/// Walks 0..10^length, zero-pads each number and keeps those without a
/// repeated digit. The result is in ascending numeric order.
///
/// # Errors
/// Returns `Error::UnsupportedLength` unless `1 <= length <= 10`.
///
/// # Examples
/// ```
/// use bulls_cows::core::generate_candidates;
///
/// let codes = generate_candidates(2).unwrap();
/// assert_eq!(codes.len(), 90);
/// assert_eq!(codes[0].to_string(), "01");
/// ```
pub fn generate_candidates(length: usize) -> Result<Vec<Code>> {
    validate_length(length)?;

    let upper = 10u64.pow(length as u32);
    let codes: Vec<Code> = (0..upper)
        .filter_map(|value| Code::from_number(value, length))
        .collect();

    debug_assert_eq!(codes.len(), permutation_count(length));
    Ok(codes)
}

/// Number of distinct-digit codes of `length` digits: 10!/(10-length)!
#[must_use]
pub fn permutation_count(length: usize) -> usize {
    (0..length.min(10)).map(|i| 10 - i).product()
}

/// Candidate codes for one session
///
/// Created once with the full space for a code length, then narrowed in place
/// by [`CandidateSpace::retain_consistent`]. Codes are never added back.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    length: usize,
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Build the full candidate space for `length`-digit codes
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` unless `1 <= length <= 10`.
    pub fn generate(length: usize) -> Result<Self> {
        Ok(Self {
            length,
            codes: generate_candidates(length)?,
        })
    }

    /// Code length shared by every member
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.length
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True once every candidate has been eliminated
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Remaining candidates in ascending order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Membership test by binary search; filtering keeps the codes sorted
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// The answer, once exactly one candidate is left
    #[must_use]
    pub fn single(&self) -> Option<&Code> {
        match self.codes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Pick a candidate uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Code> {
        self.codes.choose(rng)
    }

    /// Drop every candidate that would not have produced `hint` for `guess`
    ///
    /// Returns how many candidates were removed.
    pub fn retain_consistent(&mut self, guess: &Code, hint: Hint) -> usize {
        let before = self.codes.len();
        self.codes
            .retain(|candidate| check_similarity(guess, candidate, hint));
        before - self.codes.len()
    }
}
