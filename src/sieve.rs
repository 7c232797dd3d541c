//! Sieve of Eratosthenes.
//!
//! Decides primality for every number up to a fixed (inclusive) limit,
//! trading an O(L log log L) build for O(1) queries afterwards.

use bitvec::vec::BitVec;
use num_traits::PrimInt;

use crate::cast;
use crate::error::Error;

/// A bounded primality table built by Eratosthenes elimination.
///
/// Flags are bit-packed, so a built sieve occupies O(L) bits. The sieve
/// is immutable after construction and owns its storage exclusively;
/// cloning duplicates the whole table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sieve<T> {
    limit: T,
    flags: BitVec,
}

impl<T: PrimInt> Sieve<T> {
    /// Builds the sieve for all numbers in `[0, limit]`.
    ///
    /// The elimination loop counts in `u64`, so `i * i` cannot overflow
    /// for any limit that fits in memory, regardless of `T`'s width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `limit` is negative or not
    /// representable as a storage index.
    pub fn new(limit: T) -> Result<Self, Error> {
        let size: usize = cast::narrow(limit).ok_or(Error::OutOfRange)?;
        let len = size.checked_add(1).ok_or(Error::OutOfRange)?;
        let limit_u64: u64 = cast::narrow(limit).ok_or(Error::OutOfRange)?;

        let mut flags = BitVec::repeat(true, len);
        flags.set(0, false);
        if size >= 1 {
            flags.set(1, false);
        }

        let mut i = 2u64;
        while i * i <= limit_u64 {
            if flags[i as usize] {
                // Smaller multiples were cleared by smaller prime factors.
                let mut j = i * i;
                while j <= limit_u64 {
                    flags.set(j as usize, false);
                    j += i;
                }
            }
            i += 1;
        }

        Ok(Self { limit, flags })
    }

    /// Returns the maximum number (inclusive) the sieve can answer for.
    #[must_use]
    pub fn limit(&self) -> T {
        self.limit
    }

    /// Returns whether `number` is prime.
    ///
    /// Negative numbers are never prime. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `number` exceeds the limit.
    pub fn is_prime(&self, number: T) -> Result<bool, Error> {
        if number < T::zero() {
            return Ok(false);
        }
        if number > self.limit {
            return Err(Error::OutOfRange);
        }
        let index: usize = cast::narrow(number).ok_or(Error::OutOfRange)?;
        Ok(self.flags[index])
    }
}
