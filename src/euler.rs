//! Linear (Euler) sieve.
//!
//! Finds every prime under a limit and the smallest prime factor of every
//! number under the limit, in a single O(L) pass. Each composite is
//! written exactly once, through its smallest prime factor.

use num_traits::PrimInt;

use crate::cast;
use crate::error::Error;

/// Bit width of the internal multiplication domain.
const MULT_BITS: u32 = u64::BITS;

/// A bounded smallest-prime-factor table with the ascending prime list.
///
/// Immutable after construction; owns both arrays exclusively. Cloning
/// duplicates all storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EulerSieve<T> {
    limit: T,
    min_prime_factor: Vec<T>,
    primes: Vec<T>,
}

impl<T: PrimInt> EulerSieve<T> {
    /// Builds the sieve for all numbers in `[0, limit]` in linear time.
    ///
    /// Products are taken in `u64`, so the limit's bit width doubled must
    /// not exceed 64. The guard runs before any storage is allocated, so
    /// a failed construction leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if multiplication would overflow while
    /// sieving at this limit, and [`Error::OutOfRange`] if `limit` is
    /// negative or not representable as a storage index.
    pub fn new(limit: T) -> Result<Self, Error> {
        if limit < T::zero() {
            return Err(Error::OutOfRange);
        }
        let magnitude = cast::unsigned_abs(limit);
        let width = u128::BITS - magnitude.leading_zeros();
        if width * 2 > MULT_BITS {
            return Err(Error::Overflow);
        }

        // The guard caps the limit well below 2^32, so these cannot fail.
        let limit_u64 = u64::try_from(magnitude).map_err(|_| Error::OutOfRange)?;
        let size = usize::try_from(magnitude).map_err(|_| Error::OutOfRange)?;
        let to_t = |value: u64| -> T {
            cast::narrow(value).expect("values at or below the limit fit in T")
        };

        let mut min_prime_factor = vec![T::zero(); size + 1];
        let mut primes: Vec<T> = Vec::new();

        for n in 2..=limit_u64 {
            if min_prime_factor[n as usize] == T::zero() {
                let prime = to_t(n);
                primes.push(prime);
                min_prime_factor[n as usize] = prime;
            }
            // Extend by p * n for each prime p <= mpf(n). Stopping at
            // mpf(n) is what makes every composite get written once.
            let cap = min_prime_factor[n as usize];
            for &p in &primes {
                if p > cap {
                    break;
                }
                let product = to_u64(p) * n;
                if product > limit_u64 {
                    break;
                }
                min_prime_factor[product as usize] = p;
            }
        }

        Ok(Self {
            limit,
            min_prime_factor,
            primes,
        })
    }

    /// Returns the maximum number (inclusive) the sieve can answer for.
    #[must_use]
    pub fn limit(&self) -> T {
        self.limit
    }

    /// Returns every prime at or below the limit, in ascending order.
    #[must_use]
    pub fn primes(&self) -> &[T] {
        &self.primes
    }

    /// Returns the smallest prime factor of `number`.
    ///
    /// The sign of `number` is ignored; the magnitude is taken
    /// overflow-safely, so even a signed type's minimum is accepted.
    /// O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when the magnitude is 0 or 1 (no
    /// smallest prime factor exists) and [`Error::OutOfRange`] when the
    /// magnitude exceeds the limit.
    pub fn min_prime_factor(&self, number: T) -> Result<T, Error> {
        let magnitude = cast::unsigned_abs(number);
        if magnitude <= 1 {
            return Err(Error::Domain);
        }
        if magnitude > cast::unsigned_abs(self.limit) {
            return Err(Error::OutOfRange);
        }
        let index = usize::try_from(magnitude).map_err(|_| Error::OutOfRange)?;
        Ok(self.min_prime_factor[index])
    }
}

fn to_u64<T: PrimInt>(value: T) -> u64 {
    value
        .to_u64()
        .expect("sieved values fit in the multiplication domain")
}
