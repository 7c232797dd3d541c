//! # cribrum
//!
//! Bounded number-theory primitives for algorithmic code that makes fast
//! repeated primality and factorization queries over a range known in
//! advance:
//!
//! - [`Sieve`] — bit-packed Eratosthenes primality table, O(1) queries
//! - [`EulerSieve`] — linear sieve with smallest-prime-factor queries
//!   and the ascending prime list
//! - [`coprime_pairs`] — every coprime pair under a limit, generated by
//!   tree expansion
//! - [`is_prime`] — trial division for one-off checks on small numbers
//!
//! Every structure is generic over the caller's integer type via
//! `num_traits::PrimInt`; internal arithmetic runs in a widened 64-bit
//! domain so bounded multiplications never overflow. Sieves are
//! immutable once built and safe to share across threads.
//!
//! ## Quick start
//!
//! ```rust
//! use cribrum::{EulerSieve, Sieve};
//!
//! let sieve = Sieve::new(100u32)?;
//! assert!(sieve.is_prime(97)?);
//!
//! let euler = EulerSieve::new(100u32)?;
//! assert_eq!(euler.min_prime_factor(84)?, 2);
//! assert_eq!(euler.primes().first(), Some(&2));
//! # Ok::<(), cribrum::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cast;
pub mod coprime;
pub mod error;
pub mod euler;
pub mod sieve;
pub mod trial;

#[cfg(test)]
mod proptests;

pub use coprime::coprime_pairs;
pub use error::Error;
pub use euler::EulerSieve;
pub use sieve::Sieve;
pub use trial::{is_prime, TrialWidth};
