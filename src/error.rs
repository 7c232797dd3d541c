//! Error taxonomy shared by every sieve and query in the crate.

use thiserror::Error;

/// Errors raised by sieve construction and queries.
///
/// All three conditions are deterministic functions of caller-supplied
/// inputs: retrying an identical call fails identically. Recovery means
/// picking a representable index, avoiding domain-undefined inputs, or
/// widening the integer type / shrinking the limit.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A number lies outside the range the sieve was built for, or a
    /// construction limit cannot be represented as a storage index.
    #[error("the number exceeds the limit of the sieve")]
    OutOfRange,

    /// The operation is mathematically undefined for the given input,
    /// such as the smallest prime factor of 0, 1, or -1.
    #[error("the operation is undefined for this input")]
    Domain,

    /// The chosen integer width cannot represent the products needed to
    /// build a linear sieve at the requested limit. Use a larger integer
    /// type or a smaller limit.
    #[error("multiplication would overflow while sieving")]
    Overflow,
}
