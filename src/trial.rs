//! Bounded trial-division primality test.
//!
//! Meant for one-off checks on small numbers. Repeated queries or wider
//! ranges belong in [`Sieve`](crate::Sieve) or
//! [`EulerSieve`](crate::EulerSieve) instead.

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
}

/// Integer widths narrow enough for trial division to stay cheap.
///
/// Implemented for `i8`, `u8`, `i16` and `u16` only; trial division
/// performs poorly beyond 16 value bits, so wider types do not compile
/// and must go through a sieve.
pub trait TrialWidth: sealed::Sealed + Copy {
    /// Widens into the `i32` working domain.
    fn widen(self) -> i32;
}

impl TrialWidth for i8 {
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl TrialWidth for u8 {
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl TrialWidth for i16 {
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl TrialWidth for u16 {
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

/// Tests whether `number` is prime by trial division. O(√n).
#[must_use]
pub fn is_prime<T: TrialWidth>(number: T) -> bool {
    is_prime_widened(number.widen())
}

// `i * i` stays below 2^17 for 16-bit inputs, so i32 never overflows.
const fn is_prime_widened(number: i32) -> bool {
    if number < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= number {
        if number % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
