//! Numeric conversion helpers for generic integer code.
//!
//! Sieves accept any primitive integer type and do their internal
//! arithmetic in a widened domain. The helpers here move values between
//! those worlds without ever overflowing or silently truncating.

use num_traits::{NumCast, PrimInt, ToPrimitive};

/// Converts a value to another integer type, exactly.
///
/// Returns `None` when the value is not representable in the destination
/// type, including negative values narrowed to unsigned destinations.
#[must_use]
pub fn narrow<S: ToPrimitive, D: NumCast>(value: S) -> Option<D> {
    D::from(value)
}

/// Returns the magnitude of any primitive integer as a `u128`.
///
/// Correct even at a signed type's minimum, where naive negation
/// overflows: negative values widen to `i128` before taking the
/// magnitude, and no primitive integer is wider than 128 bits.
#[must_use]
pub fn unsigned_abs<T: PrimInt>(value: T) -> u128 {
    if value >= T::zero() {
        value
            .to_u128()
            .expect("non-negative primitive integers fit in u128")
    } else {
        value
            .to_i128()
            .expect("negative primitive integers fit in i128")
            .unsigned_abs()
    }
}
