//! Coprime pair enumeration.
//!
//! Walks the ternary coprime-generating tree rooted at (1, 1): from any
//! pair (x, y) with x > y >= 1, the children (2x-y, x), (2x+y, x) and
//! (x+2y, y) are again coprime, and every coprime pair with x > y >= 1
//! is reached by exactly one path.

use num_traits::PrimInt;

use crate::cast;

/// Generates every coprime pair (x, y) with `0 <= y <= x <= limit`.
///
/// Output order is the discovery order of the tree traversal, with the
/// two boundary pairs (1, 0) and (1, 1) appended last; it is not sorted
/// by value. A non-positive `limit` yields an empty sequence.
///
/// The work list doubles as the output: a child whose first component
/// exceeds the limit is a dead branch, since every descendant's first
/// component is strictly larger still.
#[must_use]
pub fn coprime_pairs<T: PrimInt>(limit: T) -> Vec<(T, T)> {
    if limit <= T::zero() {
        return Vec::new();
    }
    // The tree walk runs in u64. A limit wider than that is unbuildable
    // in memory anyway, so it clamps rather than fails.
    let limit = limit.to_u64().unwrap_or(u64::MAX);

    let mut pairs: Vec<(u64, u64)> = Vec::new();
    admit(&mut pairs, limit, Some(2), 1);
    admit(&mut pairs, limit, Some(3), 1);

    // Index-based: the list grows while earlier entries are still being
    // read, and the cursor never revisits a processed pair.
    let mut visited = 0;
    while visited < pairs.len() {
        let (x, y) = pairs[visited];
        visited += 1;
        admit(&mut pairs, limit, x.checked_mul(2).map(|v| v - y), x);
        admit(&mut pairs, limit, x.checked_mul(2).and_then(|v| v.checked_add(y)), x);
        admit(&mut pairs, limit, y.checked_mul(2).and_then(|v| v.checked_add(x)), y);
    }

    // The boundary pairs sit outside the tree's reach.
    admit(&mut pairs, limit, Some(1), 0);
    admit(&mut pairs, limit, Some(1), 1);

    pairs
        .into_iter()
        .map(|(x, y)| (narrow_pair(x), narrow_pair(y)))
        .collect()
}

/// Appends (x, y) if x was computed without overflow and is under the
/// limit. An overflowed x certainly exceeds it.
fn admit(pairs: &mut Vec<(u64, u64)>, limit: u64, x: Option<u64>, y: u64) {
    if let Some(x) = x {
        if x <= limit {
            pairs.push((x, y));
        }
    }
}

fn narrow_pair<T: PrimInt>(value: u64) -> T {
    cast::narrow(value).expect("pair components never exceed the limit")
}
