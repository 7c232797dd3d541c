//! Property-based tests spanning the sieves and enumerators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{coprime_pairs, is_prime, EulerSieve, Sieve};

    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    proptest! {
        // Two independent primality sources must agree.
        #[test]
        fn sieve_and_euler_agree(limit in 2u32..400) {
            let sieve = Sieve::new(limit).unwrap();
            let euler = EulerSieve::new(limit).unwrap();
            for n in 2..=limit {
                let by_table = sieve.is_prime(n).unwrap();
                let by_factor = euler.min_prime_factor(n).unwrap() == n;
                prop_assert_eq!(by_table, by_factor, "disagreement at {}", n);
            }
        }

        #[test]
        fn primes_are_strictly_ascending(limit in 0u32..400) {
            let euler = EulerSieve::new(limit).unwrap();
            prop_assert!(euler.primes().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn primes_are_the_self_factored_numbers(limit in 2u32..400) {
            let euler = EulerSieve::new(limit).unwrap();
            let self_factored: Vec<u32> = (2..=limit)
                .filter(|&n| euler.min_prime_factor(n) == Ok(n))
                .collect();
            prop_assert_eq!(euler.primes(), self_factored.as_slice());
        }

        #[test]
        fn min_prime_factor_is_the_least_divisor(limit in 2u32..400) {
            let euler = EulerSieve::new(limit).unwrap();
            for n in 2..=limit {
                let m = euler.min_prime_factor(n).unwrap();
                prop_assert_eq!(n % m, 0, "{} does not divide {}", m, n);
                prop_assert!((2..m).all(|d| n % d != 0), "{} has a divisor below {}", n, m);
            }
        }

        #[test]
        fn magnitude_decides_the_factor(n in -400i32..=400) {
            let euler = EulerSieve::new(400i32).unwrap();
            prop_assert_eq!(
                euler.min_prime_factor(n).ok(),
                euler.min_prime_factor(-n).ok()
            );
        }

        #[test]
        fn coprime_pairs_are_exactly_the_coprime_pairs(limit in 1u64..80) {
            let pairs = coprime_pairs(limit);

            for &(x, y) in &pairs {
                prop_assert!(y <= x && x <= limit, "({}, {}) out of range", x, y);
                prop_assert_eq!(gcd(x, y), 1, "({}, {}) not coprime", x, y);
            }

            let mut deduped = pairs.clone();
            deduped.sort_unstable();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), pairs.len(), "a pair repeats");

            let expected = (0..=limit)
                .flat_map(|x| (0..=x).map(move |y| (x, y)))
                .filter(|&(x, y)| gcd(x, y) == 1)
                .count();
            prop_assert_eq!(pairs.len(), expected);
        }

        #[test]
        fn trial_division_matches_the_sieve(number in 0u16..10000) {
            let sieve = Sieve::new(9999u16).unwrap();
            prop_assert_eq!(is_prime(number), sieve.is_prime(number).unwrap());
        }
    }
}
