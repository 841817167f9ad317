// Modular Arithmetic Core
// Square-and-multiply exponentiation and the extended Euclidean algorithm

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Modular exponentiation: base^exp mod modulus
/// Iterative square-and-multiply: O(log exp) modular multiplications.
/// This is the hot path -- every primality witness and every encrypted
/// block runs through it, so the exponent is halved each step instead of
/// recursing (recursion depth would equal the exponent's bit length).
///
/// A zero modulus is a programming-contract violation and fails fast.
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "mod_exp: modulus must be positive");
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (x, y, d) such that a*x + b*y = d = gcd(a, b), assuming
/// a > b >= 0. The Bezout coefficients can go negative, so they come
/// back signed; the gcd never does.
///
/// Iterative for the same reason as mod_exp: the recursive formulation
/// nests one frame per division step, which for worst-case inputs grows
/// with the operand bit length.
pub fn extended_euclid(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigUint) {
    assert!(a > b, "extended_euclid: requires a > b");

    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    let d = old_r.to_biguint().unwrap_or_default();
    (old_x, old_y, d)
}

/// Modular inverse: a^(-1) mod m, for m > a.
/// Takes the second Bezout coefficient of extended_euclid(m, a) modulo m,
/// adding m once if negative so the result lands in [0, m).
/// Returns None when gcd(m, a) != 1 and no inverse exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let (_, y, d) = extended_euclid(m, a);
    if !d.is_one() {
        return None;
    }

    let m_signed = BigInt::from(m.clone());
    let mut inv = y % &m_signed;
    if inv < BigInt::zero() {
        inv += &m_signed;
    }

    inv.to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_mod_exp_small() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_exp(&big(3), &big(5), &big(7)), big(5));
        // 2^10 mod 1000 = 24
        assert_eq!(mod_exp(&big(2), &big(10), &big(1000)), big(24));
    }

    #[test]
    fn test_mod_exp_zero_exponent() {
        assert_eq!(mod_exp(&big(12345), &big(0), &big(7)), big(1));
        // 1 mod 1 = 0
        assert_eq!(mod_exp(&big(12345), &big(0), &big(1)), big(0));
    }

    #[test]
    fn test_mod_exp_matches_reference() {
        // Reference: plain repeated multiplication mod n, independent of
        // the square-and-multiply ladder.
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let x = big(rng.gen_range(0..1_000_000));
            let y = rng.gen_range(0..10_000u64);
            let n = big(rng.gen_range(1..u64::MAX));

            let mut expected = &big(1) % &n;
            for _ in 0..y {
                expected = (&expected * &x) % &n;
            }
            assert_eq!(mod_exp(&x, &big(y), &n), expected);
        }
    }

    #[test]
    #[should_panic(expected = "modulus must be positive")]
    fn test_mod_exp_zero_modulus_panics() {
        mod_exp(&big(2), &big(3), &big(0));
    }

    #[test]
    fn test_extended_euclid_worked_example() {
        // gcd(240, 46) = 2
        let (x, y, d) = extended_euclid(&big(240), &big(46));
        assert_eq!(d, big(2));
        assert_eq!(
            BigInt::from(240) * &x + BigInt::from(46) * &y,
            BigInt::from(2)
        );
    }

    #[test]
    fn test_extended_euclid_base_case() {
        let (x, y, d) = extended_euclid(&big(17), &big(0));
        assert_eq!((x, y, d), (BigInt::from(1), BigInt::from(0), big(17)));
    }

    #[test]
    #[should_panic(expected = "requires a > b")]
    fn test_extended_euclid_precondition_panics() {
        extended_euclid(&big(46), &big(240));
    }

    #[test]
    fn test_extended_euclid_bezout_identity() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen_range(2..u32::MAX as u64);
            let b = rng.gen_range(0..a);
            let (x, y, d) = extended_euclid(&big(a), &big(b));

            assert_eq!(
                BigInt::from(a) * &x + BigInt::from(b) * &y,
                BigInt::from(d.clone())
            );
            // d divides both inputs
            assert!((&big(a) % &d).is_zero());
            if b > 0 {
                assert!((&big(b) % &d).is_zero());
            }
        }
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 = 1 mod 7
        assert_eq!(mod_inverse(&big(3), &big(7)), Some(big(5)));
        // 7 * 1783 = 12481 = 4 * 3120 + 1
        assert_eq!(mod_inverse(&big(7), &big(3120)), Some(big(1783)));
        // gcd(6, 3120) = 6, no inverse
        assert_eq!(mod_inverse(&big(6), &big(3120)), None);
    }

    #[test]
    fn test_mod_inverse_round_trip() {
        let m = big(1_000_003); // prime modulus, every 0 < a < m invertible
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let a = big(rng.gen_range(1..1_000_003));
            let inv = mod_inverse(&a, &m).unwrap();
            assert!(inv < m);
            assert_eq!((&a * &inv) % &m, big(1));
        }
    }
}
