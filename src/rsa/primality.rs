// Primality Oracle
// Fermat and Miller-Rabin probabilistic tests over the mod_exp engine

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

use super::arith::mod_exp;

/// Which probabilistic test the prime sampler runs against candidates.
///
/// Miller-Rabin is the default: its false-positive probability is at most
/// 4^-k regardless of the input. Fermat is cheaper per round but has no
/// usable bound against Carmichael numbers, which is acceptable only for
/// randomly sampled candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimalityTest {
    Fermat,
    #[default]
    MillerRabin,
}

impl PrimalityTest {
    pub fn is_probably_prime(&self, n: &BigUint, k: u32) -> bool {
        match self {
            PrimalityTest::Fermat => fermat(n, k),
            PrimalityTest::MillerRabin => miller_rabin(n, k),
        }
    }
}

/// Miller-Rabin with k random witnesses, the tight-bound default oracle.
pub fn is_probably_prime(n: &BigUint, k: u32) -> bool {
    miller_rabin(n, k)
}

/// Fermat test: k rounds of checking a^(n-1) mod n == 1 for a random
/// witness a in [2, n-1].
///
/// Known blind spot, kept as documented behavior: Carmichael numbers pass
/// for every witness coprime to n, so no error bound holds against
/// adversarial inputs.
pub fn fermat(n: &BigUint, k: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u8);

    if n <= &one {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n_minus_1 = n - &one;
    let mut rng = thread_rng();

    for _ in 0..k {
        let a = rng.gen_biguint_range(&two, n);
        if mod_exp(&a, &n_minus_1, n) != one {
            return false;
        }
    }

    true
}

/// Miller-Rabin test: factor n-1 = d * 2^r with d odd, then for each of k
/// random witnesses check the square chain a^d, a^(2d), ..., a^(n-1).
/// False-positive probability is at most 4^-k.
pub fn miller_rabin(n: &BigUint, k: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u8);

    if n <= &one {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = d * 2^r with d odd
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let mut rng = thread_rng();

    'witness: for _ in 0..k {
        let a = rng.gen_biguint_range(&two, n);
        let mut x = mod_exp(&a, &d, n);

        if x == one || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..r.saturating_sub(1) {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        // No square in the chain hit n-1: composite, reject immediately.
        return false;
    }

    true
}
