// RSA Key Generation
// Composes the prime sampler and the extended Euclid solver into key pairs

use num_bigint::BigUint;
use num_traits::One;

use super::arith::{extended_euclid, mod_inverse};
use super::error::Error;
use super::primality::PrimalityTest;
use super::prime::generate_large_prime_with;

/// Fixed, ordered candidate set for the public exponent: the first 25
/// primes, scanned in ascending order. The scan is deterministic, so e is
/// reproducible for a given totient.
pub const PUBLIC_EXPONENT_CANDIDATES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67,
    71, 73, 79, 83, 89, 97,
];

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
}

/// RSA Key Pair, immutable once constructed.
/// Invariants: n = p*q for distinct primes, gcd(e, phi) = 1, and
/// e*d = 1 (mod phi) with 0 <= d < phi for phi = (p-1)(q-1).
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Bit length of the shared modulus.
    pub fn bit_length(&self) -> u64 {
        self.public.n.bits()
    }

    /// Derive a key pair from two distinct primes.
    ///
    /// Deterministic given (p, q): the exponent scan and the modular
    /// inverse are exact computations. Fails with
    /// `NoSuitablePublicExponent` when none of the 25 candidates is
    /// coprime to (p-1)(q-1); that marks a degenerate totient and is
    /// surfaced to the caller, never papered over with fresh primes.
    pub fn from_primes(p: &BigUint, q: &BigUint) -> Result<KeyPair, Error> {
        let n = p * q;
        let phi = (p - BigUint::one()) * (q - BigUint::one());

        let e = select_public_exponent(&phi)?;
        // gcd(e, phi) == 1 held in the scan, so the inverse exists.
        let d = mod_inverse(&e, &phi).ok_or(Error::NoSuitablePublicExponent)?;

        Ok(KeyPair {
            public: PublicKey { n: n.clone(), e },
            private: PrivateKey { n, d },
        })
    }
}

/// First candidate from the fixed list coprime to phi. Candidates >= phi
/// are skipped: they could not serve as an exponent modulo phi, and the
/// solver's a > b precondition would not hold. The list is ascending, so
/// the first skip ends the scan.
fn select_public_exponent(phi: &BigUint) -> Result<BigUint, Error> {
    for &candidate in PUBLIC_EXPONENT_CANDIDATES.iter() {
        let e = BigUint::from(candidate);
        if &e >= phi {
            break;
        }
        let (_, _, d) = extended_euclid(phi, &e);
        if d.is_one() {
            return Ok(e);
        }
    }
    Err(Error::NoSuitablePublicExponent)
}

/// Generate a key pair from two fresh `bits`-bit primes, screening each
/// candidate with k Miller-Rabin witnesses.
pub fn generate_key_pair(bits: u64, k: u32) -> Result<KeyPair, Error> {
    generate_key_pair_with(bits, k, PrimalityTest::MillerRabin, None)
}

/// Key generation with an explicit primality-test variant and an optional
/// per-prime sampling cap. The cap also bounds the distinct-prime
/// resample loop, so an injected latency limit cannot be defeated by
/// repeated p == q collisions.
pub fn generate_key_pair_with(
    bits: u64,
    k: u32,
    test: PrimalityTest,
    max_attempts: Option<u64>,
) -> Result<KeyPair, Error> {
    // The only 2-bit candidate with the top bit forced is 3, so two
    // distinct 2-bit primes cannot exist and the resample loop below
    // could never finish.
    if bits < 3 {
        return Err(Error::InvalidBitLength(bits));
    }

    let p = generate_large_prime_with(bits, k, test, max_attempts)?;

    // Collision probability is about 2^-bits, so this resample loop all
    // but never runs more than once.
    let mut q = generate_large_prime_with(bits, k, test, max_attempts)?;
    let mut resamples = 0u64;
    while q == p {
        if let Some(cap) = max_attempts {
            if resamples >= cap {
                return Err(Error::SamplingExhausted {
                    attempts: resamples,
                });
            }
        }
        resamples += 1;
        q = generate_large_prime_with(bits, k, test, max_attempts)?;
    }

    KeyPair::from_primes(&p, &q)
}
