// Prime Sampler
// Streams random n-bit odd candidates through the primality oracle

use num_bigint::{BigUint, RandBigInt};
use rand::rngs::ThreadRng;
use rand::thread_rng;
use tracing::debug;

use super::error::Error;
use super::primality::PrimalityTest;

/// Infinite lazy stream of random candidates of exactly `bits` bits.
///
/// The top bit is forced so no candidate comes out shorter than requested,
/// and the low bit is forced so even candidates never waste an oracle
/// round. Exposed as an iterator rather than a bare loop so callers can
/// layer their own caps or cancellation on top.
pub struct Candidates {
    bits: u64,
    rng: ThreadRng,
}

impl Candidates {
    pub fn new(bits: u64) -> Self {
        assert!(bits >= 2, "candidate bit length must be at least 2");
        Self {
            bits,
            rng: thread_rng(),
        }
    }
}

impl Iterator for Candidates {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let mut candidate = self.rng.gen_biguint(self.bits);
        candidate.set_bit(self.bits - 1, true);
        candidate.set_bit(0, true);
        Some(candidate)
    }
}

/// Generate a probable prime of exactly `bits` bits, screening each
/// candidate with k Miller-Rabin witnesses.
pub fn generate_large_prime(bits: u64, k: u32) -> Result<BigUint, Error> {
    generate_large_prime_with(bits, k, PrimalityTest::MillerRabin, None)
}

/// Prime sampling with an explicit test variant and an optional attempt cap.
///
/// With `max_attempts = None` the search loops until a candidate passes.
/// Termination is probabilistic, not guaranteed: prime density among n-bit
/// odd integers is Theta(1/n), so the expected attempt count is O(bits),
/// but no hard bound exists. Callers wanting bounded latency inject a cap
/// and handle `Error::SamplingExhausted`.
pub fn generate_large_prime_with(
    bits: u64,
    k: u32,
    test: PrimalityTest,
    max_attempts: Option<u64>,
) -> Result<BigUint, Error> {
    // A 1-bit candidate with the top and low bit forced is always 1, so
    // the loop below could never terminate.
    if bits < 2 {
        return Err(Error::InvalidBitLength(bits));
    }

    let mut attempts = 0u64;
    for candidate in Candidates::new(bits) {
        if let Some(cap) = max_attempts {
            if attempts >= cap {
                return Err(Error::SamplingExhausted { attempts });
            }
        }
        attempts += 1;

        if test.is_probably_prime(&candidate, k) {
            debug!(bits, attempts, "prime candidate accepted");
            return Ok(candidate);
        }
    }

    unreachable!("candidate stream is infinite")
}
