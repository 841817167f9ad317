// RSA Error Taxonomy
// Typed failures surfaced by key generation, sampling, and block encryption

use std::io;

use thiserror::Error;

/// Errors surfaced by the RSA core and its file-level collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Bit-length request the sampler or key generator cannot satisfy:
    /// primes need at least 2 bits, key pairs two distinct primes of at
    /// least 3 bits.
    #[error("invalid bit length: {0}")]
    InvalidBitLength(u64),

    /// None of the fixed 25 exponent candidates is coprime to the totient.
    /// Fatal for that key-generation attempt; signals a degenerate modulus
    /// and is surfaced rather than retried with fresh primes.
    #[error("no suitable public exponent: none of the first 25 primes is coprime to the totient")]
    NoSuitablePublicExponent,

    /// A caller-injected attempt cap ran out before a candidate passed.
    #[error("prime sampling exhausted after {attempts} attempts")]
    SamplingExhausted { attempts: u64 },

    /// Modulus too narrow to carry even a one-byte plaintext block.
    #[error("modulus too small for block encryption: {bits} bits")]
    ModulusTooSmall { bits: u64 },

    /// Ciphertext shorter than its fixed-size length header.
    #[error("ciphertext shorter than the {expected}-byte length header")]
    MissingLengthHeader { expected: usize },

    /// Ciphertext body is not a whole number of blocks.
    #[error("truncated ciphertext: {len} bytes is not a multiple of the {block}-byte block size")]
    TruncatedCiphertext { len: usize, block: usize },

    /// Declared plaintext length inconsistent with the block structure.
    #[error("length header claims {claimed} bytes, inconsistent with the {capacity}-byte block capacity")]
    LengthHeaderMismatch { claimed: u64, capacity: u64 },

    /// A decrypted block value does not fit a plaintext block. Wrong key
    /// or corrupted ciphertext.
    #[error("decrypted block out of range: wrong key or corrupt ciphertext")]
    BlockOutOfRange,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
