// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod arith;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod primality;
pub mod prime;

pub use arith::{extended_euclid, mod_exp, mod_inverse};
pub use decrypt::{decrypt_bytes, decrypt_file};
pub use encrypt::{encrypt_bytes, encrypt_file};
pub use error::Error;
pub use keygen::{
    generate_key_pair, generate_key_pair_with, KeyPair, PrivateKey, PublicKey,
    PUBLIC_EXPONENT_CANDIDATES,
};
pub use primality::{fermat, is_probably_prime, miller_rabin, PrimalityTest};
pub use prime::{generate_large_prime, generate_large_prime_with, Candidates};
