// rsakit - RSA built from first principles
// Modular exponentiation, extended Euclid, probabilistic primality
// testing, prime sampling, key generation, and block file encryption.

pub mod rsa;
pub mod util;

pub use rsa::{
    generate_key_pair, generate_large_prime, is_probably_prime, Error, KeyPair,
    PrimalityTest, PrivateKey, PublicKey,
};
