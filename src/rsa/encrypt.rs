// RSA Block Encryption
// Raw RSA applied per fixed-size block; no padding scheme by design

use std::fs;
use std::path::Path;

use num_bigint::BigUint;

use super::arith::mod_exp;
use super::error::Error;
use super::keygen::PublicKey;

/// Bytes reserved at the front of a ciphertext for the big-endian
/// plaintext length, so trailing-block length and leading zero bytes
/// survive the integer round trip.
pub const LENGTH_HEADER_BYTES: usize = 8;

/// Block geometry for a modulus: plaintext blocks one byte short of the
/// modulus width (so every block value stays below n), ciphertext blocks
/// exactly the modulus width.
pub fn block_sizes(n: &BigUint) -> Result<(usize, usize), Error> {
    let key_bytes = ((n.bits() + 7) / 8) as usize;
    if key_bytes < 2 {
        return Err(Error::ModulusTooSmall { bits: n.bits() });
    }
    Ok((key_bytes - 1, key_bytes))
}

/// Encrypt bytes with a public key.
/// Output layout: 8-byte big-endian plaintext length, then one
/// fixed-width ciphertext block per plaintext chunk.
pub fn encrypt_bytes(plaintext: &[u8], key: &PublicKey) -> Result<Vec<u8>, Error> {
    let (block_in, block_out) = block_sizes(&key.n)?;

    let blocks = (plaintext.len() + block_in - 1) / block_in;
    let mut out = Vec::with_capacity(LENGTH_HEADER_BYTES + blocks * block_out);
    out.extend_from_slice(&(plaintext.len() as u64).to_be_bytes());

    for chunk in plaintext.chunks(block_in) {
        let m = BigUint::from_bytes_be(chunk);
        let c = mod_exp(&m, &key.e, &key.n);
        out.extend_from_slice(&to_fixed_width(&c, block_out));
    }

    Ok(out)
}

/// Left-pad a block value with zero bytes to the fixed block width.
/// Callers guarantee the value fits the width.
pub(crate) fn to_fixed_width(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut block = vec![0u8; width];
    let start = width - bytes.len();
    block[start..].copy_from_slice(&bytes);
    block
}

/// Encrypt a whole file.
pub fn encrypt_file(input: &Path, output: &Path, key: &PublicKey) -> Result<(), Error> {
    let plaintext = fs::read(input)?;
    let ciphertext = encrypt_bytes(&plaintext, key)?;
    fs::write(output, ciphertext)?;
    Ok(())
}
