// RSA Block Decryption
// Inverts the block transform and validates the ciphertext framing

use std::fs;
use std::path::Path;

use num_bigint::BigUint;

use super::arith::mod_exp;
use super::encrypt::{block_sizes, to_fixed_width, LENGTH_HEADER_BYTES};
use super::error::Error;
use super::keygen::PrivateKey;

/// Decrypt a ciphertext produced by `encrypt_bytes` with the matching
/// private key.
pub fn decrypt_bytes(ciphertext: &[u8], key: &PrivateKey) -> Result<Vec<u8>, Error> {
    let (block_in, block_out) = block_sizes(&key.n)?;

    if ciphertext.len() < LENGTH_HEADER_BYTES {
        return Err(Error::MissingLengthHeader {
            expected: LENGTH_HEADER_BYTES,
        });
    }
    let (header, body) = ciphertext.split_at(LENGTH_HEADER_BYTES);

    let mut len_bytes = [0u8; LENGTH_HEADER_BYTES];
    len_bytes.copy_from_slice(header);
    let claimed = u64::from_be_bytes(len_bytes);

    if body.len() % block_out != 0 {
        return Err(Error::TruncatedCiphertext {
            len: body.len(),
            block: block_out,
        });
    }

    let blocks = body.len() / block_out;
    let capacity = (blocks * block_in) as u64;
    // Every block carries at least one plaintext byte, so claimed must
    // land in ((blocks-1) * block_in, blocks * block_in].
    if claimed > capacity {
        return Err(Error::LengthHeaderMismatch { claimed, capacity });
    }
    if blocks > 0 && claimed as usize <= (blocks - 1) * block_in {
        return Err(Error::LengthHeaderMismatch { claimed, capacity });
    }

    let mut plaintext = Vec::with_capacity(claimed as usize);
    for (i, block) in body.chunks(block_out).enumerate() {
        let c = BigUint::from_bytes_be(block);
        let m = mod_exp(&c, &key.d, &key.n);
        // The final block is rendered at its true width: padding it to
        // block_in would left-shift zeros in front of the tail bytes.
        let width = if i + 1 == blocks {
            claimed as usize - (blocks - 1) * block_in
        } else {
            block_in
        };
        // Every honest plaintext block fits its width; a wider value
        // means the wrong key or corrupted data.
        if m.bits() > (width as u64) * 8 {
            return Err(Error::BlockOutOfRange);
        }
        plaintext.extend_from_slice(&to_fixed_width(&m, width));
    }

    Ok(plaintext)
}

/// Decrypt a whole file.
pub fn decrypt_file(input: &Path, output: &Path, key: &PrivateKey) -> Result<(), Error> {
    let ciphertext = fs::read(input)?;
    let plaintext = decrypt_bytes(&ciphertext, key)?;
    fs::write(output, plaintext)?;
    Ok(())
}
