// Key File Persistence
// Each key file holds two decimal integers separated by a line break:
// the modulus, then the exponent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use thiserror::Error;

use crate::rsa::keygen::{PrivateKey, PublicKey};

/// Errors raised while reading or writing key files.
#[derive(Debug, Error)]
pub enum KeyFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("key file is missing the {0} line")]
    MissingLine(&'static str),

    #[error("key file holds a malformed integer: {0}")]
    MalformedInteger(#[from] num_bigint::ParseBigIntError),
}

/// `<stem>.public.txt`
pub fn public_path(stem: &str) -> PathBuf {
    PathBuf::from(format!("{}.public.txt", stem))
}

/// `<stem>.private.txt`
pub fn private_path(stem: &str) -> PathBuf {
    PathBuf::from(format!("{}.private.txt", stem))
}

pub fn write_public(path: &Path, key: &PublicKey) -> Result<(), KeyFileError> {
    fs::write(path, format!("{}\n{}", key.n, key.e))?;
    Ok(())
}

pub fn write_private(path: &Path, key: &PrivateKey) -> Result<(), KeyFileError> {
    fs::write(path, format!("{}\n{}", key.n, key.d))?;
    Ok(())
}

pub fn read_public(path: &Path) -> Result<PublicKey, KeyFileError> {
    let (n, e) = read_two_integers(path)?;
    Ok(PublicKey { n, e })
}

pub fn read_private(path: &Path) -> Result<PrivateKey, KeyFileError> {
    let (n, d) = read_two_integers(path)?;
    Ok(PrivateKey { n, d })
}

fn read_two_integers(path: &Path) -> Result<(BigUint, BigUint), KeyFileError> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();
    let modulus = lines.next().ok_or(KeyFileError::MissingLine("modulus"))?;
    let exponent = lines.next().ok_or(KeyFileError::MissingLine("exponent"))?;
    Ok((modulus.trim().parse()?, exponent.trim().parse()?))
}
