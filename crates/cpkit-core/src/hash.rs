//! Digest helpers for identifiers and opaque tokens.
//!
//! Everything here is pure and synchronous: the same input and algorithm
//! always produce the same lowercase-hex output, so digests are safe to use
//! as stable identifiers across versions and hosts.

use md5::Md5;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::str::FromStr;

/// Digest algorithm selector.
///
/// `Fnv64a` is a fast non-cryptographic fingerprint for shortening
/// non-adversarial identifiers (store object names, endpoint strings). It
/// must never stand in for the cryptographic selectors when hashing secrets
/// or attacker-controlled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Fnv64a,
}

impl HashAlgorithm {
    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Fnv64a => "fnv64a",
        }
    }

    /// Length of the hex digest this selector produces.
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
            HashAlgorithm::Fnv64a => 16,
        }
    }
}

/// Selector named an algorithm outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported hash algorithm {0:?} (expected md5, sha1, sha256, sha512 or fnv64a)")]
pub struct UnsupportedAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "fnv64a" => Ok(HashAlgorithm::Fnv64a),
            other => Err(UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = UnsupportedAlgorithm;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

fn hex_digest<D: Digest>(input: &str) -> String {
    hex::encode(D::digest(input.as_bytes()))
}

/// Compute the digest of `input`'s UTF-8 bytes under the given algorithm,
/// rendered as fixed-width lowercase hex.
pub fn digest(input: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(input),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(input),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(input),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(input),
        HashAlgorithm::Fnv64a => format!("{:016x}", fnv64a(input)),
    }
}

/// Digest with the algorithm given by name (config files, CLI flags).
/// Unknown names fail with [`UnsupportedAlgorithm`] instead of falling back
/// to a default.
pub fn digest_named(input: &str, algorithm: &str) -> Result<String, UnsupportedAlgorithm> {
    Ok(digest(input, algorithm.parse()?))
}

const FNV64_OFFSET: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a hash of `input`'s UTF-8 bytes.
///
/// Non-cryptographic; use only for non-adversarial identifier shortening.
pub fn fnv64a(input: &str) -> u64 {
    let mut hash = FNV64_OFFSET;
    for b in input.as_bytes() {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

/// Secure random source was exhausted or inaccessible.
#[derive(Debug, thiserror::Error)]
#[error("secure random source unavailable: {0}")]
pub struct EntropyUnavailable(#[source] pub rand::Error);

/// Generate a random 16-byte token as 32 lowercase hex characters.
///
/// Draws from the OS CSPRNG. Entropy failure is surfaced to the caller and
/// never papered over with a weaker source.
pub fn random_token() -> Result<String, EntropyUnavailable> {
    let mut buf = [0u8; 16];
    OsRng.try_fill_bytes(&mut buf).map_err(EntropyUnavailable)?;
    Ok(hex::encode(buf))
}
