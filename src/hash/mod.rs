//! Hash function primitives for key derivation and address checksums.
//!
//! Provides BLAKE2b-256 (junction chain codes, hard derivation) and
//! BLAKE2b-512 (SS58 address checksums) following the conventions of the
//! Substrate address and derivation formats.

use blake2::digest::consts::U32;
use blake2::{Blake2b512, Digest};

type Blake2b256 = blake2::Blake2b<U32>;

/// Context string prepended to SS58 checksum preimages.
const SS58_CHECKSUM_PREFIX: &[u8] = b"SS58PRE";

/// Compute BLAKE2b-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte BLAKE2b-256 digest.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute BLAKE2b-512 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 64-byte BLAKE2b-512 digest.
pub fn blake2b512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute the SS58 checksum hash: BLAKE2b-512 over `"SS58PRE" || data`.
///
/// The address codec takes the leading bytes of this digest as the
/// checksum (two bytes for public-key addresses).
///
/// # Arguments
/// * `data` - The address payload (prefix bytes plus public key).
///
/// # Returns
/// A 64-byte BLAKE2b-512 digest of the prefixed payload.
pub fn ss58_hash(data: &[u8]) -> [u8; 64] {
    let mut preimage = Vec::with_capacity(SS58_CHECKSUM_PREFIX.len() + data.len());
    preimage.extend_from_slice(SS58_CHECKSUM_PREFIX);
    preimage.extend_from_slice(data);
    blake2b512(&preimage)
}
