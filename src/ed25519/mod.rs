//! Edwards (ed25519) signature scheme.
//!
//! Supports hard derivation only: the seed-to-public mapping runs the
//! seed through SHA-512 and clamping, so it is not additively
//! homomorphic and no soft derivation is possible. Hard derivation
//! hashes the parent seed and chain code under a fixed domain context
//! into a fresh child seed.

use codec::Encode;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use crate::error::KeyringError;
use crate::hash::blake2b256;

/// Domain context mixed into hard-derivation hashes.
const HDKD_CONTEXT: &str = "Ed25519HDKD";

/// Length of a secret seed in bytes.
pub const SEED_LEN: usize = 32;

/// Length of a serialized public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of a serialized signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// An ed25519 keypair.
///
/// Wraps a dalek `SigningKey`, which zeroizes its memory on drop. The
/// 32-byte seed is recoverable from the signing key and feeds hard
/// derivation.
pub struct KeyPair {
    inner: SigningKey,
}

impl KeyPair {
    /// Create a keypair from a 32-byte seed.
    ///
    /// Total for any 32-byte input; errors only on a wrong seed length.
    ///
    /// # Arguments
    /// * `seed` - A 32-byte secret seed.
    ///
    /// # Returns
    /// `Ok(KeyPair)` on success, or `InvalidSeedFormat` for a wrong length.
    pub fn from_seed(seed: &[u8]) -> Result<Self, KeyringError> {
        let seed: [u8; SEED_LEN] = seed.try_into().map_err(|_| {
            KeyringError::InvalidSeedFormat(format!(
                "expected {} seed bytes, got {}",
                SEED_LEN,
                seed.len()
            ))
        })?;
        Ok(KeyPair {
            inner: SigningKey::from_bytes(&seed),
        })
    }

    /// Derive a child keypair through a hard junction.
    ///
    /// The child seed is BLAKE2b-256 over the SCALE encoding of the
    /// domain context, the parent seed, and the chain code.
    ///
    /// # Arguments
    /// * `chain_code` - The junction's 32-byte chain code.
    ///
    /// # Returns
    /// The derived child `KeyPair`.
    pub fn derive_hard(&self, chain_code: &[u8; 32]) -> KeyPair {
        let parent = Zeroizing::new(self.inner.to_bytes());
        let child = Zeroizing::new(
            (HDKD_CONTEXT, *parent, *chain_code).using_encoded(blake2b256),
        );
        KeyPair {
            inner: SigningKey::from_bytes(&child),
        }
    }

    /// Serialize the public key as a 32-byte array.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.inner.verifying_key().to_bytes()
    }

    /// Sign a message.
    ///
    /// Ed25519 signing is deterministic: the same keypair and message
    /// always produce the same signature.
    ///
    /// # Arguments
    /// * `message` - The message bytes to sign.
    ///
    /// # Returns
    /// A 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.inner.sign(message).to_bytes().to_vec()
    }

    /// Verify a signature over a message against this keypair's public key.
    ///
    /// # Returns
    /// `true` if the signature is valid; malformed input yields `false`,
    /// never an error.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify(&self.public_key(), message, signature)
    }
}

/// Verify an ed25519 signature against a raw public key.
///
/// # Arguments
/// * `public_key` - The 32-byte public key.
/// * `message` - The message that was signed.
/// * `signature` - The signature bytes (must be 64 bytes to verify).
///
/// # Returns
/// `true` if the signature is valid; malformed input yields `false`.
pub fn verify(public_key: &[u8; PUBLIC_KEY_LEN], message: &[u8], signature: &[u8]) -> bool {
    let public = match VerifyingKey::from_bytes(public_key) {
        Ok(public) => public,
        Err(_) => return false,
    };
    let signature: [u8; SIGNATURE_LEN] = match signature.try_into() {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    public
        .verify(message, &Signature::from_bytes(&signature))
        .is_ok()
}
