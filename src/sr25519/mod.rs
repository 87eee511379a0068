//! Schnorr/Ristretto (sr25519) signature scheme.
//!
//! Supports both hard and soft derivation: soft derivation is additive
//! over the Ristretto group, so child public keys can also be computed
//! from the parent public key alone (see [`derive_public_soft`]).
//! Signatures use the Substrate signing context.

use schnorrkel::derive::{ChainCode, Derivation};
use schnorrkel::{signing_context, ExpansionMode, MiniSecretKey, PublicKey, Signature};

use crate::error::KeyringError;

/// Signing context shared by Substrate-compatible sr25519 signatures.
const SIGNING_CTX: &[u8] = b"substrate";

/// Length of a mini secret seed in bytes.
pub const SEED_LEN: usize = 32;

/// Length of a serialized public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of a serialized signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// An sr25519 keypair.
///
/// Wraps a schnorrkel `Keypair`; the expanded secret key zeroizes its
/// memory on drop.
pub struct KeyPair {
    inner: schnorrkel::Keypair,
}

impl KeyPair {
    /// Create a keypair from a 32-byte mini secret seed.
    ///
    /// The seed is expanded with the Ed25519-compatible expansion mode
    /// used by Substrate. Total for any 32-byte input; errors only on a
    /// wrong seed length.
    ///
    /// # Arguments
    /// * `seed` - A 32-byte mini secret seed.
    ///
    /// # Returns
    /// `Ok(KeyPair)` on success, or `InvalidSeedFormat` for a wrong length.
    pub fn from_seed(seed: &[u8]) -> Result<Self, KeyringError> {
        let mini = MiniSecretKey::from_bytes(seed)
            .map_err(|e| KeyringError::InvalidSeedFormat(e.to_string()))?;
        Ok(KeyPair {
            inner: mini.expand_to_keypair(ExpansionMode::Ed25519),
        })
    }

    /// Derive a child keypair through a hard junction.
    ///
    /// Runs the secret key and chain code through schnorrkel's
    /// hard-derivation transcript, producing a fresh mini secret with no
    /// algebraic relationship to the parent.
    ///
    /// # Arguments
    /// * `chain_code` - The junction's 32-byte chain code.
    ///
    /// # Returns
    /// The derived child `KeyPair`.
    pub fn derive_hard(&self, chain_code: &[u8; 32]) -> KeyPair {
        let empty: &[u8] = &[];
        let (mini, _) = self
            .inner
            .secret
            .hard_derive_mini_secret_key(Some(ChainCode(*chain_code)), empty);
        KeyPair {
            inner: mini.expand_to_keypair(ExpansionMode::Ed25519),
        }
    }

    /// Derive a child keypair through a soft junction.
    ///
    /// The resulting public key equals the one produced by applying
    /// [`derive_public_soft`] to this keypair's public key.
    ///
    /// # Arguments
    /// * `chain_code` - The junction's 32-byte chain code.
    ///
    /// # Returns
    /// The derived child `KeyPair`.
    pub fn derive_soft(&self, chain_code: &[u8; 32]) -> KeyPair {
        let empty: &[u8] = &[];
        let (derived, _) = self.inner.derived_key_simple(ChainCode(*chain_code), empty);
        KeyPair { inner: derived }
    }

    /// Serialize the public key as a 32-byte array.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.inner.public.to_bytes()
    }

    /// Sign a message under the Substrate signing context.
    ///
    /// Signing is randomized; every call produces a fresh signature that
    /// verifies against [`Self::public_key`].
    ///
    /// # Arguments
    /// * `message` - The message bytes to sign.
    ///
    /// # Returns
    /// A 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.inner
            .sign(signing_context(SIGNING_CTX).bytes(message))
            .to_bytes()
            .to_vec()
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

/// Verify an sr25519 signature against a raw public key.
///
/// # Arguments
/// * `public_key` - The 32-byte public key.
/// * `message` - The message that was signed.
/// * `signature` - The signature bytes (must be 64 bytes to verify).
///
/// # Returns
/// `true` if the signature is valid; malformed input yields `false`.
pub fn verify(public_key: &[u8; PUBLIC_KEY_LEN], message: &[u8], signature: &[u8]) -> bool {
    let public = match PublicKey::from_bytes(public_key) {
        Ok(public) => public,
        Err(_) => return false,
    };
    let signature = match Signature::from_bytes(signature) {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    public.verify_simple(SIGNING_CTX, message, &signature).is_ok()
}

/// Soft-derive a child public key from a parent public key alone.
///
/// This is the watch-only half of soft derivation: no secret material is
/// involved, yet the result matches [`KeyPair::derive_soft`] on the
/// corresponding secret keypair.
///
/// # Arguments
/// * `public_key` - The parent's 32-byte public key.
/// * `chain_code` - The junction's 32-byte chain code.
///
/// # Returns
/// `Ok` with the child's 32-byte public key, or `InvalidPublicKey` if the
/// input is not a valid Ristretto point.
pub fn derive_public_soft(
    public_key: &[u8; PUBLIC_KEY_LEN],
    chain_code: &[u8; 32],
) -> Result<[u8; PUBLIC_KEY_LEN], KeyringError> {
    let public = PublicKey::from_bytes(public_key)
        .map_err(|e| KeyringError::InvalidPublicKey(e.to_string()))?;
    let empty: &[u8] = &[];
    let (derived, _) = public.derived_key_simple(ChainCode(*chain_code), empty);
    Ok(derived.to_bytes())
}
