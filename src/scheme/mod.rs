//! Signature-scheme capability surface.
//!
//! The two supported schemes form a closed set of tagged variants behind
//! one interface: [`Scheme`] is the stateless factory tag, [`KeyPair`]
//! dispatches signing, verification, derivation, and address rendering
//! to the concrete scheme. Whether a scheme offers soft derivation is an
//! explicit capability, not a runtime type probe.

use std::fmt;

use crate::error::KeyringError;
use crate::uri::DeriveJunction;
use crate::{ed25519, sr25519, ss58};

/// A signature-scheme tag, acting as a keypair factory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scheme {
    /// Schnorr/Ristretto scheme with hard and soft derivation.
    Sr25519,
    /// Edwards scheme with hard derivation only.
    Ed25519,
}

impl Scheme {
    /// The scheme's stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Sr25519 => "sr25519",
            Scheme::Ed25519 => "ed25519",
        }
    }

    /// Whether this scheme supports soft derivation.
    pub fn supports_soft_derivation(&self) -> bool {
        matches!(self, Scheme::Sr25519)
    }

    /// Create a keypair from a 32-byte seed.
    ///
    /// # Arguments
    /// * `seed` - A 32-byte seed.
    ///
    /// # Returns
    /// `Ok(KeyPair)` on success, or `InvalidSeedFormat` for a wrong length.
    pub fn from_seed(&self, seed: &[u8]) -> Result<KeyPair, KeyringError> {
        match self {
            Scheme::Sr25519 => Ok(KeyPair::Sr25519(sr25519::KeyPair::from_seed(seed)?)),
            Scheme::Ed25519 => Ok(KeyPair::Ed25519(ed25519::KeyPair::from_seed(seed)?)),
        }
    }

    /// Verify a signature against a raw public key under this scheme.
    ///
    /// # Returns
    /// `true` if the signature is valid; malformed input yields `false`.
    pub fn verify(&self, public_key: &[u8; 32], message: &[u8], signature: &[u8]) -> bool {
        match self {
            Scheme::Sr25519 => sr25519::verify(public_key, message, signature),
            Scheme::Ed25519 => ed25519::verify(public_key, message, signature),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A derived keypair for one of the supported schemes.
///
/// Secret material is exclusively owned by this value, zeroizes on drop,
/// and is never exposed except through [`Self::sign`].
pub enum KeyPair {
    /// An sr25519 keypair.
    Sr25519(sr25519::KeyPair),
    /// An ed25519 keypair.
    Ed25519(ed25519::KeyPair),
}

impl KeyPair {
    /// The scheme this keypair belongs to.
    pub fn scheme(&self) -> Scheme {
        match self {
            KeyPair::Sr25519(_) => Scheme::Sr25519,
            KeyPair::Ed25519(_) => Scheme::Ed25519,
        }
    }

    /// Serialize the public key as a 32-byte array.
    pub fn public_key(&self) -> [u8; 32] {
        match self {
            KeyPair::Sr25519(pair) => pair.public_key(),
            KeyPair::Ed25519(pair) => pair.public_key(),
        }
    }

    /// Sign a message.
    ///
    /// Deterministic or randomized per the scheme's own contract; the
    /// result always verifies against [`Self::public_key`].
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match self {
            KeyPair::Sr25519(pair) => pair.sign(message),
            KeyPair::Ed25519(pair) => pair.sign(message),
        }
    }

    /// Verify a signature over a message against this keypair's public key.
    ///
    /// # Returns
    /// `true` if the signature is valid; malformed input yields `false`,
    /// never an error.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            KeyPair::Sr25519(pair) => pair.verify(message, signature),
            KeyPair::Ed25519(pair) => pair.verify(message, signature),
        }
    }

    /// Derive a child keypair through a hard junction.
    ///
    /// Always supported.
    pub fn derive_hard(&self, chain_code: &[u8; 32]) -> KeyPair {
        match self {
            KeyPair::Sr25519(pair) => KeyPair::Sr25519(pair.derive_hard(chain_code)),
            KeyPair::Ed25519(pair) => KeyPair::Ed25519(pair.derive_hard(chain_code)),
        }
    }

    /// Derive a child keypair through a soft junction.
    ///
    /// # Returns
    /// `Ok(KeyPair)` for schemes with soft capability, or
    /// `UnsupportedDerivation` otherwise - never a silent fallback to
    /// hard derivation.
    pub fn derive_soft(&self, chain_code: &[u8; 32]) -> Result<KeyPair, KeyringError> {
        match self {
            KeyPair::Sr25519(pair) => Ok(KeyPair::Sr25519(pair.derive_soft(chain_code))),
            KeyPair::Ed25519(_) => Err(KeyringError::UnsupportedDerivation(
                Scheme::Ed25519.name(),
            )),
        }
    }

    /// Apply an ordered sequence of junctions as a fold, producing a new
    /// keypair at each step.
    ///
    /// # Arguments
    /// * `junctions` - The path, applied left to right.
    ///
    /// # Returns
    /// The final keypair, or the first derivation error encountered.
    pub fn derive(self, junctions: &[DeriveJunction]) -> Result<KeyPair, KeyringError> {
        junctions.iter().try_fold(self, |pair, junction| {
            if junction.is_hard() {
                Ok(pair.derive_hard(junction.chain_code()))
            } else {
                pair.derive_soft(junction.chain_code())
            }
        })
    }

    /// Render the checksummed network address of this keypair's public key.
    ///
    /// # Arguments
    /// * `network` - The numeric network id (at most 14 bits).
    ///
    /// # Returns
    /// The SS58 address string, or `InvalidPrefix` for an unrepresentable
    /// network id.
    pub fn address(&self, network: u16) -> Result<String, KeyringError> {
        ss58::encode(&self.public_key(), network)
    }
}

impl fmt::Debug for KeyPair {
    // Secret material stays out of the debug rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("scheme", &self.scheme().name())
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}
