//! Derivation engine: resolve the seed and fold the path through a scheme.
//!
//! [`derive`] is the main entry point of the crate. It parses a secret
//! URI, resolves the seed bytes (raw hex seed, or mnemonic plus password
//! through the standard entropy-based seed derivation), builds the root
//! keypair for the chosen scheme, and applies the junctions in order.

use zeroize::Zeroizing;

use crate::error::KeyringError;
use crate::scheme::{KeyPair, Scheme};
use crate::uri::{SecretUri, SeedSource};

/// Derive a keypair from a secret URI string.
///
/// For a fixed `(scheme, uri)` pair this is a pure deterministic
/// function: re-deriving always yields byte-identical keys. Errors from
/// seed resolution or from an unsupported junction abort the whole call;
/// no partial keypair is ever returned.
///
/// # Arguments
/// * `scheme` - The signature scheme to derive for.
/// * `uri` - The secret URI (`<phrase or 0x-seed>[/junctions][///password]`).
///
/// # Returns
/// The final `KeyPair`, or the first parsing, seed-resolution, or
/// derivation error.
pub fn derive(scheme: Scheme, uri: &str) -> Result<KeyPair, KeyringError> {
    let suri: SecretUri = uri.parse()?;
    let seed = resolve_seed(&suri)?;
    let pair = scheme.from_seed(seed.as_slice())?;
    pair.derive(&suri.junctions)
}

/// Resolve the seed bytes of a parsed URI.
///
/// A raw hex seed is used directly and ignores the password; a mnemonic
/// is resolved with the password, where an absent marker behaves like an
/// empty password under the standard seed derivation.
fn resolve_seed(suri: &SecretUri) -> Result<Zeroizing<[u8; 32]>, KeyringError> {
    match &suri.seed_source {
        SeedSource::HexSeed(seed) => Ok(Zeroizing::new(*seed)),
        SeedSource::Mnemonic(phrase) => {
            seed_from_phrase(phrase, suri.password.as_deref().unwrap_or(""))
        }
    }
}

/// Resolve a mnemonic phrase and password into a 32-byte seed.
///
/// The phrase is decoded to its entropy and stretched with the
/// password-salted seed derivation; both in-scope schemes consume the
/// leading 32 bytes of the 64-byte result.
///
/// # Arguments
/// * `phrase` - The mnemonic phrase.
/// * `password` - The password, possibly empty.
///
/// # Returns
/// A zero-on-drop 32-byte seed, or `InvalidMnemonic` if the phrase fails
/// wordlist or checksum validation.
pub fn seed_from_phrase(
    phrase: &str,
    password: &str,
) -> Result<Zeroizing<[u8; 32]>, KeyringError> {
    let mnemonic = bip39::Mnemonic::parse_in(bip39::Language::English, phrase)
        .map_err(|e| KeyringError::InvalidMnemonic(e.to_string()))?;
    let entropy = Zeroizing::new(mnemonic.to_entropy());
    let big_seed = Zeroizing::new(
        substrate_bip39::seed_from_entropy(entropy.as_slice(), password)
            .map_err(|_| KeyringError::InvalidMnemonic("invalid entropy length".to_string()))?,
    );

    let mut seed = Zeroizing::new([0u8; 32]);
    seed.copy_from_slice(&big_seed[..32]);
    Ok(seed)
}
