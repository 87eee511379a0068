//! Secret-URI grammar: seed source, derivation junctions, and password.
//!
//! A secret URI has the shape
//! `<mnemonic or 0x-seed>[//hard-junction|/soft-junction]*[///password]`
//! and is parsed once into an immutable [`SecretUri`]. Junction semantics
//! (whether a scheme can actually apply a soft junction) are validated
//! later by the scheme, not here.

use std::fmt;
use std::str::FromStr;

use codec::Encode;

use crate::error::KeyringError;
use crate::hash::blake2b256;

/// Length of a junction chain code in bytes.
pub const JUNCTION_ID_LEN: usize = 32;

/// Length of a raw hex seed in bytes.
pub const SEED_LEN: usize = 32;

/// A single segment of a derivation path, either hard or soft.
///
/// Each junction carries a fixed 32-byte chain code computed from its
/// textual component; order within the path is significant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeriveJunction {
    /// Soft junction (`/component`): the child public key can also be
    /// computed from the parent public key alone.
    Soft([u8; JUNCTION_ID_LEN]),
    /// Hard junction (`//component`): one-way derivation from secret
    /// material.
    Hard([u8; JUNCTION_ID_LEN]),
}

impl DeriveJunction {
    /// Create a soft junction from a path component.
    pub fn soft(component: &str) -> Self {
        DeriveJunction::Soft(Self::compute_chain_code(component))
    }

    /// Create a hard junction from a path component.
    pub fn hard(component: &str) -> Self {
        DeriveJunction::Hard(Self::compute_chain_code(component))
    }

    /// Access the 32-byte chain code of this junction.
    pub fn chain_code(&self) -> &[u8; JUNCTION_ID_LEN] {
        match self {
            DeriveJunction::Soft(cc) | DeriveJunction::Hard(cc) => cc,
        }
    }

    /// Whether this is a hard junction.
    pub fn is_hard(&self) -> bool {
        matches!(self, DeriveJunction::Hard(_))
    }

    /// Encode a path component into a fixed 32-byte chain code.
    ///
    /// A component that parses as an unsigned decimal integer fitting in
    /// 32 bits is SCALE-encoded little-endian into the low bytes.
    /// Any other component is SCALE-encoded as a string (compact length
    /// prefix plus raw bytes); encodings longer than 32 bytes are reduced
    /// with BLAKE2b-256, shorter ones are zero-padded.
    ///
    /// This function is total: every component yields exactly 32 bytes.
    fn compute_chain_code(component: &str) -> [u8; JUNCTION_ID_LEN] {
        let encoded = match component.parse::<u32>() {
            Ok(index) => index.encode(),
            Err(_) => component.encode(),
        };

        let mut cc = [0u8; JUNCTION_ID_LEN];
        if encoded.len() > JUNCTION_ID_LEN {
            cc.copy_from_slice(&blake2b256(&encoded));
        } else {
            cc[..encoded.len()].copy_from_slice(&encoded);
        }
        cc
    }
}

/// The seed half of a secret URI: either an opaque mnemonic phrase or a
/// raw 32-byte hex seed.
#[derive(Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A mnemonic phrase, validated by the mnemonic collaborator at seed
    /// resolution time, not at parse time.
    Mnemonic(String),
    /// A raw seed given as `0x` plus 64 hex characters.
    HexSeed([u8; SEED_LEN]),
}

impl fmt::Debug for SeedSource {
    // Never print seed material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Mnemonic(_) => f.write_str("Mnemonic(<omitted>)"),
            SeedSource::HexSeed(_) => f.write_str("HexSeed(<omitted>)"),
        }
    }
}

/// A parsed secret URI: seed source, ordered junctions, optional password.
///
/// The two password states "marker absent" (`None`) and "marker present
/// but empty" (`Some("")`) are kept distinct; the mnemonic collaborator
/// decides whether they resolve to different seeds.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretUri {
    /// The seed source preceding the first `/`.
    pub seed_source: SeedSource,
    /// The ordered derivation path; later junctions derive from the
    /// keypair produced by earlier ones.
    pub junctions: Vec<DeriveJunction>,
    /// Everything after the `///` marker, if present.
    pub password: Option<String>,
}

impl fmt::Debug for SecretUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretUri")
            .field("seed_source", &self.seed_source)
            .field("junctions", &self.junctions)
            .field("password", &self.password.as_ref().map(|_| "<omitted>"))
            .finish()
    }
}

impl FromStr for SecretUri {
    type Err = KeyringError;

    /// Parse a secret URI string.
    ///
    /// # Errors
    /// * `InvalidSeedFormat` for a `0x` seed that is not 64 hex characters.
    /// * `EmptySeed` for a missing seed source.
    /// * `MalformedPath` for an empty junction component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The password marker wins over junction separators: everything
        // after the first `///` is the password, even if empty.
        let (body, password) = match s.find("///") {
            Some(idx) => (&s[..idx], Some(s[idx + 3..].to_string())),
            None => (s, None),
        };

        let (phrase, mut rest) = match body.find('/') {
            Some(idx) => (&body[..idx], &body[idx..]),
            None => (body, ""),
        };

        let seed_source = parse_seed_source(phrase)?;

        let mut junctions = Vec::new();
        while !rest.is_empty() {
            let hard = rest.starts_with("//");
            rest = &rest[if hard { 2 } else { 1 }..];

            let end = rest.find('/').unwrap_or(rest.len());
            let component = &rest[..end];
            if component.is_empty() {
                return Err(KeyringError::MalformedPath(
                    "empty junction component".to_string(),
                ));
            }

            junctions.push(if hard {
                DeriveJunction::hard(component)
            } else {
                DeriveJunction::soft(component)
            });
            rest = &rest[end..];
        }

        Ok(SecretUri {
            seed_source,
            junctions,
            password,
        })
    }
}

/// Parse the seed-source prefix of a URI.
///
/// A `0x` prefix selects the raw-seed form and requires exactly 64 hex
/// characters; anything else is an opaque mnemonic phrase.
fn parse_seed_source(phrase: &str) -> Result<SeedSource, KeyringError> {
    if let Some(hex_part) = phrase.strip_prefix("0x") {
        if hex_part.len() != SEED_LEN * 2 {
            return Err(KeyringError::InvalidSeedFormat(format!(
                "expected {} hex characters, got {}",
                SEED_LEN * 2,
                hex_part.len()
            )));
        }
        let bytes =
            hex::decode(hex_part).map_err(|e| KeyringError::InvalidSeedFormat(e.to_string()))?;
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&bytes);
        return Ok(SeedSource::HexSeed(seed));
    }

    if phrase.is_empty() {
        return Err(KeyringError::EmptySeed);
    }
    Ok(SeedSource::Mnemonic(phrase.to_string()))
}
