//! Hierarchical key derivation and SS58 address encoding for
//! Substrate-style signature schemes.
//!
//! This crate turns a secret URI - a mnemonic phrase or raw hex seed,
//! chained hard (`//`) and soft (`/`) junctions, and an optional
//! `///password` - into a scheme-specific keypair that can sign, verify,
//! and render a checksummed network address:
//! - Secret-URI grammar and parser ([`uri`])
//! - Junction chain-code encoding ([`uri::DeriveJunction`])
//! - The sr25519 and ed25519 schemes behind one capability surface
//!   ([`scheme`])
//! - The derivation engine ([`derive`])
//! - The SS58 address codec ([`ss58`])
//!
//! ```
//! use suri_keyring::{derive, Scheme};
//!
//! # fn main() -> Result<(), suri_keyring::KeyringError> {
//! let pair = derive(
//!     Scheme::Sr25519,
//!     "0x18446f2d685492c3086391aabe8f5e235c3c2e02521985650f0c97052237e717//foo",
//! )?;
//! let address = pair.address(42)?;
//! let signature = pair.sign(b"message");
//! assert!(pair.verify(b"message", &signature));
//! # Ok(())
//! # }
//! ```

pub mod derive;
pub mod ed25519;
pub mod hash;
pub mod scheme;
pub mod sr25519;
pub mod ss58;
pub mod uri;

mod error;

pub use derive::derive;
pub use error::KeyringError;
pub use scheme::{KeyPair, Scheme};
pub use ss58::{decode as decode_address, encode as encode_address};
pub use uri::{DeriveJunction, SecretUri, SeedSource};
