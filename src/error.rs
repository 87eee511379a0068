/// Unified error type for URI parsing, key derivation, and address coding.
///
/// Every fallible operation in this crate returns one of these variants;
/// none of them are retried internally, since derivation is pure and
/// retrying with the same input cannot change the outcome.
#[derive(Debug, thiserror::Error)]
pub enum KeyringError {
    #[error("invalid seed format: {0}")]
    InvalidSeedFormat(String),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("empty seed phrase")]
    EmptySeed,

    #[error("malformed derivation path: {0}")]
    MalformedPath(String),

    #[error("{0} does not support soft derivation")]
    UnsupportedDerivation(&'static str),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid network prefix")]
    InvalidPrefix,

    #[error("invalid address length: {0}")]
    InvalidAddressLength(usize),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),
}
