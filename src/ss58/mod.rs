//! SS58 address encoding and decoding.
//!
//! Renders a 32-byte public key as a network-prefixed, checksummed,
//! base-58 string and decodes it back. Network ids below 64 take a
//! single prefix byte; ids up to 16383 take the two-byte form with the
//! 14-bit ident split across both bytes. The checksum is the leading two
//! bytes of the domain-separated BLAKE2b-512 hash of the payload.

use crate::error::KeyringError;
use crate::hash::ss58_hash;

/// Length of an address public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of the address checksum in bytes (public-key addresses).
const CHECKSUM_LEN: usize = 2;

/// Largest network id representable in the two-byte prefix tier.
const MAX_NETWORK_ID: u16 = 0b0011_1111_1111_1111;

/// Encode a public key as an SS58 address for the given network.
///
/// # Arguments
/// * `public_key` - The 32-byte public key.
/// * `network` - The numeric network id (at most 14 bits).
///
/// # Returns
/// The base-58 address string, or `InvalidPrefix` if the network id does
/// not fit the prefix encoding.
pub fn encode(public_key: &[u8; PUBLIC_KEY_LEN], network: u16) -> Result<String, KeyringError> {
    let mut payload = Vec::with_capacity(2 + PUBLIC_KEY_LEN + CHECKSUM_LEN);
    match network {
        0..=63 => payload.push(network as u8),
        64..=MAX_NETWORK_ID => {
            // Two-byte tier: the first byte carries the ident's low-byte
            // top six bits under a 0b01 marker, the second carries the
            // high six bits with the low-byte bottom two bits on top.
            let first = ((network & 0b0000_0000_1111_1100) >> 2) as u8;
            let second = ((network >> 8) as u8) | (((network & 0b0000_0000_0000_0011) as u8) << 6);
            payload.push(first | 0b0100_0000);
            payload.push(second);
        }
        _ => return Err(KeyringError::InvalidPrefix),
    }
    payload.extend_from_slice(public_key);

    let checksum = ss58_hash(&payload);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    Ok(bs58::encode(payload).into_string())
}

/// Decode an SS58 address into its public key and network id.
///
/// Recomputes the checksum from the decoded payload; the exact inverse
/// of [`encode`].
///
/// # Arguments
/// * `address` - The base-58 address string.
///
/// # Returns
/// `Ok((public_key, network))` on success, or an error for invalid
/// base-58, a prefix byte neither encoding could have produced, a wrong
/// payload length, or a checksum mismatch.
pub fn decode(address: &str) -> Result<([u8; PUBLIC_KEY_LEN], u16), KeyringError> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| KeyringError::InvalidBase58(e.to_string()))?;
    if data.is_empty() {
        return Err(KeyringError::InvalidAddressLength(0));
    }

    let (prefix_len, network) = match data[0] {
        0..=63 => (1, data[0] as u16),
        64..=127 => {
            if data.len() < 2 {
                return Err(KeyringError::InvalidAddressLength(data.len()));
            }
            let lower = ((data[0] & 0b0011_1111) << 2) | (data[1] >> 6);
            let upper = data[1] & 0b0011_1111;
            let network = (lower as u16) | ((upper as u16) << 8);
            // Idents below 64 have a canonical one-byte form.
            if network < 64 {
                return Err(KeyringError::InvalidPrefix);
            }
            (2, network)
        }
        _ => return Err(KeyringError::InvalidPrefix),
    };

    if data.len() != prefix_len + PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(KeyringError::InvalidAddressLength(data.len()));
    }

    let checksum_start = prefix_len + PUBLIC_KEY_LEN;
    let hash = ss58_hash(&data[..checksum_start]);
    if data[checksum_start..] != hash[..CHECKSUM_LEN] {
        return Err(KeyringError::ChecksumMismatch);
    }

    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    public_key.copy_from_slice(&data[prefix_len..checksum_start]);
    Ok((public_key, network))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY: &str = "88af895626c47cf1235ec3898d238baeb41adca3117b9a77bc2f6b78eca0771b";
    const ADDRESS: &str = "5F9vWoiazEhfxSxCG8nUuDhh5fqNtPnSxp2BrhPsuLqEQASi";

    fn public_key() -> [u8; 32] {
        hex::decode(PUBLIC_KEY).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_encode_known_address() {
        assert_eq!(encode(&public_key(), 42).unwrap(), ADDRESS);
    }

    #[test]
    fn test_decode_known_address() {
        let (decoded_key, network) = decode(ADDRESS).unwrap();
        assert_eq!(decoded_key, public_key());
        assert_eq!(network, 42);
    }

    #[test]
    fn test_roundtrip_across_prefix_tiers() {
        // One-byte tier boundaries, two-byte tier boundaries, and a few
        // ids exercising both halves of the bit split.
        for network in [0, 1, 42, 63, 64, 65, 255, 256, 8191, 16383] {
            let address = encode(&public_key(), network).unwrap();
            let (decoded_key, decoded_network) = decode(&address).unwrap();
            assert_eq!(decoded_key, public_key(), "network {network}");
            assert_eq!(decoded_network, network, "network {network}");
        }
    }

    #[test]
    fn test_encode_unrepresentable_network() {
        assert!(matches!(
            encode(&public_key(), 16384),
            Err(KeyringError::InvalidPrefix)
        ));
        assert!(matches!(
            encode(&public_key(), u16::MAX),
            Err(KeyringError::InvalidPrefix)
        ));
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        // Corrupt one public-key byte but keep the stale checksum.
        let mut payload = bs58::decode(ADDRESS).into_vec().unwrap();
        payload[10] ^= 0x01;
        let tampered = bs58::encode(payload).into_string();
        assert!(matches!(
            decode(&tampered),
            Err(KeyringError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_decode_invalid_prefix_byte() {
        // Prefix bytes 128..=255 are outside both encodings, regardless
        // of checksum validity.
        let mut payload = vec![0x80];
        payload.extend_from_slice(&public_key());
        let checksum = crate::hash::ss58_hash(&payload);
        payload.extend_from_slice(&checksum[..2]);
        let forged = bs58::encode(payload).into_string();
        assert!(matches!(decode(&forged), Err(KeyringError::InvalidPrefix)));
    }

    #[test]
    fn test_decode_non_canonical_two_byte_prefix() {
        // A two-byte prefix reconstructing an ident below 64 could not
        // have been produced by the encoder.
        let mut payload = vec![0b0100_0000, 0b0000_0000];
        payload.extend_from_slice(&public_key());
        let checksum = crate::hash::ss58_hash(&payload);
        payload.extend_from_slice(&checksum[..2]);
        let forged = bs58::encode(payload).into_string();
        assert!(matches!(decode(&forged), Err(KeyringError::InvalidPrefix)));
    }

    #[test]
    fn test_decode_wrong_length() {
        let mut payload = bs58::decode(ADDRESS).into_vec().unwrap();
        payload.pop();
        let truncated = bs58::encode(payload).into_string();
        assert!(matches!(
            decode(&truncated),
            Err(KeyringError::InvalidAddressLength(_))
        ));
    }

    #[test]
    fn test_decode_invalid_base58() {
        assert!(matches!(
            decode("not-an-address-0OIl"),
            Err(KeyringError::InvalidBase58(_))
        ));
    }
}
