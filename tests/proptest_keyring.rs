use proptest::prelude::*;

use suri_keyring::{decode_address, derive, encode_address, KeyringError, Scheme};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ss58_address_roundtrip(
        public in prop::array::uniform32(any::<u8>()),
        network in 0u16..=16383
    ) {
        let address = encode_address(&public, network).unwrap();
        let (decoded_public, decoded_network) = decode_address(&address).unwrap();
        prop_assert_eq!(decoded_public, public);
        prop_assert_eq!(decoded_network, network);
    }

    #[test]
    fn ss58_checksum_detects_payload_corruption(
        public in prop::array::uniform32(any::<u8>()),
        network in 0u16..=16383,
        index in 0usize..33,
        flip in 1u8..=255
    ) {
        let address = encode_address(&public, network).unwrap();
        let mut payload = bs58::decode(&address).into_vec().unwrap();
        // Corrupt one byte of the prefix-plus-key region without
        // recomputing the checksum.
        let target = index.min(payload.len() - 3);
        payload[target] ^= flip;
        let tampered = bs58::encode(payload).into_string();
        // Every corruption must be rejected. Key-byte flips fail the
        // checksum; prefix-byte flips may fail the prefix or length
        // checks before the checksum is ever compared.
        let result = decode_address(&tampered);
        prop_assert!(result.is_err());
        if target > 1 {
            prop_assert!(matches!(result, Err(KeyringError::ChecksumMismatch)));
        }
    }

    #[test]
    fn derivation_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let uri = format!("0x{}//hard", hex::encode(seed));
        for scheme in [Scheme::Sr25519, Scheme::Ed25519] {
            let first = derive(scheme, &uri).unwrap();
            let second = derive(scheme, &uri).unwrap();
            prop_assert_eq!(first.public_key(), second.public_key());
        }
    }

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let uri = format!("0x{}", hex::encode(seed));
        for scheme in [Scheme::Sr25519, Scheme::Ed25519] {
            let pair = derive(scheme, &uri).unwrap();
            let sig = pair.sign(&msg);
            prop_assert!(pair.verify(&msg, &sig));
            if msg.as_slice() != b"different message" {
                prop_assert!(!pair.verify(b"different message", &sig));
            }

            // A signature from one scheme never verifies under the other.
            let other = if scheme == Scheme::Sr25519 { Scheme::Ed25519 } else { Scheme::Sr25519 };
            let other_pair = derive(other, &uri).unwrap();
            prop_assert!(!other_pair.verify(&msg, &sig));
        }
    }

    #[test]
    fn hard_and_soft_junctions_diverge(seed in prop::array::uniform32(any::<u8>())) {
        let base = format!("0x{}", hex::encode(seed));
        let hard = derive(Scheme::Sr25519, &format!("{base}//x")).unwrap();
        let soft = derive(Scheme::Sr25519, &format!("{base}/x")).unwrap();
        prop_assert_ne!(hard.public_key(), soft.public_key());
    }
}
