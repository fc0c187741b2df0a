//! Property-based tests for the four-operation surface

use std::sync::OnceLock;

use algorithms::block::aes::AesKey;
use algorithms::rsa::RsaKeyPair;
use fileseal_hybrid::{decrypt, encrypt, unwrap_key, unwrap_key_to_len, wrap_key};
use proptest::prelude::*;

// Keypair generation dominates the runtime, so one pair is shared by
// every case.
fn keypair() -> &'static RsaKeyPair {
    static KEYPAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    KEYPAIR.get_or_init(|| {
        RsaKeyPair::generate(&mut rand::thread_rng(), 512).unwrap()
    })
}

proptest! {
    #[test]
    fn encrypt_decrypt_roundtrip(
        key_bytes in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..1024)
    ) {
        let key = AesKey::from_bytes(&key_bytes).unwrap();
        let ciphertext = encrypt(&data, &key).unwrap();
        prop_assert_eq!(decrypt(&ciphertext, &key).unwrap(), data);
    }

    #[test]
    fn wrap_unwrap_roundtrip(key_bytes in any::<[u8; 16]>()) {
        let key = AesKey::from_bytes(&key_bytes).unwrap();
        let wrapped = wrap_key(&key, keypair().public_key()).unwrap();
        let recovered = unwrap_key(&wrapped, keypair().private_key()).unwrap();
        prop_assert_eq!(recovered.as_bytes(), &key_bytes);
    }

    #[test]
    fn wide_keys_wrap_unwrap_roundtrip(key_bytes in any::<[u8; 32]>()) {
        let key = AesKey::from_bytes(&key_bytes).unwrap();
        let wrapped = wrap_key(&key, keypair().public_key()).unwrap();
        let recovered =
            unwrap_key_to_len(&wrapped, keypair().private_key(), 32).unwrap();
        prop_assert_eq!(recovered.as_bytes(), &key_bytes);
    }
}
