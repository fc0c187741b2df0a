//! Smoke test for the facade re-exports

use fileseal::hybrid;
use fileseal::prelude::*;

#[test]
fn prelude_covers_the_whole_cycle() {
    let mut rng = rand::thread_rng();

    // AES-128 single-block known answer through the re-exported types
    let key_bytes: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
        .unwrap()
        .try_into()
        .unwrap();
    let aes = Aes128::new(&SecretBytes::new(key_bytes));
    let mut block: [u8; 16] = hex::decode("00112233445566778899aabbccddeeff")
        .unwrap()
        .try_into()
        .unwrap();
    aes.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");

    // Hybrid cycle through the facade module paths
    let key = AesKey::generate(&mut rng, KeySize::Aes192);
    let keypair = RsaKeyPair::generate(&mut rng, 512).unwrap();

    let ciphertext = hybrid::encrypt(b"facade", &key).unwrap();
    let wrapped = hybrid::wrap_key(&key, keypair.public_key()).unwrap();
    let recovered_key = hybrid::unwrap_key_to_len(&wrapped, keypair.private_key(), 24).unwrap();
    assert_eq!(
        hybrid::decrypt(&ciphertext, &recovered_key).unwrap(),
        b"facade"
    );
}
