//! End-to-end tests for the hybrid orchestration surface

use algorithms::block::aes::{AesKey, KeySize};
use algorithms::rsa::RsaKeyPair;
use fileseal_hybrid::{
    decode_wrapped_key, decrypt, encode_wrapped_key, encrypt, parse_key_text, unwrap_key,
    unwrap_key_to_len, wrap_key, Error,
};

#[test]
fn full_seal_and_open_cycle() {
    let mut rng = rand::thread_rng();
    let key = AesKey::generate(&mut rng, KeySize::Aes128);
    let keypair = RsaKeyPair::generate(&mut rng, 512).unwrap();

    let plaintext = b"the quick brown fox jumps over the lazy dog";
    let ciphertext = encrypt(plaintext, &key).unwrap();
    assert_ne!(&ciphertext[..], &plaintext[..]);
    assert_eq!(ciphertext.len() % 16, 0);

    // The key travels as a base64 artifact next to the ciphertext
    let artifact = encode_wrapped_key(&wrap_key(&key, keypair.public_key()).unwrap());

    let wrapped = decode_wrapped_key(&artifact).unwrap();
    let recovered_key = unwrap_key(&wrapped, keypair.private_key()).unwrap();
    assert_eq!(recovered_key.as_bytes(), key.as_bytes());

    let recovered = decrypt(&ciphertext, &recovered_key).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn wide_keys_unwrap_with_an_explicit_length() {
    let mut rng = rand::thread_rng();
    let key = AesKey::generate(&mut rng, KeySize::Aes256);
    let keypair = RsaKeyPair::generate(&mut rng, 512).unwrap();

    let wrapped = wrap_key(&key, keypair.public_key()).unwrap();
    let recovered = unwrap_key_to_len(&wrapped, keypair.private_key(), 32).unwrap();
    assert_eq!(recovered.as_bytes(), key.as_bytes());
}

#[test]
fn encrypt_always_emits_at_least_one_block() {
    let mut rng = rand::thread_rng();
    let key = AesKey::generate(&mut rng, KeySize::Aes128);

    let ciphertext = encrypt(b"", &key).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(decrypt(&ciphertext, &key).unwrap(), b"");

    // A block-aligned plaintext still grows by a full padding block
    let ciphertext = encrypt(&[0u8; 32], &key).unwrap();
    assert_eq!(ciphertext.len(), 48);
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let mut rng = rand::thread_rng();
    let key = AesKey::generate(&mut rng, KeySize::Aes128);

    let mut ciphertext = encrypt(b"some payload", &key).unwrap();
    ciphertext.pop();
    assert!(matches!(
        decrypt(&ciphertext, &key),
        Err(Error::Api(_))
    ));
}

#[test]
fn key_text_base64_takes_precedence() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let raw = [0x5au8; 24];
    let text = STANDARD.encode(raw);
    let key = parse_key_text(&text).unwrap();
    assert_eq!(key.as_bytes(), &raw);
}

#[test]
fn key_text_falls_back_to_hex() {
    // 64 hex chars decode in the base64 branch to 48 bytes, an
    // unsupported length, so the hex branch claims them
    let text = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    let key = parse_key_text(text).unwrap();
    assert_eq!(key.len(), 32);
    assert_eq!(key.as_bytes()[0], 0x00);
    assert_eq!(key.as_bytes()[31], 0x1f);
}

#[test]
fn key_text_falls_back_to_raw_bytes() {
    // Contains a space, so neither base64 nor hex accept it
    let key = parse_key_text("YELLOW SUBMARINE").unwrap();
    assert_eq!(key.as_bytes(), b"YELLOW SUBMARINE");
}

#[test]
fn unusable_key_text_is_rejected() {
    assert!(matches!(
        parse_key_text("too short"),
        Err(Error::InvalidKeyText(_))
    ));
}

#[test]
fn garbage_artifacts_are_rejected() {
    assert!(matches!(
        decode_wrapped_key("!!! not base64 !!!"),
        Err(Error::InvalidArtifact(_))
    ));
}
