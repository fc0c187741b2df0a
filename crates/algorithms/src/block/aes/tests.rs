use super::*;

#[test]
fn sbox_tables_are_inverse_permutations() {
    for value in 0u8..=255 {
        assert_eq!(INV_S_BOX[S_BOX[value as usize] as usize], value);
        assert_eq!(S_BOX[INV_S_BOX[value as usize] as usize], value);
    }
}

#[test]
fn aes128_key_expansion_matches_fips197_appendix_a() {
    // FIPS-197 Appendix A.1, cipher key 2b7e151628aed2a6abf7158809cf4f3c
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut key_bytes = [0u8; 16];
    key_bytes.copy_from_slice(&key);

    let schedule = Aes128::expand_key(&key_bytes);
    let bytes = schedule.as_slice();

    // Words w4..w7 (first derived round key)
    assert_eq!(
        hex::encode(&bytes[16..32]),
        "a0fafe1788542cb123a339392a6c7605"
    );
    // Words w40..w43 (final round key)
    assert_eq!(
        hex::encode(&bytes[160..176]),
        "d014f9a8c9ee2589e13f0cc8b6630ca6"
    );
}

#[test]
fn aes128_encrypt_known_answer() {
    // FIPS-197 Appendix C.1
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block: [u8; 16] = hex::decode("00112233445566778899aabbccddeeff")
        .unwrap()
        .try_into()
        .unwrap();

    let mut key_bytes = [0u8; 16];
    key_bytes.copy_from_slice(&key);
    let aes = Aes128::new(&SecretBytes::new(key_bytes));
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn aes128_decrypt_known_answer() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block: [u8; 16] = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a")
        .unwrap()
        .try_into()
        .unwrap();

    let mut key_bytes = [0u8; 16];
    key_bytes.copy_from_slice(&key);
    let aes = Aes128::new(&SecretBytes::new(key_bytes));
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(hex::encode(block), "00112233445566778899aabbccddeeff");
}

#[test]
fn aes192_encrypt_known_answer() {
    // NIST test vector: AES-192-ECB
    let key = hex::decode("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
    let mut block: [u8; 16] = hex::decode("6bc1bee22e409f96e93d7e117393172a")
        .unwrap()
        .try_into()
        .unwrap();

    let mut key_bytes = [0u8; 24];
    key_bytes.copy_from_slice(&key);
    let aes = Aes192::new(&SecretBytes::new(key_bytes));
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(hex::encode(block), "bd334f1d6e45f25ff712a214571fa5cc");
}

#[test]
fn aes256_encrypt_known_answer() {
    // NIST test vector: AES-256-ECB
    let key =
        hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4").unwrap();
    let mut block: [u8; 16] = hex::decode("6bc1bee22e409f96e93d7e117393172a")
        .unwrap()
        .try_into()
        .unwrap();

    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(&key);
    let aes = Aes256::new(&SecretBytes::new(key_bytes));
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(hex::encode(block), "f3eed1bdb5d2a03c064b5a7e3db181f8");
}

#[test]
fn all_variants_round_trip_a_block() {
    let mut rng = rand::thread_rng();
    let original: [u8; 16] = rand::Rng::gen(&mut rng);

    let aes = Aes128::new(&Aes128::generate_key(&mut rng));
    let mut block = original;
    aes.encrypt_block(&mut block).unwrap();
    assert_ne!(block, original);
    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);

    let aes = Aes192::new(&Aes192::generate_key(&mut rng));
    let mut block = original;
    aes.encrypt_block(&mut block).unwrap();
    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);

    let aes = Aes256::new(&Aes256::generate_key(&mut rng));
    let mut block = original;
    aes.encrypt_block(&mut block).unwrap();
    aes.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);
}

#[test]
fn wrong_block_length_is_rejected() {
    let aes = Aes128::new(&SecretBytes::new([0u8; 16]));
    let mut short = [0u8; 15];
    assert!(matches!(
        aes.encrypt_block(&mut short),
        Err(Error::InvalidLength { expected: 16, .. })
    ));
    let mut long = [0u8; 17];
    assert!(matches!(
        aes.decrypt_block(&mut long),
        Err(Error::InvalidLength { expected: 16, .. })
    ));
}

#[test]
fn aes_key_accepts_only_valid_lengths() {
    assert!(AesKey::from_bytes(&[0u8; 16]).is_ok());
    assert!(AesKey::from_bytes(&[0u8; 24]).is_ok());
    assert!(AesKey::from_bytes(&[0u8; 32]).is_ok());
    for len in [0usize, 1, 15, 17, 23, 31, 33, 64] {
        assert!(matches!(
            AesKey::from_bytes(&vec![0u8; len]),
            Err(Error::InvalidKey { .. })
        ));
    }
}
