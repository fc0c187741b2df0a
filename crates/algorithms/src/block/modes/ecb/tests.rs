use super::*;
use crate::block::aes::Aes128;
use api::error::Error;
use api::types::SecretBytes;

fn nist_cipher() -> Ecb<Aes128> {
    // NIST SP 800-38A F.1.1, AES-128 ECB key
    let key: [u8; 16] = hex::decode("2b7e151628aed2a6abf7158809cf4f3c")
        .unwrap()
        .try_into()
        .unwrap();
    Ecb::new(Aes128::new(&SecretBytes::new(key)))
}

#[test]
fn aes128_ecb_matches_nist_sp800_38a() {
    let plaintext = hex::decode(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ))
    .unwrap();
    let expected = concat!(
        "3ad77bb40d7a3660a89ecaf32466ef97",
        "f5d3d58503b9699de785895a96fdbaaf",
        "43b1cd7f598ece23881b00e3ed030688",
        "7b0c785e27e8ad3f8223207104725dd4",
    );

    let ecb = nist_cipher();
    let ciphertext = ecb.encrypt(&plaintext).unwrap();
    assert_eq!(hex::encode(&ciphertext), expected);

    let recovered = ecb.decrypt(&ciphertext).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn identical_plaintext_blocks_give_identical_ciphertext_blocks() {
    let ecb = nist_cipher();
    let plaintext = [0xabu8; 48];
    let ciphertext = ecb.encrypt(&plaintext).unwrap();
    assert_eq!(&ciphertext[..16], &ciphertext[16..32]);
    assert_eq!(&ciphertext[..16], &ciphertext[32..]);
}

#[test]
fn unaligned_input_is_rejected() {
    let ecb = nist_cipher();
    assert!(matches!(
        ecb.encrypt(&[0u8; 15]),
        Err(Error::InvalidLength {
            expected: 16,
            actual: 15,
            ..
        })
    ));
    assert!(matches!(
        ecb.decrypt(&[0u8; 33]),
        Err(Error::InvalidLength {
            expected: 48,
            actual: 33,
            ..
        })
    ));
}

#[test]
fn empty_input_is_a_valid_zero_block_message() {
    let ecb = nist_cipher();
    assert_eq!(ecb.encrypt(&[]).unwrap(), Vec::<u8>::new());
    assert_eq!(ecb.decrypt(&[]).unwrap(), Vec::<u8>::new());
}
