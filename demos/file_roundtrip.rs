//! Seal a file for a recipient and open it again.
//!
//! Writes three artifacts next to a temp plaintext: the ciphertext, the
//! base64 wrapped-key sidecar, and the recipient's key text, then walks
//! the whole cycle back to the original bytes.

use std::error::Error;
use std::fs;

use fileseal::hybrid;
use fileseal::prelude::*;
use rand::rngs::OsRng;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir().join("fileseal-demo");
    fs::create_dir_all(&dir)?;

    let plaintext_path = dir.join("message.txt");
    let ciphertext_path = dir.join("message.txt.sealed");
    let sidecar_path = dir.join("message.txt.key");

    fs::write(&plaintext_path, b"meet me at the usual place at noon\n")?;

    // Recipient side: a keypair whose public half is shared as text
    let keypair = RsaKeyPair::generate(&mut OsRng, 1024)?;
    let public_text = keypair.public_key().to_text();

    // Sender side: fresh session key, seal the file, wrap the key
    let session_key = AesKey::generate(&mut OsRng, KeySize::Aes128);
    let plaintext = fs::read(&plaintext_path)?;
    let ciphertext = hybrid::encrypt(&plaintext, &session_key)?;

    let public_key = RsaPublicKey::from_text(&public_text)?;
    let wrapped = hybrid::wrap_key(&session_key, &public_key)?;
    fs::write(&ciphertext_path, &ciphertext)?;
    fs::write(&sidecar_path, hybrid::encode_wrapped_key(&wrapped))?;

    println!("sealed {} bytes -> {}", plaintext.len(), ciphertext_path.display());

    // Recipient side again: unwrap the session key, open the file
    let sidecar = fs::read_to_string(&sidecar_path)?;
    let wrapped = hybrid::decode_wrapped_key(&sidecar)?;
    let recovered_key = hybrid::unwrap_key(&wrapped, keypair.private_key())?;

    let sealed = fs::read(&ciphertext_path)?;
    let recovered = hybrid::decrypt(&sealed, &recovered_key)?;
    assert_eq!(recovered, plaintext);

    println!("opened {} bytes, contents match", recovered.len());
    Ok(())
}
