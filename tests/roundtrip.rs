// End-to-end: key generation, key files on disk, block file encryption

use std::fs;

use rsakit::rsa::decrypt::decrypt_file;
use rsakit::rsa::encrypt::encrypt_file;
use rsakit::rsa::keygen::generate_key_pair;
use rsakit::util::keyfile;

#[test]
fn key_files_and_encrypted_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("demo");
    let stem = stem.to_str().unwrap();

    let pair = generate_key_pair(32, 10).unwrap();

    // Persist both halves the way the keygen CLI does.
    let public_file = keyfile::public_path(stem);
    let private_file = keyfile::private_path(stem);
    keyfile::write_public(&public_file, &pair.public).unwrap();
    keyfile::write_private(&private_file, &pair.private).unwrap();

    // Reload from disk; encryption must work from the persisted form.
    let public = keyfile::read_public(&public_file).unwrap();
    let private = keyfile::read_private(&private_file).unwrap();
    assert_eq!(public.n, private.n);

    let plaintext: Vec<u8> = b"And it came to pass that the block cipher \
        round-tripped every byte, including\x00embedded zeros.\n"
        .to_vec();
    let input = dir.path().join("input.txt");
    let encrypted = dir.path().join("encrypted.bin");
    let decrypted = dir.path().join("decrypted.txt");
    fs::write(&input, &plaintext).unwrap();

    encrypt_file(&input, &encrypted, &public).unwrap();
    assert_ne!(fs::read(&encrypted).unwrap(), plaintext);

    decrypt_file(&encrypted, &decrypted, &private).unwrap();
    assert_eq!(fs::read(&decrypted).unwrap(), plaintext);
}

#[test]
fn decryption_with_the_public_exponent_fails_or_garbles() {
    let dir = tempfile::tempdir().unwrap();
    let pair = generate_key_pair(32, 10).unwrap();

    let plaintext = b"not symmetric".to_vec();
    let input = dir.path().join("input.txt");
    let encrypted = dir.path().join("encrypted.bin");
    let decrypted = dir.path().join("decrypted.txt");
    fs::write(&input, &plaintext).unwrap();

    encrypt_file(&input, &encrypted, &pair.public).unwrap();

    // Feed the public exponent where the private one belongs.
    let wrong = rsakit::PrivateKey {
        n: pair.public.n.clone(),
        d: pair.public.e.clone(),
    };
    match decrypt_file(&encrypted, &decrypted, &wrong) {
        Ok(()) => assert_ne!(fs::read(&decrypted).unwrap(), plaintext),
        Err(_) => {}
    }
}
