use tradecart::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let result = hash_password("correct horse battery staple");

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_hash_is_not_the_plaintext() {
    let password = "hunter2hunter2";
    let hash = hash_password(password).unwrap();

    assert_ne!(hash, password);
    assert!(!hash.contains(password));
}

#[test]
fn test_same_password_hashes_differently() {
    // bcrypt embeds a random salt, so two hashes of the same input must
    // not collide.
    let password = "same-password-twice";
    let first = hash_password(password).unwrap();
    let second = hash_password(password).unwrap();

    assert_ne!(first, second);
    assert!(verify_password(password, &first).unwrap());
    assert!(verify_password(password, &second).unwrap());
}

#[test]
fn test_verify_password_round_trip() {
    let password = "my_secure_password_123";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_password_rejects_wrong_password() {
    let hash = hash_password("the-real-password").unwrap();

    assert!(!verify_password("not-the-password", &hash).unwrap());
}

#[test]
fn test_verify_password_is_case_sensitive() {
    let hash = hash_password("Password123").unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash_is_error() {
    let result = verify_password("whatever", "not-a-bcrypt-hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_password_handles_unicode() {
    let password = "pässwörd-日本語-🦀";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("password", &hash).unwrap());
}

#[test]
fn test_hash_password_empty_string() {
    // Content rules live in request validation; the hasher itself accepts
    // any input, empty included.
    let hash = hash_password("").unwrap();

    assert!(verify_password("", &hash).unwrap());
    assert!(!verify_password("a", &hash).unwrap());
}

#[test]
fn test_hash_password_handles_long_input() {
    // bcrypt only considers the first 72 bytes; hashing longer input must
    // still succeed rather than error out.
    let password = "x".repeat(100);
    let result = hash_password(&password);

    assert!(result.is_ok());
}
