use crate::core::config::AuthMode;
use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Produce the stored form of a password for the given auth mode.
///
/// `Hashed` yields a PHC-format argon2id string with a fresh random salt.
/// `PlaintextLegacy` stores the secret verbatim; this reproduces the legacy
/// deployments and is insecure.
pub fn seal_password(mode: AuthMode, password: &str) -> Result<String> {
    match mode {
        AuthMode::Hashed => {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| anyhow!("Failed to hash password: {e}"))
        }
        AuthMode::PlaintextLegacy => Ok(password.to_string()),
    }
}

/// Compare a supplied password against its stored form.
pub fn check_password(mode: AuthMode, supplied: &str, stored: &str) -> Result<bool> {
    match mode {
        AuthMode::Hashed => {
            let parsed = PasswordHash::new(stored)
                .map_err(|e| anyhow!("Stored password hash is malformed: {e}"))?;

            Ok(Argon2::default()
                .verify_password(supplied.as_bytes(), &parsed)
                .is_ok())
        }
        AuthMode::PlaintextLegacy => Ok(constant_time_eq(supplied, stored)),
    }
}

/// Constant-time string comparison.
///
/// Even legacy plaintext rows should not leak secret prefixes through timing.
fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
