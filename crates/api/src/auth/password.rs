//! Argon2id hashing for the three credential tables: Clave Única (SGD),
//! portal credentials (TGR) and dashboard administrators (back).
//!
//! Stored values are PHC strings, so salt and cost parameters are read back
//! from the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Longest password the login endpoints accept.
pub const MAX_PASSWORD_LEN: usize = 255;

pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
}

/// `Ok(false)` on a mismatch; `Err` only for a stored value that is not PHC.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let phc = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &phc) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Non-empty and at most [`MAX_PASSWORD_LEN`] bytes.
pub fn is_acceptable_length(password: &str) -> bool {
    !password.is_empty() && password.len() <= MAX_PASSWORD_LEN
}
