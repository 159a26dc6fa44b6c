use argon2::Argon2;
use password_hash::PasswordHash;

use crate::utils::error::AppError;

/// Hashes a registration password into an Argon2 PHC string.
pub fn make_password_hash(password: &str) -> Result<String, AppError> {
    let salt = password_hash::SaltString::generate(rand::thread_rng());
    let hash = PasswordHash::generate(Argon2::default(), password, &salt)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_a_parseable_phc_string() {
        let hash = make_password_hash("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(PasswordHash::new(&hash).is_ok());
    }

    #[test]
    fn hash_never_equals_the_raw_password() {
        let password = "correct horse battery staple";
        let hash = make_password_hash(password).unwrap();
        assert_ne!(hash, password);
    }

    #[test]
    fn salts_make_hashes_unique() {
        let a = make_password_hash("same password").unwrap();
        let b = make_password_hash("same password").unwrap();
        assert_ne!(a, b);
    }
}
