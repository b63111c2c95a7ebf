//! Credentials and access tokens.
//!
//! - [`password`] -- Argon2id hashes stored in `users.password_hash`.
//! - [`token`] -- HS256 access tokens identifying a user.

pub mod password;
pub mod token;
