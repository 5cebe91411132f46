//! Credential handling for billtrack
//!
//! Argon2id password hashes for local accounts, and a zeroizing string type
//! for passwords while they are in memory.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, validate_password, verify_password, MIN_PASSWORD_LEN};
pub use secure_memory::SecureString;
