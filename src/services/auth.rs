//! Account and session management
//!
//! Local accounts keyed by email with Argon2id password hashes. The signed-in
//! user is kept in the session file between invocations.

use tracing::{info, warn};

use crate::audit::AuditRecord;
use crate::crypto::{hash_password, validate_password, verify_password};
use crate::error::{BillError, BillResult};
use crate::models::user::validate_email;
use crate::models::User;
use crate::storage::{Session, Storage};

/// What a new account is created from
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new account and sign it in
    pub fn sign_up(&self, request: SignUp) -> BillResult<User> {
        validate_email(&request.email).map_err(|e| BillError::Validation(e.to_string()))?;
        validate_password(&request.password)?;

        if self.storage.users.get_by_email(&request.email)?.is_some() {
            return Err(BillError::Duplicate {
                entity_type: "User",
                identifier: User::normalize_email(&request.email),
            });
        }

        let hash = hash_password(&request.password)?;
        let user = User::new(&request.email, request.first_name, request.last_name, hash);

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;
        self.storage.record(&AuditRecord::user_created(&user))?;

        self.storage.session.save(&Session::new(user.id))?;
        info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Check credentials and start a session
    ///
    /// Unknown email and wrong password produce the same error.
    pub fn sign_in(&self, email: &str, password: &str) -> BillResult<User> {
        let invalid = || BillError::Auth("Invalid email or password".into());

        let user = self.storage.users.get_by_email(email)?.ok_or_else(invalid)?;
        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "sign-in rejected");
            return Err(invalid());
        }

        self.storage.session.save(&Session::new(user.id))?;
        info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// End the session; returns whether anyone was signed in
    pub fn sign_out(&self) -> BillResult<bool> {
        let was_signed_in = self.storage.session.clear()?;
        if was_signed_in {
            info!("signed out");
        }
        Ok(was_signed_in)
    }

    /// The signed-in user, if any
    ///
    /// A session pointing at a user that no longer exists counts as signed out.
    pub fn current_user(&self) -> BillResult<Option<User>> {
        match self.storage.session.load()? {
            Some(session) => self.storage.users.get(session.user_id),
            None => Ok(None),
        }
    }

    pub fn require_user(&self) -> BillResult<User> {
        self.current_user()?.ok_or(BillError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BillPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn request(email: &str, password: &str) -> SignUp {
        SignUp {
            email: email.into(),
            password: password.into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        }
    }

    #[test]
    fn test_sign_up_signs_in() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        assert!(auth.current_user().unwrap().is_none());
        let user = auth.sign_up(request("Jane@Example.com", "secret1")).unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert_ne!(user.password_hash, "secret1");
        assert_eq!(auth.require_user().unwrap().id, user.id);
    }

    #[test]
    fn test_sign_up_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        assert!(auth.sign_up(request("not-an-email", "secret1")).unwrap_err().is_validation());
        assert!(auth.sign_up(request("jane@example.com", "short")).unwrap_err().is_validation());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.sign_up(request("jane@example.com", "secret1")).unwrap();

        let err = auth.sign_up(request("JANE@example.com", "secret2")).unwrap_err();
        assert!(matches!(err, BillError::Duplicate { .. }));
    }

    #[test]
    fn test_sign_in_and_out() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        let user = auth.sign_up(request("jane@example.com", "secret1")).unwrap();
        assert!(auth.sign_out().unwrap());
        assert!(matches!(auth.require_user(), Err(BillError::NotAuthenticated)));

        assert!(matches!(
            auth.sign_in("jane@example.com", "wrong-pass"),
            Err(BillError::Auth(_))
        ));
        assert!(matches!(
            auth.sign_in("nobody@example.com", "secret1"),
            Err(BillError::Auth(_))
        ));

        let signed_in = auth.sign_in(" jane@example.com ", "secret1").unwrap();
        assert_eq!(signed_in.id, user.id);
        assert_eq!(auth.current_user().unwrap().unwrap().id, user.id);
        assert!(auth.sign_out().unwrap());
        assert!(!auth.sign_out().unwrap());
    }

    #[test]
    fn test_audit_never_contains_password_hash() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.sign_up(request("jane@example.com", "secret1")).unwrap();

        let raw = std::fs::read_to_string(storage.paths().audit_log()).unwrap();
        assert!(raw.contains("jane@example.com"));
        assert!(!raw.contains("password_hash"));
        assert!(!raw.contains("$argon2id$"));
    }
}
