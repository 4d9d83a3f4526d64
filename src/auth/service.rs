//! Login service
//!
//! Composes credential validation, repository lookup and password
//! verification into a single synchronous authentication decision.

use log::{debug, error, warn};

use super::credentials::{Credentials, Person};
use super::results::Session;
use super::validator::validate_credentials;
use crate::error::LoginError;
use crate::repository::Repository;

/// Compares a stored password hash against a submitted plaintext password
pub type PasswordVerifier = Box<dyn Fn(&str, &str) -> bool>;

/// Authenticates credentials against a person repository
///
/// Stateless across calls; each `login` is a single pass through
/// validation, lookup and verification, with no retries anywhere.
pub struct LoginService<R: Repository<Person>> {
    repo: R,
    verify: PasswordVerifier,
}

impl<R: Repository<Person>> LoginService<R> {
    /// Service comparing the stored hash and submitted password by exact
    /// string equality
    ///
    /// The default verifier performs no hashing. Deployments with real
    /// password hashing plug their own comparison via [`with_verifier`].
    ///
    /// [`with_verifier`]: LoginService::with_verifier
    pub fn new(repo: R) -> Self {
        Self::with_verifier(repo, |stored, submitted| stored == submitted)
    }

    /// Service with a caller-supplied password verifier
    pub fn with_verifier(repo: R, verify: impl Fn(&str, &str) -> bool + 'static) -> Self {
        Self {
            repo,
            verify: Box::new(verify),
        }
    }

    /// Authenticates one login attempt
    ///
    /// Outcomes: `Ok(Session)` on success, otherwise `ValidationFailed`
    /// (malformed credentials), `Unauthorized` (unknown email or wrong
    /// password) or `ServerFailure` (backing store failed). Unsanitized
    /// input never reaches the repository.
    pub fn login(&self, credentials: &Credentials) -> Result<Session, LoginError> {
        let sanitized = validate_credentials(credentials)?;

        let Some(person) = self.find_person(&sanitized.email)? else {
            warn!("login rejected: unknown email");
            return Err(LoginError::Unauthorized("Unknown email".to_string()));
        };

        if !(self.verify)(&person.password_hash, &sanitized.plain_password) {
            warn!("login rejected for person {}: wrong password", person.id);
            return Err(LoginError::Unauthorized("Wrong password".to_string()));
        }

        debug!("login succeeded for person {}", person.id);
        Ok(Session {
            user_id: person.id,
        })
    }

    /// Looks up a person by sanitized email, translating storage failures
    ///
    /// Raw repository errors never escape the service.
    fn find_person(&self, email: &str) -> Result<Option<Person>, LoginError> {
        self.repo.get(email).map_err(|e| {
            error!("person lookup failed: {}", e);
            LoginError::ServerFailure("DB error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FaultyRepository, VecRepository};

    fn seeded_service() -> LoginService<VecRepository<Person>> {
        let repo = VecRepository::with_items(
            |person: &Person, email: &str| person.email == email,
            vec![Person {
                id: "user-1".to_string(),
                email: "valid@test.com".to_string(),
                password_hash: "aB.456789012".to_string(),
                status: "active".to_string(),
            }],
        );
        LoginService::new(repo)
    }

    #[test]
    fn test_login_succeeds_with_matching_credentials() {
        let service = seeded_service();
        let session = service
            .login(&Credentials::new("valid@test.com", "aB.456789012"))
            .unwrap();
        assert_eq!(session.user_id, "user-1");
    }

    #[test]
    fn test_login_sanitizes_before_lookup() {
        let service = seeded_service();
        let session = service
            .login(&Credentials::new("  VALID@TEST.COM  ", "  aB.456789012  "))
            .unwrap();
        assert_eq!(session.user_id, "user-1");
    }

    #[test]
    fn test_login_with_unknown_email() {
        let service = seeded_service();
        let error = service
            .login(&Credentials::new("unknown@test.com", "aB.456789012"))
            .unwrap_err();
        assert_eq!(error, LoginError::Unauthorized("Unknown email".to_string()));
    }

    #[test]
    fn test_login_with_wrong_password() {
        let service = seeded_service();
        let error = service
            .login(&Credentials::new("valid@test.com", "WrongPass123."))
            .unwrap_err();
        assert_eq!(error, LoginError::Unauthorized("Wrong password".to_string()));
    }

    #[test]
    fn test_login_with_invalid_credentials_skips_lookup() {
        // A faulty repository would turn any lookup into ServerFailure;
        // validation must fail first.
        let service = LoginService::new(FaultyRepository::<Person>::new());
        let error = service.login(&Credentials::new("", "")).unwrap_err();
        match error {
            LoginError::ValidationFailed(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_login_translates_repository_failure() {
        let service = LoginService::new(FaultyRepository::<Person>::new());
        let error = service
            .login(&Credentials::new("valid@test.com", "aB.456789012"))
            .unwrap_err();
        assert_eq!(error, LoginError::ServerFailure("DB error".to_string()));
    }

    #[test]
    fn test_login_with_custom_verifier() {
        let repo = VecRepository::with_items(
            |person: &Person, email: &str| person.email == email,
            vec![Person {
                id: "user-2".to_string(),
                email: "valid@test.com".to_string(),
                // Reversed password, matched only by the custom verifier.
                password_hash: "210987654.Ba".to_string(),
                status: "active".to_string(),
            }],
        );
        let service = LoginService::with_verifier(repo, |stored, submitted| {
            stored.chars().rev().collect::<String>() == submitted
        });

        let session = service
            .login(&Credentials::new("valid@test.com", "aB.456789012"))
            .unwrap();
        assert_eq!(session.user_id, "user-2");
    }
}
