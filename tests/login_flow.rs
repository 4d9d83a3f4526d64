//! End-to-end login flow against in-memory and fault-injected repositories.

use auth_core::auth::store::{person_row_binder, person_row_mapper};
use auth_core::repository::{FaultyRepository, SqliteRepository, VecRepository};
use auth_core::{Credentials, LoginError, LoginService, Person};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seeded_person() -> Person {
    Person {
        id: "user-1".to_string(),
        email: "valid@test.com".to_string(),
        password_hash: "aB.456789012".to_string(),
        status: "active".to_string(),
    }
}

fn vec_backed_service() -> LoginService<VecRepository<Person>> {
    let repo = VecRepository::with_items(
        |person: &Person, email: &str| person.email == email,
        vec![seeded_person()],
    );
    LoginService::new(repo)
}

#[test]
fn test_login_success_returns_session_for_seeded_user() {
    init_logging();
    let service = vec_backed_service();

    let session = service
        .login(&Credentials::new("valid@test.com", "aB.456789012"))
        .unwrap();
    assert_eq!(session.user_id, "user-1");
}

#[test]
fn test_login_normalizes_email_before_lookup() {
    init_logging();
    let service = vec_backed_service();

    let session = service
        .login(&Credentials::new("  VALID@TEST.COM  ", "aB.456789012"))
        .unwrap();
    assert_eq!(session.user_id, "user-1");
}

#[test]
fn test_login_unknown_email_is_unauthorized() {
    init_logging();
    let service = vec_backed_service();

    let error = service
        .login(&Credentials::new("unknown@test.com", "aB.456789012"))
        .unwrap_err();
    assert_eq!(error, LoginError::Unauthorized("Unknown email".to_string()));
}

#[test]
fn test_login_wrong_password_is_unauthorized() {
    init_logging();
    let service = vec_backed_service();

    let error = service
        .login(&Credentials::new("valid@test.com", "WrongPass123."))
        .unwrap_err();
    assert_eq!(error, LoginError::Unauthorized("Wrong password".to_string()));
}

#[test]
fn test_login_empty_credentials_fail_validation_on_both_fields() {
    init_logging();
    let service = vec_backed_service();

    let error = service.login(&Credentials::new("", "")).unwrap_err();
    let LoginError::ValidationFailed(errors) = error else {
        panic!("expected ValidationFailed, got {:?}", error);
    };

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "email");
    assert_eq!(errors[0].message, "Email must be at least 6 characters");
    assert_eq!(errors[1].field, "plainPassword");
    assert_eq!(errors[1].message, "Password must be at least 12 characters");
}

#[test]
fn test_login_repository_fault_surfaces_as_server_failure() {
    init_logging();
    let service = LoginService::new(FaultyRepository::<Person>::new());

    let error = service
        .login(&Credentials::new("valid@test.com", "aB.456789012"))
        .unwrap_err();
    assert_eq!(error, LoginError::ServerFailure("DB error".to_string()));
}

#[test]
fn test_login_against_sqlite_backed_repository() {
    init_logging();
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE persons (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            status TEXT NOT NULL
        )",
        [],
    )
    .unwrap();

    let repo = SqliteRepository::with_owned_connection(conn, "persons", "email", person_row_mapper);
    repo.insert(&seeded_person(), person_row_binder).unwrap();

    let service = LoginService::new(repo);
    let session = service
        .login(&Credentials::new("VALID@TEST.COM", "aB.456789012"))
        .unwrap();
    assert_eq!(session.user_id, "user-1");

    let error = service
        .login(&Credentials::new("unknown@test.com", "aB.456789012"))
        .unwrap_err();
    assert_eq!(error, LoginError::Unauthorized("Unknown email".to_string()));
}
