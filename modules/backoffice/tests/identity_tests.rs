//! Identity workflow tests: registration, login, profile, password reset

mod common;

use backoffice::contract::{DomainError, NewUser, ProfilePatch, Role};
use backoffice::domain::repository::UserRepository;
use chrono::{Duration, Utc};
use common::{create_identity_service_with_repos, credentials, registration, TEST_JWT_SECRET};
use motorparts_auth::TokenService;
use sha2::{Digest, Sha256};

// ===== Registration =====

#[tokio::test]
async fn registration_yields_an_employee_and_a_valid_token() {
    let (service, _, _) = create_identity_service_with_repos();

    let (user, token) = service.register(&registration("jean@garage.fr")).await.unwrap();

    assert_eq!(user.role, Role::Employee);
    assert_eq!(user.email, "jean@garage.fr");

    let claims = TokenService::new(TEST_JWT_SECRET).verify(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, "jean@garage.fr");
    assert_eq!(claims.role, "employee");
}

#[tokio::test]
async fn emails_are_unique_across_users() {
    let (service, _, _) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();

    let err = service
        .register(&registration("jean@garage.fr"))
        .await
        .unwrap_err();

    match err {
        DomainError::Duplicate { field, value } => {
            assert_eq!(field, "email");
            assert_eq!(value, "jean@garage.fr");
        }
        other => panic!("expected Duplicate, got {:?}", other),
    }
}

#[tokio::test]
async fn registration_validates_email_and_password() {
    let (service, _, _) = create_identity_service_with_repos();

    let mut input = registration("pas-un-email");
    let err = service.register(&input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    input = registration("jean@garage.fr");
    input.password = Some("abc".to_string());
    let err = service.register(&input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn registration_enumerates_missing_fields() {
    let (service, _, _) = create_identity_service_with_repos();

    let err = service
        .register(&NewUser {
            first_name: Some("Jean".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        DomainError::MissingFields { fields } => {
            assert_eq!(fields, ["last_name", "email", "password"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

// ===== Login =====

#[tokio::test]
async fn login_returns_a_verifiable_token() {
    let (service, _, _) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();

    let (user, token) = service
        .login(&credentials("jean@garage.fr", "motdepasse"))
        .await
        .unwrap();

    assert_eq!(user.email, "jean@garage.fr");
    let claims = TokenService::new(TEST_JWT_SECRET).verify(&token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (service, _, _) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();

    let unknown_email = service
        .login(&credentials("inconnu@garage.fr", "motdepasse"))
        .await
        .unwrap_err();
    let wrong_password = service
        .login(&credentials("jean@garage.fr", "mauvais-mdp"))
        .await
        .unwrap_err();

    // Same error either way, so responses cannot probe for accounts
    match (unknown_email, wrong_password) {
        (DomainError::Auth { reason: a }, DomainError::Auth { reason: b }) => {
            assert_eq!(a, b);
        }
        other => panic!("expected two Auth errors, got {:?}", other),
    }
}

#[tokio::test]
async fn verify_token_accepts_its_own_tokens_only() {
    let (service, _, _) = create_identity_service_with_repos();
    let (user, token) = service.register(&registration("jean@garage.fr")).await.unwrap();

    let claims = service.verify_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);

    let err = service.verify_token("pas.un.jwt").unwrap_err();
    assert!(matches!(err, DomainError::Auth { .. }));
}

// ===== Profile =====

#[tokio::test]
async fn profile_updates_patch_only_provided_fields() {
    let (service, _, _) = create_identity_service_with_repos();
    let (user, _) = service.register(&registration("jean@garage.fr")).await.unwrap();

    let updated = service
        .update_profile(
            user.id,
            &ProfilePatch {
                first_name: Some("Marc".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Marc");
    assert_eq!(updated.last_name, "Dupont");
    assert_eq!(updated.email, "jean@garage.fr");
}

#[tokio::test]
async fn profile_email_change_respects_uniqueness() {
    let (service, _, _) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();
    let (user, _) = service.register(&registration("marc@garage.fr")).await.unwrap();

    let err = service
        .update_profile(
            user.id,
            &ProfilePatch {
                email: Some("jean@garage.fr".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Duplicate { .. }));
}

#[tokio::test]
async fn profile_password_change_takes_effect_immediately() {
    let (service, _, _) = create_identity_service_with_repos();
    let (user, _) = service.register(&registration("jean@garage.fr")).await.unwrap();

    service
        .update_profile(
            user.id,
            &ProfilePatch {
                password: Some("nouveau-mdp".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(service
        .login(&credentials("jean@garage.fr", "motdepasse"))
        .await
        .is_err());
    service
        .login(&credentials("jean@garage.fr", "nouveau-mdp"))
        .await
        .unwrap();
}

#[tokio::test]
async fn avatar_path_is_stored_on_the_profile() {
    let (service, _, _) = create_identity_service_with_repos();
    let (user, _) = service.register(&registration("jean@garage.fr")).await.unwrap();

    let updated = service
        .update_avatar(user.id, "/uploads/avatars/abc123.png".to_string())
        .await
        .unwrap();

    assert_eq!(updated.avatar.as_deref(), Some("/uploads/avatars/abc123.png"));
}

// ===== Password reset =====

#[tokio::test]
async fn forgot_password_acknowledges_unknown_emails_without_mailing() {
    let (service, _, mailer) = create_identity_service_with_repos();

    service.forgot_password(Some("inconnu@garage.fr")).await.unwrap();

    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn forgot_password_stores_a_hash_and_mails_a_link() {
    let (service, users, mailer) = create_identity_service_with_repos();
    let (user, _) = service.register(&registration("jean@garage.fr")).await.unwrap();

    service.forgot_password(Some("jean@garage.fr")).await.unwrap();

    let link = mailer.last_link().unwrap();
    assert!(link.starts_with("http://localhost:3000/reset-password/"));

    // Only the hash lands in the store, with an expiry attached
    let row = users.get(user.id).unwrap();
    let token = mailer.last_token().unwrap();
    assert_ne!(row.reset_token_hash.as_deref(), Some(token.as_str()));
    assert!(row.reset_token_hash.is_some());
    assert!(row.reset_expires_at.unwrap() > Utc::now());
}

#[tokio::test]
async fn reset_tokens_are_single_use() {
    let (service, _, mailer) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();
    service.forgot_password(Some("jean@garage.fr")).await.unwrap();
    let token = mailer.last_token().unwrap();

    service.reset_password(&token, Some("nouveau-mdp")).await.unwrap();

    assert!(service
        .login(&credentials("jean@garage.fr", "motdepasse"))
        .await
        .is_err());
    service
        .login(&credentials("jean@garage.fr", "nouveau-mdp"))
        .await
        .unwrap();

    // Replaying the same token fails: it was cleared on first use
    let err = service
        .reset_password(&token, Some("encore-un"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth { .. }));
}

#[tokio::test]
async fn expired_reset_tokens_never_match() {
    let (service, users, _) = create_identity_service_with_repos();
    let (user, _) = service.register(&registration("jean@garage.fr")).await.unwrap();

    // Plant a token whose expiry is already behind us
    let mut row = users.get(user.id).unwrap();
    row.reset_token_hash = Some(hex::encode(Sha256::digest(b"stale-token")));
    row.reset_expires_at = Some(Utc::now() - Duration::seconds(10));
    users.update(&row).await.unwrap();

    let err = service
        .reset_password("stale-token", Some("nouveau-mdp"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth { .. }));
}

#[tokio::test]
async fn reset_requires_a_password() {
    let (service, _, mailer) = create_identity_service_with_repos();
    service.register(&registration("jean@garage.fr")).await.unwrap();
    service.forgot_password(Some("jean@garage.fr")).await.unwrap();
    let token = mailer.last_token().unwrap();

    let err = service.reset_password(&token, None).await.unwrap_err();
    match err {
        DomainError::MissingFields { fields } => assert_eq!(fields, ["password"]),
        other => panic!("expected MissingFields, got {:?}", other),
    }

    // A too-short replacement is rejected before the token is consumed
    let err = service.reset_password(&token, Some("abc")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    service.reset_password(&token, Some("nouveau-mdp")).await.unwrap();
}
