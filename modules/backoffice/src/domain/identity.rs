//! Identity workflow: registration, login, profile, password reset
//!
//! Passwords are argon2-hashed. Reset tokens are random 32-byte values
//! handed out once; only their SHA-256 is stored, with a one-hour expiry
//! that is part of the lookup predicate.

use crate::contract::{Credentials, DomainError, NewUser, ProfilePatch, Role, User, UserPublic};
use super::mailer::Mailer;
use super::repository::{UserRecord, UserRepository};
use super::validation;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use motorparts_auth::{Claims, TokenService};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Message returned by login on unknown email AND on wrong password,
/// so responses cannot be used to probe for accounts.
const BAD_CREDENTIALS: &str = "e-mail ou mot de passe incorrect";

/// Reset tokens live for one hour
const RESET_TOKEN_TTL_SECS: i64 = 3600;

pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    mailer: Arc<dyn Mailer>,
    /// Base URL the reset link points at
    frontend_url: String,
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        mailer: Arc<dyn Mailer>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            users,
            tokens,
            mailer,
            frontend_url: frontend_url.into(),
        }
    }

    // ===== Registration and login =====

    pub async fn register(&self, input: &NewUser) -> Result<(UserPublic, String), DomainError> {
        let (first_name, last_name, email, password) = match (
            &input.first_name,
            &input.last_name,
            &input.email,
            &input.password,
        ) {
            (Some(f), Some(l), Some(e), Some(p)) => (f, l, e, p),
            _ => {
                return Err(validation::missing_fields(&[
                    ("first_name", input.first_name.is_some()),
                    ("last_name", input.last_name.is_some()),
                    ("email", input.email.is_some()),
                    ("password", input.password.is_some()),
                ]))
            }
        };
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::Duplicate {
                field: "email".to_string(),
                value: email.clone(),
            });
        }

        let record = UserRecord {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: email.clone(),
            password_hash: hash_password(password)?,
            role: Role::Employee,
        };
        let user = self.users.create(&record).await?;
        tracing::info!(user_id = user.id, "user registered");

        let token = self.issue_token(&user)?;
        Ok((user.public(), token))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(UserPublic, String), DomainError> {
        let (email, password) = match (&credentials.email, &credentials.password) {
            (Some(e), Some(p)) => (e, p),
            _ => {
                return Err(validation::missing_fields(&[
                    ("email", credentials.email.is_some()),
                    ("password", credentials.password.is_some()),
                ]))
            }
        };

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(bad_credentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(bad_credentials());
        }

        tracing::info!(user_id = user.id, "user logged in");
        let token = self.issue_token(&user)?;
        Ok((user.public(), token))
    }

    /// Verify a bearer token; used by the REST middleware.
    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.tokens.verify(token).map_err(|err| DomainError::Auth {
            reason: err.to_string(),
        })
    }

    // ===== Profile =====

    pub async fn get_profile(&self, user_id: i32) -> Result<UserPublic, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))?;
        Ok(user.public())
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        patch: &ProfilePatch,
    ) -> Result<UserPublic, DomainError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))?;

        if let Some(email) = &patch.email {
            validation::validate_email(email)?;
            if *email != user.email {
                if let Some(other) = self.users.find_by_email(email).await? {
                    if other.id != user.id {
                        return Err(DomainError::Duplicate {
                            field: "email".to_string(),
                            value: email.clone(),
                        });
                    }
                }
                user.email = email.clone();
            }
        }
        if let Some(first_name) = &patch.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(password) = &patch.password {
            validation::validate_password(password)?;
            user.password_hash = hash_password(password)?;
        }

        let user = self.users.update(&user).await?;
        Ok(user.public())
    }

    /// Store the public path of a freshly uploaded avatar.
    pub async fn update_avatar(&self, user_id: i32, path: String) -> Result<UserPublic, DomainError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))?;
        user.avatar = Some(path);
        let user = self.users.update(&user).await?;
        Ok(user.public())
    }

    // ===== Password reset =====

    /// Start a reset. Succeeds whether or not the email matches an
    /// account; the caller only ever sees a neutral acknowledgement.
    pub async fn forgot_password(&self, email: Option<&str>) -> Result<(), DomainError> {
        let email = email.ok_or_else(|| validation::missing_fields(&[("email", false)]))?;
        validation::validate_email(email)?;

        let Some(mut user) = self.users.find_by_email(email).await? else {
            tracing::info!("password reset requested for unknown email");
            return Ok(());
        };

        let token = generate_reset_token();
        user.reset_token_hash = Some(hash_reset_token(&token));
        user.reset_expires_at = Some(Utc::now() + Duration::seconds(RESET_TOKEN_TTL_SECS));
        self.users.update(&user).await?;

        let link = format!(
            "{}/reset-password/{}",
            self.frontend_url.trim_end_matches('/'),
            token
        );
        self.mailer.send_password_reset(email, &link).await?;
        tracing::info!(user_id = user.id, "password reset token issued");
        Ok(())
    }

    /// Complete a reset. The token is matched through its hash AND its
    /// expiry, then cleared so it cannot be replayed.
    pub async fn reset_password(
        &self,
        token: &str,
        password: Option<&str>,
    ) -> Result<(), DomainError> {
        let password =
            password.ok_or_else(|| validation::missing_fields(&[("password", false)]))?;
        validation::validate_password(password)?;

        let mut user = self
            .users
            .find_by_valid_reset_token(&hash_reset_token(token), Utc::now())
            .await?
            .ok_or_else(|| DomainError::Auth {
                reason: "lien de réinitialisation invalide ou expiré".to_string(),
            })?;

        user.password_hash = hash_password(password)?;
        user.reset_token_hash = None;
        user.reset_expires_at = None;
        self.users.update(&user).await?;

        tracing::info!(user_id = user.id, "password reset completed");
        Ok(())
    }

    fn issue_token(&self, user: &User) -> Result<String, DomainError> {
        self.tokens
            .issue(user.id, &user.email, user.role.as_str())
            .map_err(|err| {
                tracing::error!(error = %err, "token signing failed");
                DomainError::Internal
            })
    }
}

fn bad_credentials() -> DomainError {
    DomainError::Auth {
        reason: BAD_CREDENTIALS.to_string(),
    }
}

fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!(error = %err, "password hashing failed");
            DomainError::Internal
        })
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

/// 32 random bytes, hex-encoded; only its hash is persisted
fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn hash_reset_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
