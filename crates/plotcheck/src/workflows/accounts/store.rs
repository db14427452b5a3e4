use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Public view of a registered user. Never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Credential backend consulted by the auth routes.
pub trait CredentialStore: Send + Sync {
    fn register(&self, account: NewAccount) -> Result<UserAccount, AccountError>;
    fn authenticate(&self, email: &str, password: &str) -> Result<UserAccount, AccountError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("User already exists with this email")]
    AlreadyRegistered,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("credential store unavailable")]
    Unavailable,
}

struct StoredCredential {
    account: UserAccount,
    salt: String,
    digest: String,
}

/// Process-local store keyed by normalized e-mail address.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    accounts: RwLock<HashMap<String, StoredCredential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn register(&self, account: NewAccount) -> Result<UserAccount, AccountError> {
        let full_name = required("fullName", &account.full_name)?;
        let email = required("email", &account.email)?;
        if account.password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }

        let key = normalize_email(email);
        let mut guard = self
            .accounts
            .write()
            .map_err(|_| AccountError::Unavailable)?;
        if guard.contains_key(&key) {
            return Err(AccountError::AlreadyRegistered);
        }

        let salt = Uuid::new_v4().simple().to_string();
        let digest = hash_password(&salt, &account.password);
        let user = UserAccount {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };

        guard.insert(
            key,
            StoredCredential {
                account: user.clone(),
                salt,
                digest,
            },
        );
        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<UserAccount, AccountError> {
        let guard = self
            .accounts
            .read()
            .map_err(|_| AccountError::Unavailable)?;
        let stored = guard
            .get(&normalize_email(email))
            .ok_or(AccountError::InvalidCredentials)?;

        if hash_password(&stored.salt, password) == stored.digest {
            Ok(stored.account.clone())
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AccountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AccountError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> NewAccount {
        NewAccount {
            full_name: "Asha Kulkarni".to_string(),
            email: "asha@example.org".to_string(),
            password: "surveyor-42".to_string(),
        }
    }

    #[test]
    fn registered_user_can_authenticate() {
        let store = InMemoryCredentialStore::new();
        let user = store.register(asha()).expect("registration succeeds");

        let authenticated = store
            .authenticate("asha@example.org", "surveyor-42")
            .expect("login succeeds");
        assert_eq!(authenticated, user);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn email_lookup_ignores_case_and_whitespace() {
        let store = InMemoryCredentialStore::new();
        store.register(asha()).expect("registration succeeds");

        assert!(store
            .authenticate("  ASHA@Example.org ", "surveyor-42")
            .is_ok());
        let duplicate = NewAccount {
            email: "Asha@Example.org".to_string(),
            ..asha()
        };
        assert_eq!(
            store.register(duplicate),
            Err(AccountError::AlreadyRegistered)
        );
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let store = InMemoryCredentialStore::new();
        store.register(asha()).expect("registration succeeds");

        assert_eq!(
            store.authenticate("asha@example.org", "guess"),
            Err(AccountError::InvalidCredentials)
        );
        assert_eq!(
            store.authenticate("nobody@example.org", "surveyor-42"),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn registration_requires_every_field() {
        let store = InMemoryCredentialStore::new();
        let blank_name = NewAccount {
            full_name: "  ".to_string(),
            ..asha()
        };
        assert_eq!(
            store.register(blank_name),
            Err(AccountError::MissingField("fullName"))
        );
        let blank_password = NewAccount {
            password: String::new(),
            ..asha()
        };
        assert_eq!(
            store.register(blank_password),
            Err(AccountError::MissingField("password"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        assert_ne!(
            hash_password("salt-a", "surveyor-42"),
            hash_password("salt-b", "surveyor-42")
        );
        assert_eq!(hash_password("salt-a", "pw").len(), 64);
    }

    #[test]
    fn serialized_user_has_no_credentials() {
        let store = InMemoryCredentialStore::new();
        let user = store.register(asha()).expect("registration succeeds");
        let json = serde_json::to_value(&user).expect("user encodes");

        assert_eq!(json["fullName"], "Asha Kulkarni");
        assert!(json.get("password").is_none());
        assert!(json.get("salt").is_none());
    }
}
