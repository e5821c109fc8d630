//! The simulated account system: registration, login, session and theme
//! preference over the `accounts`, `current_session` and
//! `theme_preference` keys.
//!
//! Accounts are a **local simulation**, not an authentication boundary.
//! Credentials still go through the [`CredentialVerifier`] seam so that a
//! real scheme could replace [`PlaintextVerifier`] without touching the
//! store contract. Registration and login failures are boolean results;
//! only backend failures become `Err`.

use crate::error::Result;
use crate::model::{StoredAccount, Theme, User, UserPatch};
use crate::storage::{
    StorageBackend, KEY_ACCOUNTS, KEY_CURRENT_SESSION, KEY_THEME_PREFERENCE,
};

/// Turns a registration secret into its stored form and checks a login
/// attempt against it.
pub trait CredentialVerifier {
    fn store(&self, secret: &str) -> String;
    fn verify(&self, secret: &str, stored: &str) -> bool;
}

/// Stores and compares secrets verbatim. This is the whole reason the
/// account system is only a simulation; swap in a hashing verifier before
/// pointing the store at anything real.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn store(&self, secret: &str) -> String {
        secret.to_string()
    }

    fn verify(&self, secret: &str, stored: &str) -> bool {
        secret == stored
    }
}

pub struct AccountStore<S: StorageBackend, V: CredentialVerifier = PlaintextVerifier> {
    backend: S,
    verifier: V,
    accounts: Vec<StoredAccount>,
    session: Option<User>,
}

impl<S: StorageBackend> AccountStore<S> {
    pub fn open(backend: S) -> Self {
        Self::with_verifier(backend, PlaintextVerifier)
    }
}

impl<S: StorageBackend, V: CredentialVerifier> AccountStore<S, V> {
    /// Hydrates accounts and session from the backend. Malformed or
    /// unreadable values hydrate as empty/signed-out.
    pub fn with_verifier(backend: S, verifier: V) -> Self {
        let accounts = match backend.read(KEY_ACCOUNTS) {
            Ok(Some(value)) => serde_json::from_str(&value).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        };
        let session = match backend.read(KEY_CURRENT_SESSION) {
            Ok(Some(value)) => serde_json::from_str(&value).ok(),
            Ok(None) | Err(_) => None,
        };
        Self {
            backend,
            verifier,
            accounts,
            session,
        }
    }

    /// Creates an account and signs the caller in. Returns `Ok(false)`
    /// when the username or email is already taken; nothing is persisted
    /// in that case.
    pub fn register(&mut self, username: &str, email: &str, secret: &str) -> Result<bool> {
        let taken = self
            .accounts
            .iter()
            .any(|a| a.user.username == username || a.user.email == email);
        if taken {
            return Ok(false);
        }

        let user = User::new(username.to_string(), email.to_string());
        let mut next = self.accounts.clone();
        next.push(StoredAccount {
            user: user.clone(),
            secret: self.verifier.store(secret),
        });
        self.persist_accounts(next)?;
        self.persist_session(Some(user))?;
        Ok(true)
    }

    /// Signs in on an exact email match with an accepted credential.
    /// Returns `Ok(false)` otherwise; no session is established.
    pub fn login(&mut self, email: &str, secret: &str) -> Result<bool> {
        let found = self
            .accounts
            .iter()
            .find(|a| a.user.email == email && self.verifier.verify(secret, &a.secret));
        match found {
            Some(account) => {
                let user = account.user.clone();
                self.persist_session(Some(user))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears the signed-in session. Signing out when already signed out
    /// is fine.
    pub fn logout(&mut self) -> Result<()> {
        self.backend.remove(KEY_CURRENT_SESSION)?;
        self.session = None;
        Ok(())
    }

    /// Merges `patch` into the signed-in account, its durable entry and
    /// the session record. Returns `Ok(false)` when nobody is signed in.
    pub fn update_user(&mut self, patch: &UserPatch) -> Result<bool> {
        let Some(current) = &self.session else {
            return Ok(false);
        };
        let id = current.id;

        let mut updated = current.clone();
        if let Some(username) = &patch.username {
            updated.username = username.clone();
        }
        if let Some(email) = &patch.email {
            updated.email = email.clone();
        }
        if let Some(theme) = patch.theme {
            updated.theme = theme;
        }

        let mut next = self.accounts.clone();
        if let Some(account) = next.iter_mut().find(|a| a.user.id == id) {
            account.user = updated.clone();
        }
        self.persist_accounts(next)?;
        self.persist_session(Some(updated))?;
        Ok(true)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// The effective theme: the signed-in user's, else the signed-out
    /// preference, else light.
    pub fn theme(&self) -> Theme {
        if let Some(user) = &self.session {
            return user.theme;
        }
        match self.backend.read(KEY_THEME_PREFERENCE) {
            Ok(Some(value)) => serde_json::from_str(&value).unwrap_or(Theme::Light),
            _ => Theme::Light,
        }
    }

    /// Routes to the account when signed in, to the standalone preference
    /// key otherwise.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        if self.session.is_some() {
            self.update_user(&UserPatch {
                theme: Some(theme),
                ..UserPatch::default()
            })?;
        } else {
            let value = serde_json::to_string(&theme)?;
            self.backend.write(KEY_THEME_PREFERENCE, &value)?;
        }
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    fn persist_accounts(&mut self, next: Vec<StoredAccount>) -> Result<()> {
        let value = serde_json::to_string_pretty(&next)?;
        self.backend.write(KEY_ACCOUNTS, &value)?;
        self.accounts = next;
        Ok(())
    }

    fn persist_session(&mut self, session: Option<User>) -> Result<()> {
        match &session {
            Some(user) => {
                let value = serde_json::to_string_pretty(user)?;
                self.backend.write(KEY_CURRENT_SESSION, &value)?;
            }
            None => self.backend.remove(KEY_CURRENT_SESSION)?,
        }
        self.session = session;
        Ok(())
    }
}
