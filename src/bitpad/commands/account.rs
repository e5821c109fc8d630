use crate::accounts::{AccountStore, CredentialVerifier};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BitpadError, Result};
use crate::model::UserPatch;
use crate::storage::StorageBackend;

pub fn register<S: StorageBackend, V: CredentialVerifier>(
    accounts: &mut AccountStore<S, V>,
    username: &str,
    email: &str,
    secret: &str,
) -> Result<CmdResult> {
    if username.is_empty() || email.is_empty() {
        return Err(BitpadError::Api("Username and email are required".into()));
    }
    if !accounts.register(username, email, secret)? {
        // Deliberately vague: the caller learns a collision happened, not
        // which field collided.
        return Err(BitpadError::Api(
            "That username or email is already taken".into(),
        ));
    }

    let user = accounts.current_user().expect("just registered").clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Welcome, {}! You are signed in.",
        user.username
    )));
    Ok(result.with_user(user))
}

pub fn login<S: StorageBackend, V: CredentialVerifier>(
    accounts: &mut AccountStore<S, V>,
    email: &str,
    secret: &str,
) -> Result<CmdResult> {
    if !accounts.login(email, secret)? {
        return Err(BitpadError::Api("Invalid email or password".into()));
    }

    let user = accounts.current_user().expect("just signed in").clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Signed in as {}",
        user.username
    )));
    Ok(result.with_user(user))
}

pub fn logout<S: StorageBackend, V: CredentialVerifier>(
    accounts: &mut AccountStore<S, V>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match accounts.current_user() {
        Some(user) => {
            let name = user.username.clone();
            accounts.logout()?;
            result.add_message(CmdMessage::success(format!("Signed out {}", name)));
        }
        None => {
            accounts.logout()?;
            result.add_message(CmdMessage::info("Nobody was signed in"));
        }
    }
    Ok(result)
}

pub fn whoami<S: StorageBackend, V: CredentialVerifier>(
    accounts: &AccountStore<S, V>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match accounts.current_user() {
        Some(user) => {
            result.user = Some(user.clone());
        }
        None => result.add_message(CmdMessage::info("Not signed in")),
    }
    Ok(result)
}

pub fn update<S: StorageBackend, V: CredentialVerifier>(
    accounts: &mut AccountStore<S, V>,
    patch: &UserPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !accounts.update_user(patch)? {
        result.add_message(CmdMessage::warning("Not signed in; nothing updated"));
        return Ok(result);
    }

    let user = accounts.current_user().expect("still signed in").clone();
    result.add_message(CmdMessage::success("Account updated"));
    Ok(result.with_user(user))
}
