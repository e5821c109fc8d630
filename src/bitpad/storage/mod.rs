//! # Storage Layer
//!
//! This module defines the durable key-value layer for bitpad. The
//! [`StorageBackend`] trait lets the stores work against different
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStorage` (no filesystem needed)
//! - Allow **future backends** (database, browser storage, etc.) without
//!   changing core logic
//! - Keep the stores **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production file-based storage, one JSON file per
//!   key under the data directory
//! - [`memory::MemoryStorage`]: In-memory storage for testing
//!
//! ## Key Layout
//!
//! Values are UTF-8 JSON documents:
//!
//! ```text
//! snippets          → full ordered collection of bits, rewritten on
//!                     every mutation
//! accounts          → account records (public fields + credential)
//! current_session   → the signed-in account's public fields, absent
//!                     when signed out
//! theme_preference  → "light" | "dark", consulted only when signed out
//! ```
//!
//! A missing key reads as `None`. Backends never interpret values; parsing
//! (and tolerating malformed data) is the stores' job.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the full bit collection is stored.
pub const KEY_SNIPPETS: &str = "snippets";
/// Key under which account records (including credentials) are stored.
pub const KEY_ACCOUNTS: &str = "accounts";
/// Key holding the signed-in user's public fields.
pub const KEY_CURRENT_SESSION: &str = "current_session";
/// Key holding the signed-out theme preference.
pub const KEY_THEME_PREFERENCE: &str = "theme_preference";

/// Abstract durable key-value storage.
///
/// Implementations must make a completed `write` observable by a later
/// `read` of the same key. `remove` on an absent key is not an error.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<()>;
}
