//! The bit collection and its persistence.
//!
//! [`BitStore`] owns the hydrated collection. The backend value under the
//! `snippets` key is the system of record: the collection is read once at
//! open and the **full** collection is rewritten after every mutation.
//! Mutations are persist-then-commit—the new collection is serialized and
//! written first, and only swapped into memory once the backend accepted
//! it, so a failed write leaves the in-memory state untouched.
//!
//! Not-found never surfaces as an error here: `get` returns `Option`,
//! `update`/`delete`/`increment_views` return `Ok(false)` and leave the
//! collection unchanged. Only backend failures become `Err`.
//!
//! The store is single-owner, single-threaded; a host with concurrent
//! callers needs its own mutual exclusion around the read-modify-persist
//! cycle to keep the last-writer-wins, full-collection semantics.

use crate::error::Result;
use crate::model::{Bit, BitDraft, BitPatch};
use crate::storage::{StorageBackend, KEY_SNIPPETS};
use chrono::Utc;
use uuid::Uuid;

pub struct BitStore<S: StorageBackend> {
    backend: S,
    bits: Vec<Bit>,
}

impl<S: StorageBackend> BitStore<S> {
    /// Hydrates the collection from the backend. An absent or malformed
    /// `snippets` value hydrates as empty; an empty collection is seeded
    /// with one sample public bit before first use.
    pub fn open(backend: S) -> Result<Self> {
        let bits = hydrate(&backend);
        let mut store = Self { backend, bits };
        if store.bits.is_empty() {
            store.persist(vec![sample_bit()])?;
        }
        Ok(store)
    }

    /// Creates a bit from a draft and returns its new id.
    pub fn create(&mut self, draft: BitDraft) -> Result<Uuid> {
        let bit = Bit::new(draft);
        let id = bit.id;
        let mut next = self.bits.clone();
        next.push(bit);
        self.persist(next)?;
        Ok(id)
    }

    /// Merges `patch` into the matching bit and stamps `updated_at`.
    /// Returns `Ok(false)` without persisting when `id` is unknown.
    pub fn update(&mut self, id: Uuid, patch: &BitPatch) -> Result<bool> {
        let mut next = self.bits.clone();
        let Some(bit) = next.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        bit.apply(patch);
        bit.updated_at = Utc::now();
        self.persist(next)?;
        Ok(true)
    }

    /// Removes the matching bit. Returns `Ok(false)` when `id` is unknown.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let mut next = self.bits.clone();
        let before = next.len();
        next.retain(|b| b.id != id);
        if next.len() == before {
            return Ok(false);
        }
        self.persist(next)?;
        Ok(true)
    }

    /// Read-only lookup; no persistence side effect, no view counting.
    pub fn get(&self, id: Uuid) -> Option<&Bit> {
        self.bits.iter().find(|b| b.id == id)
    }

    /// Public bits, most recently updated first (id as the tiebreak).
    pub fn list_public(&self) -> Vec<&Bit> {
        let mut bits: Vec<&Bit> = self.bits.iter().filter(|b| b.is_public).collect();
        sort_by_recency(&mut bits);
        bits
    }

    /// All bits owned by `author_id`, same ordering as [`list_public`].
    ///
    /// [`list_public`]: BitStore::list_public
    pub fn list_by_owner(&self, author_id: Uuid) -> Vec<&Bit> {
        let mut bits: Vec<&Bit> = self
            .bits
            .iter()
            .filter(|b| b.author_id == author_id)
            .collect();
        sort_by_recency(&mut bits);
        bits
    }

    /// Bumps the view counter only. `updated_at` is deliberately left
    /// alone so that merely viewing a bit cannot reorder the recency
    /// listings. Returns `Ok(false)` when `id` is unknown.
    pub fn increment_views(&mut self, id: Uuid) -> Result<bool> {
        let mut next = self.bits.clone();
        let Some(bit) = next.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        bit.views += 1;
        self.persist(next)?;
        Ok(true)
    }

    pub fn all(&self) -> &[Bit] {
        &self.bits
    }

    fn persist(&mut self, next: Vec<Bit>) -> Result<()> {
        let value = serde_json::to_string_pretty(&next)?;
        self.backend.write(KEY_SNIPPETS, &value)?;
        self.bits = next;
        Ok(())
    }
}

fn hydrate<S: StorageBackend>(backend: &S) -> Vec<Bit> {
    // Unreadable or malformed persisted data degrades to an empty
    // collection instead of failing startup.
    match backend.read(KEY_SNIPPETS) {
        Ok(Some(value)) => serde_json::from_str(&value).unwrap_or_default(),
        Ok(None) | Err(_) => Vec::new(),
    }
}

fn sort_by_recency(bits: &mut [&Bit]) {
    bits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
}

/// The bit every fresh store starts with.
fn sample_bit() -> Bit {
    let now = Utc::now();
    Bit {
        id: Uuid::new_v4(),
        title: "Rainbow Button".to_string(),
        description: "A colorful animated button with hover effects".to_string(),
        html: r#"<button class="rainbow-btn">Click me!</button>"#.to_string(),
        css: r#".rainbow-btn {
  background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1, #96ceb4);
  color: white;
  border: none;
  padding: 15px 30px;
  border-radius: 25px;
  font-size: 18px;
  cursor: pointer;
  transition: transform 0.3s ease;
}

.rainbow-btn:hover {
  transform: scale(1.05);
  box-shadow: 0 10px 25px rgba(0,0,0,0.2);
}"#
        .to_string(),
        javascript: r#"document.querySelector(".rainbow-btn").addEventListener("click", () => alert("Hello from BitPad!"));"#
            .to_string(),
        is_public: true,
        author_id: Uuid::nil(),
        author_username: "BitPadTeam".to_string(),
        created_at: now,
        updated_at: now,
        views: 42,
        likes: 8,
    }
}
