use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// One saved unit of HTML+CSS+JS source plus metadata.
///
/// `author_id`/`author_username` are denormalized at creation and never
/// reassigned (no ownership transfer). `likes` is carried in the model and
/// in storage but no operation mutates it yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bit {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub html: String,
    pub css: String,
    pub javascript: String,
    pub is_public: bool,
    pub author_id: Uuid,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
}

impl Bit {
    /// Builds a fresh bit from a draft: new id, both timestamps stamped to
    /// the same instant, counters zeroed.
    pub fn new(draft: BitDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            html: draft.html,
            css: draft.css,
            javascript: draft.javascript,
            is_public: draft.is_public,
            author_id: draft.author_id,
            author_username: draft.author_username,
            created_at: now,
            updated_at: now,
            views: 0,
            likes: 0,
        }
    }

    /// Merges a patch into this bit. Does not touch timestamps; the store
    /// stamps `updated_at` when it persists the change.
    pub fn apply(&mut self, patch: &BitPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(html) = &patch.html {
            self.html = html.clone();
        }
        if let Some(css) = &patch.css {
            self.css = css.clone();
        }
        if let Some(javascript) = &patch.javascript {
            self.javascript = javascript.clone();
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }
}

/// Caller-supplied fields for creating a bit. Identifier, timestamps and
/// counters are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct BitDraft {
    pub title: String,
    pub description: String,
    pub html: String,
    pub css: String,
    pub javascript: String,
    pub is_public: bool,
    pub author_id: Uuid,
    pub author_username: String,
}

/// Partial update for a bit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub javascript: Option<String>,
    pub is_public: Option<bool>,
}

impl BitPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn visibility(is_public: bool) -> Self {
        Self {
            is_public: Some(is_public),
            ..Self::default()
        }
    }
}

/// Public account fields. The login credential lives only in
/// [`StoredAccount`], never here, so a session record carries no secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            theme: Theme::Light,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for the signed-in account.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub theme: Option<Theme>,
}

/// Durable account record: the public fields plus the stored credential.
/// The credential is whatever the configured verifier produced from the
/// registration secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAccount {
    #[serde(flatten)]
    pub user: User,
    pub secret: String,
}
