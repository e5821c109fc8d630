//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all bitpad operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → UUIDs)
//! - **Coordinates** the bit store, the account store and the preview
//!   surface (ownership checks, auto-refresh after edits)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic of its own and never touches stdout/stderr.
//!
//! `PlaygroundApi<S: StorageBackend>` is generic over the storage backend:
//! production uses `FileStorage`, tests use `MemoryStorage`.

use crate::accounts::AccountStore;
use crate::commands;
use crate::config::BitpadConfig;
use crate::error::{BitpadError, Result};
use crate::index::BitSelector;
use crate::model::{Bit, BitPatch, User, UserPatch};
use crate::preview::{FileSurface, PreviewRenderer};
use crate::storage::StorageBackend;
use crate::store::BitStore;
use std::path::PathBuf;
use uuid::Uuid;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::create::NewBit;
pub use crate::commands::theme::ThemeAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct PlaygroundApi<S: StorageBackend> {
    bits: BitStore<S>,
    accounts: AccountStore<S>,
    data_dir: PathBuf,
    config: BitpadConfig,
}

impl<S: StorageBackend> PlaygroundApi<S> {
    /// Opens both stores over their backends and loads the config living
    /// in `data_dir`.
    pub fn open(bits_backend: S, accounts_backend: S, data_dir: PathBuf) -> Result<Self> {
        let config = BitpadConfig::load(&data_dir)?;
        Ok(Self {
            bits: BitStore::open(bits_backend)?,
            accounts: AccountStore::open(accounts_backend),
            data_dir,
            config,
        })
    }

    // --- Accounts ---

    pub fn register(&mut self, username: &str, email: &str, secret: &str) -> Result<CmdResult> {
        commands::account::register(&mut self.accounts, username, email, secret)
    }

    pub fn login(&mut self, email: &str, secret: &str) -> Result<CmdResult> {
        commands::account::login(&mut self.accounts, email, secret)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::account::logout(&mut self.accounts)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::account::whoami(&self.accounts)
    }

    pub fn update_account(&mut self, patch: &UserPatch) -> Result<CmdResult> {
        commands::account::update(&mut self.accounts, patch)
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<CmdResult> {
        commands::theme::run(&mut self.accounts, action)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.accounts.current_user()
    }

    // --- Bits ---

    pub fn create_bit(&mut self, new_bit: NewBit) -> Result<CmdResult> {
        let author = self.require_user()?;
        commands::create::run(&mut self.bits, &author, new_bit)
    }

    pub fn list_mine(&self) -> Result<CmdResult> {
        let user = self.require_user()?;
        commands::list::run(&self.bits, user.id)
    }

    pub fn explore(&self) -> Result<CmdResult> {
        commands::explore::run(&self.bits)
    }

    /// Detail view: resolves, bumps the view counter, returns the bit.
    pub fn view_bit(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        commands::view::run(&mut self.bits, id)
    }

    /// Read-only lookup for UI flows that need a bit's current fields
    /// without counting a view (e.g. pre-filling the editor).
    pub fn get_bit(&self, selector: &str) -> Result<Bit> {
        let id = self.resolve(selector)?;
        Ok(self.bits.get(id).expect("resolved id exists").clone())
    }

    /// Applies a partial update, then re-presents the bit's preview
    /// surface when one has been materialized and auto-refresh is on.
    pub fn update_bit(&mut self, selector: &str, patch: &BitPatch) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        let mut result = commands::update::run(&mut self.bits, id, patch)?;

        if self.config.auto_refresh && !result.affected_bits.is_empty() {
            if let Some(path) = self.refresh_preview(id)? {
                result.add_message(CmdMessage::info(format!(
                    "Preview refreshed: {}",
                    path.display()
                )));
                result.preview_paths.push(path);
            }
        }
        Ok(result)
    }

    pub fn delete_bit(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        let result = commands::delete::run(&mut self.bits, id)?;
        // A stale surface would keep showing the deleted bit.
        let _ = std::fs::remove_file(self.preview_path(id));
        Ok(result)
    }

    pub fn set_visibility(&mut self, selector: &str, public: bool) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        commands::publish::set_visibility(&mut self.bits, id, public)
    }

    /// Composes the bit's document and presents it on its file surface.
    pub fn render_preview(&mut self, selector: &str) -> Result<CmdResult> {
        let id = self.resolve(selector)?;
        let mut renderer = PreviewRenderer::new(FileSurface::new(self.preview_path(id)));
        commands::preview::run(&self.bits, &mut renderer, id)
    }

    /// Where the preview surface for a bit materializes.
    pub fn preview_path(&self, id: Uuid) -> PathBuf {
        self.data_dir
            .join(&self.config.preview_dir)
            .join(format!("bit-{}.html", id))
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Resolves a selector string (display index or UUID) to a bit id.
    pub fn resolve(&self, selector: &str) -> Result<Uuid> {
        let parsed = selector
            .parse::<BitSelector>()
            .map_err(BitpadError::Api)?;
        commands::helpers::resolve_selector(
            &self.bits,
            self.accounts.current_user().map(|u| u.id),
            &parsed,
        )
    }

    fn require_user(&self) -> Result<User> {
        self.accounts
            .current_user()
            .cloned()
            .ok_or_else(|| {
                BitpadError::Api(
                    "Not signed in (run 'bitpad register' or 'bitpad login' first)".to_string(),
                )
            })
    }

    fn refresh_preview(&mut self, id: Uuid) -> Result<Option<PathBuf>> {
        let path = self.preview_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let mut renderer = PreviewRenderer::new(FileSurface::new(path.clone()));
        commands::preview::run(&self.bits, &mut renderer, id)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    fn open_api(dir: &std::path::Path) -> PlaygroundApi<MemoryStorage> {
        PlaygroundApi::open(
            MemoryStorage::new(),
            MemoryStorage::new(),
            dir.to_path_buf(),
        )
        .unwrap()
    }

    fn signed_in_api(dir: &std::path::Path) -> PlaygroundApi<MemoryStorage> {
        let mut api = open_api(dir);
        api.register("tester", "t@x.com", "secret").unwrap();
        api
    }

    #[test]
    fn creating_requires_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = open_api(dir.path());
        let result = api.create_bit(NewBit {
            title: "X".into(),
            ..NewBit::default()
        });
        assert!(matches!(result, Err(BitpadError::Api(_))));
    }

    #[test]
    fn create_list_view_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = signed_in_api(dir.path());

        api.create_bit(NewBit {
            title: "Mine".into(),
            html: "<p>hi</p>".into(),
            ..NewBit::default()
        })
        .unwrap();

        let listed = api.list_mine().unwrap();
        assert_eq!(listed.listed_bits.len(), 1);

        let viewed = api.view_bit("1").unwrap();
        assert_eq!(viewed.affected_bits[0].views, 1);
    }

    #[test]
    fn publish_moves_a_bit_into_explore() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = signed_in_api(dir.path());
        api.create_bit(NewBit {
            title: "Soon public".into(),
            ..NewBit::default()
        })
        .unwrap();

        let before = api.explore().unwrap().listed_bits.len();
        api.set_visibility("1", true).unwrap();
        let after = api.explore().unwrap();
        assert_eq!(after.listed_bits.len(), before + 1);
        assert_eq!(after.listed_bits[0].bit.title, "Soon public");
    }

    #[test]
    fn preview_renders_to_the_bit_surface_and_edit_refreshes_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = signed_in_api(dir.path());
        api.create_bit(NewBit {
            title: "Previewed".into(),
            html: "<p>v1</p>".into(),
            ..NewBit::default()
        })
        .unwrap();

        let rendered = api.render_preview("1").unwrap();
        let path = rendered.preview_paths[0].clone();
        assert!(path.exists());
        assert!(std::fs::read_to_string(&path).unwrap().contains("<p>v1</p>"));

        let patch = BitPatch {
            html: Some("<p>v2</p>".into()),
            ..BitPatch::default()
        };
        let updated = api.update_bit("1", &patch).unwrap();
        assert_eq!(updated.preview_paths, vec![path.clone()]);
        assert!(std::fs::read_to_string(&path).unwrap().contains("<p>v2</p>"));
    }

    #[test]
    fn delete_removes_the_stale_surface() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = signed_in_api(dir.path());
        api.create_bit(NewBit {
            title: "Gone soon".into(),
            ..NewBit::default()
        })
        .unwrap();

        let rendered = api.render_preview("1").unwrap();
        let path = rendered.preview_paths[0].clone();
        assert!(path.exists());

        api.delete_bit("1").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn selector_parse_errors_are_api_errors() {
        let dir = tempfile::tempdir().unwrap();
        let api = open_api(dir.path());
        assert!(matches!(
            api.resolve("not-a-selector"),
            Err(BitpadError::Api(_))
        ));
    }
}
