use crate::error::{BitpadError, Result};
use crate::index::{BitSelector, DisplayIndex};
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

/// Resolves a user-facing selector to a stable id.
///
/// `owner` is the signed-in user, needed only for `Mine` indexes. Raw ids
/// are checked for existence so callers get a proper not-found instead of
/// a silent downstream no-op.
pub fn resolve_selector<S: StorageBackend>(
    bits: &BitStore<S>,
    owner: Option<Uuid>,
    selector: &BitSelector,
) -> Result<Uuid> {
    match selector {
        BitSelector::Id(id) => {
            if bits.get(*id).is_none() {
                return Err(BitpadError::BitNotFound(*id));
            }
            Ok(*id)
        }
        BitSelector::Index(DisplayIndex::Mine(n)) => {
            let owner = owner.ok_or_else(|| {
                BitpadError::Api("Sign in to address your bits by index".to_string())
            })?;
            let mine = bits.list_by_owner(owner);
            mine.get(n.wrapping_sub(1))
                .map(|b| b.id)
                .ok_or_else(|| BitpadError::Api(format!("No such bit: {}", selector)))
        }
        BitSelector::Index(DisplayIndex::Public(n)) => {
            let public = bits.list_public();
            public
                .get(n.wrapping_sub(1))
                .map(|b| b.id)
                .ok_or_else(|| BitpadError::Api(format!("No such bit: {}", selector)))
        }
    }
}
