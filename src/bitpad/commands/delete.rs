use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

pub fn run<S: StorageBackend>(bits: &mut BitStore<S>, id: Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let title = match bits.get(id) {
        Some(bit) => bit.title.clone(),
        None => {
            result.add_message(CmdMessage::warning(format!("Bit not found: {}", id)));
            return Ok(result);
        }
    };

    bits.delete(id)?;
    result.add_message(CmdMessage::success(format!("Bit deleted: {}", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::fixtures::draft;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn deletes_and_reports_the_title() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let id = store.create(draft("Goner")).unwrap();

        let result = run(&mut store, id).unwrap();
        assert!(result.messages[0].content.contains("Goner"));
        assert!(store.get(id).is_none());
    }

    #[test]
    fn unknown_id_leaves_collection_unchanged() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let before = store.all().len();
        run(&mut store, Uuid::new_v4()).unwrap();
        assert_eq!(store.all().len(), before);
    }
}
