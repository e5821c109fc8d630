use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_public;
use crate::storage::StorageBackend;
use crate::store::BitStore;

pub fn run<S: StorageBackend>(bits: &BitStore<S>) -> Result<CmdResult> {
    let listed = index_public(bits.list_public());
    Ok(CmdResult::default().with_listed_bits(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::BitPatch;
    use crate::storage::memory::fixtures::draft;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn explore_shows_public_bits_only() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let hidden = store.create(draft("Hidden")).unwrap();
        let shown = store.create(draft("Shown")).unwrap();
        store.update(shown, &BitPatch::visibility(true)).unwrap();

        let result = run(&store).unwrap();
        // The seeded sample is public too.
        assert_eq!(result.listed_bits.len(), 2);
        assert_eq!(result.listed_bits[0].bit.id, shown);
        assert_eq!(result.listed_bits[0].index, DisplayIndex::Public(1));
        assert!(result.listed_bits.iter().all(|db| db.bit.id != hidden));
    }
}
