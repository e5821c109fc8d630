use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_mine;
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

pub fn run<S: StorageBackend>(bits: &BitStore<S>, author_id: Uuid) -> Result<CmdResult> {
    let listed = index_mine(bits.list_by_owner(author_id));
    Ok(CmdResult::default().with_listed_bits(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::storage::memory::fixtures::draft;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn lists_only_the_owners_bits_in_recency_order() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let d1 = draft("Mine");
        let owner = d1.author_id;
        store.create(d1).unwrap();
        store.create(draft("Someone else's")).unwrap();

        let mut d2 = draft("Mine too");
        d2.author_id = owner;
        store.create(d2).unwrap();

        let result = run(&store, owner).unwrap();
        assert_eq!(result.listed_bits.len(), 2);
        assert_eq!(result.listed_bits[0].bit.title, "Mine too");
        assert_eq!(result.listed_bits[0].index, DisplayIndex::Mine(1));
        assert_eq!(result.listed_bits[1].index, DisplayIndex::Mine(2));
    }
}
