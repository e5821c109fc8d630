use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BitpadError, Result};
use crate::model::{BitDraft, User};
use crate::routes::Route;
use crate::storage::StorageBackend;
use crate::store::BitStore;

/// Fields a caller supplies for a new bit; ownership comes from the
/// signed-in user.
#[derive(Debug, Clone, Default)]
pub struct NewBit {
    pub title: String,
    pub description: String,
    pub html: String,
    pub css: String,
    pub javascript: String,
    pub is_public: bool,
}

pub fn run<S: StorageBackend>(
    bits: &mut BitStore<S>,
    author: &User,
    new_bit: NewBit,
) -> Result<CmdResult> {
    if new_bit.title.is_empty() {
        return Err(BitpadError::Api("Title cannot be empty".into()));
    }

    let id = bits.create(BitDraft {
        title: new_bit.title,
        description: new_bit.description,
        html: new_bit.html,
        css: new_bit.css,
        javascript: new_bit.javascript,
        is_public: new_bit.is_public,
        author_id: author.id,
        author_username: author.username.clone(),
    })?;

    let bit = bits.get(id).expect("freshly created bit").clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Bit created: {}", bit.title)));
    result.add_message(CmdMessage::info(format!(
        "workspace: {}   detail: {}",
        Route::Editor(id),
        Route::Detail(id)
    )));
    result.affected_bits.push(bit);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::storage::memory::MemoryStorage;

    fn author() -> User {
        User::new("tester".into(), "t@x.com".into())
    }

    #[test]
    fn creates_a_bit_owned_by_the_author() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let author = author();
        let result = run(
            &mut store,
            &author,
            NewBit {
                title: "Button".into(),
                html: "<button>go</button>".into(),
                ..NewBit::default()
            },
        )
        .unwrap();

        let bit = &result.affected_bits[0];
        assert_eq!(bit.author_id, author.id);
        assert_eq!(bit.author_username, "tester");
        assert!(!bit.is_public);
        assert_eq!(store.list_by_owner(author.id).len(), 1);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut store = BitStore::open(MemoryStorage::new()).unwrap();
        let result = run(&mut store, &author(), NewBit::default());
        assert!(matches!(result, Err(BitpadError::Api(_))));
    }
}
