use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BitPatch;
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

pub fn set_visibility<S: StorageBackend>(
    bits: &mut BitStore<S>,
    id: Uuid,
    public: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !bits.update(id, &BitPatch::visibility(public))? {
        result.add_message(CmdMessage::warning(format!("Bit not found: {}", id)));
        return Ok(result);
    }

    let bit = bits.get(id).expect("just updated").clone();
    let verb = if public { "published" } else { "unpublished" };
    result.add_message(CmdMessage::success(format!("Bit {}: {}", verb, bit.title)));
    result.affected_bits.push(bit);
    Ok(result)
}
