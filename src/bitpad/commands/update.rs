use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BitPatch;
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

pub fn run<S: StorageBackend>(
    bits: &mut BitStore<S>,
    id: Uuid,
    patch: &BitPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result);
    }

    if !bits.update(id, patch)? {
        result.add_message(CmdMessage::warning(format!("Bit not found: {}", id)));
        return Ok(result);
    }

    let bit = bits.get(id).expect("just updated").clone();
    result.add_message(CmdMessage::success(format!("Bit updated: {}", bit.title)));
    result.affected_bits.push(bit);
    Ok(result)
}
