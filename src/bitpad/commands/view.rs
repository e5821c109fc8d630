use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

/// Detail view: bumps the view counter, then returns the bit. The counter
/// bump does not touch `updated_at`, so viewing never reorders listings.
pub fn run<S: StorageBackend>(bits: &mut BitStore<S>, id: Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !bits.increment_views(id)? {
        result.add_message(CmdMessage::warning(format!("Bit not found: {}", id)));
        return Ok(result);
    }

    let bit = bits.get(id).expect("just viewed").clone();
    result.affected_bits.push(bit);
    Ok(result)
}
