use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BitpadError, Result};
use crate::preview::{PreviewInput, PreviewRenderer, RenderSurface};
use crate::storage::StorageBackend;
use crate::store::BitStore;
use uuid::Uuid;

/// Composes the bit's preview document and presents it on the surface.
pub fn run<S: StorageBackend, T: RenderSurface>(
    bits: &BitStore<S>,
    renderer: &mut PreviewRenderer<T>,
    id: Uuid,
) -> Result<CmdResult> {
    let bit = bits
        .get(id)
        .ok_or(BitpadError::BitNotFound(id))?;

    let rendered = renderer.render(&PreviewInput::from(bit))?;
    let mut result = CmdResult::default();

    if let Some(path) = renderer.surface().location() {
        result.preview_paths.push(path.to_path_buf());
    }
    let note = if rendered {
        format!("Preview rendered: {}", bit.title)
    } else {
        format!("Preview already up to date: {}", bit.title)
    };
    result.add_message(CmdMessage::success(note));
    Ok(result)
}
