use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::store::DataStore;

/// Removes a todo from the list entirely.
pub fn run<S: DataStore>(store: &mut S, marker: &mut Marker, index: usize) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    let removed = todos.remove(pos);
    marker.on_removed(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {}", removed.text)));
    Ok(result.with_affected(removed))
}
