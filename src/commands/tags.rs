use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Appends a tag to a todo's text, normalizing the `|` prefix.
pub fn tag<S: DataStore>(store: &mut S, index: usize, tag: &str) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    todos[pos].add_tag(tag);
    let todo = todos[pos].clone();
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Tagged: {}", todo.text)));
    Ok(result.with_affected(todo))
}

/// Strips every tag from a todo's text.
pub fn untag<S: DataStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    todos[pos].clear_tags();
    let todo = todos[pos].clone();
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Untagged: {}", todo.text)));
    Ok(result.with_affected(todo))
}
