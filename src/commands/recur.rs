use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Sets a todo's recurrence rule. A rule of N days means completing the
/// todo reschedules it N days out instead of closing it. Zero or negative
/// clears the rule. Setting a rule does not itself reschedule anything.
pub fn run<S: DataStore>(store: &mut S, index: usize, days: i64) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    todos[pos].recurrence_rule = if days > 0 { Some(days) } else { None };
    let todo = todos[pos].clone();
    store.save(&todos)?;

    let mut result = CmdResult::default();
    if days > 0 {
        result.add_message(CmdMessage::success(format!(
            "Todo is set to recur {} days after completion.",
            days
        )));
    } else {
        result.add_message(CmdMessage::info(
            "Recurrence has been disabled for this Todo",
        ));
    }
    Ok(result.with_affected(todo))
}
