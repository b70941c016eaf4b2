use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::model::Category;
use crate::store::DataStore;

/// Places the marker under a todo, addressed by its list index. The marker
/// itself stores the todo's row within the today view, since that is where
/// the separator is drawn. Marking a todo that is not in today clears the
/// marker instead.
pub fn run<S: DataStore>(store: &S, marker: &mut Marker, index: usize) -> Result<CmdResult> {
    let todos = store.load()?;
    find_position(&todos, index)?;

    let row = todos
        .iter()
        .filter(|todo| todo.category == Category::Today)
        .position(|todo| todo.index == index);

    let mut result = CmdResult::default();
    match row {
        Some(row) => {
            marker.set(row);
            result.add_message(CmdMessage::success(format!(
                "Marker set below: {}",
                todos[index].text
            )));
        }
        None => {
            marker.clear();
            result.add_message(CmdMessage::warning(
                "That todo is not in today; marker cleared",
            ));
        }
    }
    Ok(result)
}
