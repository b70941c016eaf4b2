use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::model::Category;
use crate::store::DataStore;

/// Moves a todo to the head of the list in backlog, clearing any
/// availability date.
pub fn run<S: DataStore>(store: &mut S, marker: &mut Marker, index: usize) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    let mut todo = todos.remove(pos);
    todo.set_category(Category::Backlog)?;
    todo.available_on = None;
    todos.insert(0, todo.clone());
    marker.on_backlogged(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved to backlog: {}",
        todo.text
    )));
    Ok(result.with_affected(todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, complete};
    use crate::error::StrandError;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn store_with(texts: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for text in texts {
            add::run(&mut store, text.to_string()).unwrap();
        }
        store
    }

    #[test]
    fn backlog_moves_to_head_with_category() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut marker = Marker::new();

        run(&mut store, &mut marker, 2).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos[0].text, "c");
        assert_eq!(todos[0].category, Category::Backlog);
        assert_eq!(todos[0].available_on, None);
    }

    #[test]
    fn backlog_marker_boundary_excludes_marker_plus_one() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let mut marker = Marker::new();
        marker.set(1);

        // Position 2 == marker + 1: no shift for backlog.
        run(&mut store, &mut marker, 2).unwrap();
        assert_eq!(marker.position(), Some(1));

        // Position 1 == marker: shifts.
        run(&mut store, &mut marker, 1).unwrap();
        assert_eq!(marker.position(), Some(0));
    }

    #[test]
    fn done_todos_cannot_be_backlogged() {
        let mut store = store_with(&["a"]);
        let mut marker = Marker::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        complete::run(&mut store, &mut marker, 0, today).unwrap();

        let err = run(&mut store, &mut marker, 0).unwrap_err();
        assert!(matches!(err, StrandError::InvalidTransition { .. }));
        assert_eq!(store.load().unwrap()[0].category, Category::Done);
    }
}
