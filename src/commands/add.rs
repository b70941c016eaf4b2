use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

/// Appends a new todo at the tail of the list, in today. The new todo gets
/// its positional index on the next load.
pub fn run<S: DataStore>(store: &mut S, text: String) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let todo = Todo::new(text);
    todos.push(todo.clone());
    store.save(&todos)?;

    let mut result = CmdResult::default().with_affected(todo);
    result.add_message(CmdMessage::success("Added todo"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn new_todo_is_appended_in_today() {
        let mut store = InMemoryStore::new();
        run(&mut store, "first".into()).unwrap();
        run(&mut store, "second".into()).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].text, "second");
        assert_eq!(todos[1].category, Category::Today);
        assert_eq!(todos[1].index, todos.len() - 1);
    }
}
