use super::{index_todos, DataStore};
use crate::error::Result;
use crate::model::Todo;

/// In-memory store for tests: same load/save contract as the file store,
/// no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(index_todos(self.todos.clone()))
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.todos = todos.to_vec();
        Ok(())
    }
}
