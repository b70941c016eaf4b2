//! Storage layer.
//!
//! The [`DataStore`] trait abstracts the backing store behind whole-list
//! load and save. There are no partial updates: every mutating operation
//! loads the full list, edits it, and writes the full list back. That
//! load/mutate/save cycle is the unit of consistency, which is also why
//! positional indexes are only valid within one cycle.
//!
//! Implementations:
//! - [`fs::FileStore`]: production storage, a single JSON array file.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! A single active process is assumed; there is no file locking, and
//! concurrent external writers are unsupported.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the full list, assigning each todo its positional index in
    /// storage order.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replace the stored list with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}

pub(crate) fn index_todos(mut todos: Vec<Todo>) -> Vec<Todo> {
    for (idx, todo) in todos.iter_mut().enumerate() {
        todo.index = idx;
    }
    todos
}
