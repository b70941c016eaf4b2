//! Command layer: pure business logic, one module per command family.
//!
//! Every mutating command follows the same shape: load the full list,
//! locate the target by its positional index within that load, mutate,
//! adjust the marker, save the full list. No command touches stdout or
//! assumes a terminal; results come back as [`CmdResult`] values for the
//! CLI layer to render.

use crate::error::{Result, StrandError};
use crate::model::Todo;

pub mod add;
pub mod backlog;
pub mod complete;
pub mod delete;
pub mod mark;
pub mod recur;
pub mod reorder;
pub mod schedule;
pub mod tags;
pub mod views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, for the UI layer to present.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, todo: Todo) -> Self {
        self.affected.push(todo);
        self
    }
}

/// Indexes are positional, so within one load a lookup is a bounds check.
/// Out-of-range indexes are a recoverable "not found", never a panic.
pub(crate) fn find_position(todos: &[Todo], index: usize) -> Result<usize> {
    if index < todos.len() {
        Ok(index)
    } else {
        Err(StrandError::NotFound(index))
    }
}
