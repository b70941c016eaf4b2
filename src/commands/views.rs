//! Read-only views, each derived from a fresh load.

use crate::error::Result;
use crate::model::{Category, Todo};
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn today<S: DataStore>(store: &S) -> Result<Vec<Todo>> {
    by_single_category(store, Category::Today)
}

pub fn backlog<S: DataStore>(store: &S) -> Result<Vec<Todo>> {
    by_single_category(store, Category::Backlog)
}

/// Done todos, most recently completed first.
pub fn done<S: DataStore>(store: &S) -> Result<Vec<Todo>> {
    let mut todos = by_single_category(store, Category::Done)?;
    todos.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    Ok(todos)
}

pub fn not_done<S: DataStore>(store: &S) -> Result<Vec<Todo>> {
    Ok(store
        .load()?
        .into_iter()
        .filter(|todo| todo.category != Category::Done)
        .collect())
}

/// Upcoming todos grouped by availability date, soonest date first.
pub fn upcoming<S: DataStore>(store: &S) -> Result<BTreeMap<NaiveDate, Vec<Todo>>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Todo>> = BTreeMap::new();
    for todo in by_single_category(store, Category::Upcoming)? {
        if let Some(date) = todo.available_on {
            groups.entry(date).or_default().push(todo);
        }
    }
    Ok(groups)
}

/// Not-done todos carrying at least one tag.
pub fn tagged<S: DataStore>(store: &S) -> Result<Vec<Todo>> {
    Ok(not_done(store)?
        .into_iter()
        .filter(Todo::has_tags)
        .collect())
}

/// Tag to tagged-todos mapping; tags sort lexicographically, case
/// preserved from the tag text. A todo with several tags appears under
/// each of them.
pub fn tag_index<S: DataStore>(store: &S) -> Result<BTreeMap<String, Vec<Todo>>> {
    let mut index: BTreeMap<String, Vec<Todo>> = BTreeMap::new();
    for todo in tagged(store)? {
        for tag in todo.tags() {
            index.entry(tag.to_string()).or_default().push(todo.clone());
        }
    }
    Ok(index)
}

/// Every category in fixed order, each with its todos in storage order.
/// Empty categories are present too.
pub fn by_category<S: DataStore>(store: &S) -> Result<Vec<(Category, Vec<Todo>)>> {
    let todos = store.load()?;
    Ok(Category::ALL
        .iter()
        .map(|&category| {
            let bucket: Vec<Todo> = todos
                .iter()
                .filter(|todo| todo.category == category)
                .cloned()
                .collect();
            (category, bucket)
        })
        .collect())
}

fn by_single_category<S: DataStore>(store: &S, category: Category) -> Result<Vec<Todo>> {
    Ok(store
        .load()?
        .into_iter()
        .filter(|todo| todo.category == category)
        .collect())
}
