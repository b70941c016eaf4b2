use super::{find_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::model::Category;
use crate::store::DataStore;

/// Moves a todo to the head of the list and back into today. This is also
/// how scheduled todos re-enter the today view, so it clears any
/// availability date.
pub fn prioritize<S: DataStore>(
    store: &mut S,
    marker: &mut Marker,
    index: usize,
) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    let mut todo = todos.remove(pos);
    todo.set_category(Category::Today)?;
    todo.available_on = None;
    todos.insert(0, todo.clone());
    marker.on_promoted(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Moved to top: {}", todo.text)));
    Ok(result.with_affected(todo))
}

/// Moves a todo to the tail of the list. Category is left alone.
pub fn deprioritize<S: DataStore>(
    store: &mut S,
    marker: &mut Marker,
    index: usize,
) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;
    let todo = todos.remove(pos);
    todos.push(todo.clone());
    marker.on_removed(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved to bottom: {}",
        todo.text
    )));
    Ok(result.with_affected(todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, schedule};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn store_with(texts: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for text in texts {
            add::run(&mut store, text.to_string()).unwrap();
        }
        store
    }

    fn texts(store: &InMemoryStore) -> Vec<String> {
        use crate::store::DataStore;
        store
            .load()
            .unwrap()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn prioritize_moves_to_head() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut marker = Marker::new();

        prioritize(&mut store, &mut marker, 2).unwrap();
        assert_eq!(texts(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn prioritize_pulls_scheduled_todo_back_into_today() {
        let mut store = store_with(&["a", "b"]);
        let mut marker = Marker::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        schedule::run(&mut store, &mut marker, 1, date, today).unwrap();

        prioritize(&mut store, &mut marker, 1).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos[0].text, "b");
        assert_eq!(todos[0].category, Category::Today);
        assert_eq!(todos[0].available_on, None);
    }

    #[test]
    fn prioritize_from_below_marker_pushes_marker_down() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let mut marker = Marker::new();
        marker.set(1);

        prioritize(&mut store, &mut marker, 3).unwrap();
        assert_eq!(marker.position(), Some(2));

        // Promoting from above the marker leaves it alone.
        prioritize(&mut store, &mut marker, 1).unwrap();
        assert_eq!(marker.position(), Some(2));
    }

    #[test]
    fn deprioritize_moves_to_tail_and_keeps_category() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut marker = Marker::new();

        deprioritize(&mut store, &mut marker, 0).unwrap();
        assert_eq!(texts(&store), vec!["b", "c", "a"]);
        assert_eq!(store.load().unwrap()[2].category, Category::Today);
    }

    #[test]
    fn deprioritize_shifts_marker_like_a_removal() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let mut marker = Marker::new();
        marker.set(2);

        deprioritize(&mut store, &mut marker, 3).unwrap();
        assert_eq!(marker.position(), Some(1));
    }
}
