use super::{find_position, schedule, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::model::Category;
use crate::store::DataStore;
use chrono::{Days, NaiveDate, Utc};

/// Marks a todo done, stamping the completion time.
///
/// Recurrence takes priority over completion: a todo with a recurrence
/// rule of N days is rescheduled N days out instead, and never reaches
/// done.
pub fn run<S: DataStore>(
    store: &mut S,
    marker: &mut Marker,
    index: usize,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let pos = find_position(&todos, index)?;

    if let Some(days) = todos[pos].recurrence_rule {
        let next = today
            .checked_add_days(Days::new(days.max(0) as u64))
            .unwrap_or(today);
        return schedule::run(store, marker, index, next, today);
    }

    todos[pos].set_category(Category::Done)?;
    todos[pos].completed_at = Some(Utc::now());
    let todo = todos[pos].clone();
    marker.on_removed(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Completed: {}", todo.text)));
    Ok(result.with_affected(todo))
}
