use super::{reorder, CmdMessage, CmdResult};
use crate::error::Result;
use crate::marker::Marker;
use crate::model::Category;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Schedules a todo for a future date: it moves to upcoming and becomes
/// available again on `date`. Scheduling for today is just prioritizing.
///
/// Date validation (rejecting the past) happens in the caller layer before
/// this runs.
pub fn run<S: DataStore>(
    store: &mut S,
    marker: &mut Marker,
    index: usize,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<CmdResult> {
    if date == today {
        return reorder::prioritize(store, marker, index);
    }

    let mut todos = store.load()?;
    let pos = super::find_position(&todos, index)?;
    todos[pos].set_category(Category::Upcoming)?;
    todos[pos].available_on = Some(date);
    let todo = todos[pos].clone();
    marker.on_removed(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Scheduled for {}: {}",
        date, todo.text
    )));
    Ok(result.with_affected(todo))
}

/// Daily maintenance pass: every upcoming todo whose date has arrived is
/// promoted back into today, at the head of the list. Each promotion is a
/// full prioritize cycle against a fresh load, so positions never go
/// stale mid-pass.
pub fn update_for_schedules<S: DataStore>(
    store: &mut S,
    marker: &mut Marker,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    loop {
        let todos = store.load()?;
        let due = todos
            .iter()
            .position(|todo| todo.is_upcoming() && todo.is_available(today));
        let Some(pos) = due else {
            break;
        };
        let promoted = reorder::prioritize(store, marker, pos)?;
        result.add_message(CmdMessage::info(format!(
            "Now available: {}",
            promoted.affected[0].text
        )));
        result.affected.extend(promoted.affected);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 1, 3)
    }

    fn store_with(texts: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for text in texts {
            add::run(&mut store, text.to_string()).unwrap();
        }
        store
    }

    #[test]
    fn schedule_moves_into_upcoming_with_date() {
        let mut store = store_with(&["a", "b"]);
        let mut marker = Marker::new();

        run(&mut store, &mut marker, 1, date(2024, 1, 10), today()).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos[1].category, Category::Upcoming);
        assert_eq!(todos[1].available_on, Some(date(2024, 1, 10)));
        // Scheduling edits in place; storage order is unchanged.
        assert_eq!(todos[0].text, "a");
        assert_eq!(todos[1].text, "b");
    }

    #[test]
    fn schedule_for_today_is_a_prioritize() {
        let mut store = store_with(&["a", "b"]);
        let mut marker = Marker::new();

        run(&mut store, &mut marker, 1, today(), today()).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos[0].text, "b");
        assert_eq!(todos[0].category, Category::Today);
        assert_eq!(todos[0].available_on, None);
    }

    #[test]
    fn schedule_shifts_marker_like_a_removal() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let mut marker = Marker::new();
        marker.set(2);

        run(&mut store, &mut marker, 1, date(2024, 1, 10), today()).unwrap();
        assert_eq!(marker.position(), Some(1));
    }

    #[test]
    fn update_promotes_only_due_upcoming_todos() {
        let mut store = store_with(&["stays", "due", "not yet", "also due"]);
        let mut marker = Marker::new();
        run(&mut store, &mut marker, 1, date(2024, 1, 2), today()).unwrap();
        run(&mut store, &mut marker, 2, date(2024, 2, 1), today()).unwrap();
        run(&mut store, &mut marker, 3, today() , today()).unwrap();
        // "also due" went through the prioritize path; reschedule it for a
        // date that has since arrived.
        run(&mut store, &mut marker, 0, date(2024, 1, 3), date(2024, 1, 1)).unwrap();

        update_for_schedules(&mut store, &mut marker, today()).unwrap();

        let todos = store.load().unwrap();
        for todo in &todos {
            if todo.text == "not yet" {
                assert_eq!(todo.category, Category::Upcoming);
                assert_eq!(todo.available_on, Some(date(2024, 2, 1)));
            } else {
                assert_eq!(todo.category, Category::Today, "todo {}", todo.text);
                assert_eq!(todo.available_on, None);
            }
        }
    }

    #[test]
    fn update_inserts_promotions_at_the_head() {
        let mut store = store_with(&["x", "first due", "second due"]);
        let mut marker = Marker::new();
        run(&mut store, &mut marker, 1, date(2024, 1, 2), date(2024, 1, 1)).unwrap();
        run(&mut store, &mut marker, 2, date(2024, 1, 2), date(2024, 1, 1)).unwrap();

        update_for_schedules(&mut store, &mut marker, today()).unwrap();

        // Repeated head insertion: the last todo promoted ends up on top.
        let texts: Vec<String> = store
            .load()
            .unwrap()
            .iter()
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(texts, vec!["second due", "first due", "x"]);
    }

    #[test]
    fn update_is_a_no_op_without_due_todos() {
        let mut store = store_with(&["a"]);
        let mut marker = Marker::new();
        let result = update_for_schedules(&mut store, &mut marker, today()).unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
