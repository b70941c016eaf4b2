//! API facade: the single entry point for all operations, regardless of
//! the UI driving them.
//!
//! [`StrandApi`] owns the two pieces of session state the engine needs —
//! the store and the marker — and is generic over [`DataStore`] so tests
//! run against `InMemoryStore` while the binary uses `FileStore`. It
//! normalizes inputs (date expressions to dates, tag spelling) and
//! dispatches to the command layer; business logic lives in
//! `commands/*.rs`, not here.

use crate::commands::{self, CmdResult};
use crate::dates;
use crate::error::{Result, StrandError};
use crate::marker::Marker;
use crate::model::{Category, Todo};
use crate::store::DataStore;
use chrono::{Days, Local, NaiveDate};
use std::collections::BTreeMap;

pub struct StrandApi<S: DataStore> {
    store: S,
    marker: Marker,
}

impl<S: DataStore> StrandApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            marker: Marker::new(),
        }
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    // --- Mutations ---

    pub fn add(&mut self, text: String) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn complete(&mut self, index: usize) -> Result<CmdResult> {
        let today = self.today();
        commands::complete::run(&mut self.store, &mut self.marker, index, today)
    }

    pub fn delete(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.marker, index)
    }

    pub fn prioritize(&mut self, index: usize) -> Result<CmdResult> {
        commands::reorder::prioritize(&mut self.store, &mut self.marker, index)
    }

    pub fn deprioritize(&mut self, index: usize) -> Result<CmdResult> {
        commands::reorder::deprioritize(&mut self.store, &mut self.marker, index)
    }

    pub fn backlog(&mut self, index: usize) -> Result<CmdResult> {
        commands::backlog::run(&mut self.store, &mut self.marker, index)
    }

    /// Resolves a free-form date expression and schedules the todo for it.
    /// Dates in the past are rejected here, before any mutation.
    pub fn schedule(&mut self, index: usize, expression: &str) -> Result<CmdResult> {
        let today = self.today();
        let date = dates::resolve(expression, today).ok_or_else(|| {
            StrandError::InvalidArgument(format!(
                "I couldn't understand your date '{}' (should be YYYY-MM-DD, or mon/tue/wed, etc.)",
                expression
            ))
        })?;
        self.schedule_date(index, date)
    }

    pub fn schedule_date(&mut self, index: usize, date: NaiveDate) -> Result<CmdResult> {
        let today = self.today();
        if date < today {
            return Err(StrandError::DateInPast(date));
        }
        commands::schedule::run(&mut self.store, &mut self.marker, index, date, today)
    }

    /// Pushes a todo to the coming Monday.
    pub fn defer(&mut self, index: usize) -> Result<CmdResult> {
        let today = self.today();
        let monday = dates::dow_to_date("mon", today)
            .ok_or_else(|| StrandError::InvalidArgument("could not resolve Monday".into()))?;
        self.schedule_date(index, monday)
    }

    /// Pushes a todo thirty days out.
    pub fn long_defer(&mut self, index: usize) -> Result<CmdResult> {
        let today = self.today();
        let date = today
            .checked_add_days(Days::new(30))
            .ok_or_else(|| StrandError::InvalidArgument("date out of range".into()))?;
        self.schedule_date(index, date)
    }

    pub fn recur(&mut self, index: usize, days: i64) -> Result<CmdResult> {
        commands::recur::run(&mut self.store, index, days)
    }

    /// Tags are stored lowercase to keep ad hoc grouping predictable.
    pub fn tag(&mut self, index: usize, tag: &str) -> Result<CmdResult> {
        commands::tags::tag(&mut self.store, index, &tag.to_lowercase())
    }

    pub fn untag(&mut self, index: usize) -> Result<CmdResult> {
        commands::tags::untag(&mut self.store, index)
    }

    pub fn mark(&mut self, index: usize) -> Result<CmdResult> {
        commands::mark::run(&self.store, &mut self.marker, index)
    }

    /// The daily maintenance pass, meant to be run by an external
    /// scheduler (cron) as well as on interactive startup.
    pub fn update_for_schedules(&mut self) -> Result<CmdResult> {
        let today = self.today();
        commands::schedule::update_for_schedules(&mut self.store, &mut self.marker, today)
    }

    // --- Views ---

    pub fn today_view(&self) -> Result<Vec<Todo>> {
        commands::views::today(&self.store)
    }

    pub fn done_view(&self) -> Result<Vec<Todo>> {
        commands::views::done(&self.store)
    }

    pub fn backlog_view(&self) -> Result<Vec<Todo>> {
        commands::views::backlog(&self.store)
    }

    pub fn not_done_view(&self) -> Result<Vec<Todo>> {
        commands::views::not_done(&self.store)
    }

    pub fn upcoming_view(&self) -> Result<BTreeMap<NaiveDate, Vec<Todo>>> {
        commands::views::upcoming(&self.store)
    }

    pub fn tag_view(&self) -> Result<BTreeMap<String, Vec<Todo>>> {
        commands::views::tag_index(&self.store)
    }

    pub fn by_category_view(&self) -> Result<Vec<(Category, Vec<Todo>)>> {
        commands::views::by_category(&self.store)
    }

    /// Todos in the recurring category plus any todo with an active rule.
    pub fn recurring_view(&self) -> Result<Vec<Todo>> {
        Ok(self
            .not_done_view()?
            .into_iter()
            .filter(|todo| todo.category == Category::Recurring || todo.recurrence_rule.is_some())
            .collect())
    }
}
