//! CLI glue: argument definitions, view rendering, and the interactive
//! prompt. This is the only layer that touches stdout/stderr.

pub mod args;
mod print;
pub mod repl;

use args::Commands;
use chrono::Local;
use strand::api::StrandApi;
use strand::error::Result;
use strand::store::DataStore;

/// Runs a one-shot subcommand: perform the operation, print its messages,
/// then re-render the today view.
pub fn handle_command<S: DataStore>(api: &mut StrandApi<S>, command: Commands) -> Result<()> {
    let result = match command {
        Commands::List { view } => return show_view(api, &view),
        Commands::Info => return show_info(api),
        Commands::ScheduleUpdate => {
            let result = api.update_for_schedules()?;
            print::print_messages(&result.messages);
            return Ok(());
        }
        Commands::Add { text } => api.add(text.join(" "))?,
        Commands::Complete { index } => api.complete(index)?,
        Commands::Delete { index } => api.delete(index)?,
        Commands::Prioritize { index } => api.prioritize(index)?,
        Commands::Deprioritize { index } => api.deprioritize(index)?,
        Commands::Backlog { index } => api.backlog(index)?,
        Commands::Schedule { index, date } => api.schedule(index, &date.join(" "))?,
        Commands::Recur { index, days } => api.recur(index, days)?,
        Commands::Tag { index, tag } => api.tag(index, &tag)?,
        Commands::Untag { index } => api.untag(index)?,
        Commands::Mark { index } => api.mark(index)?,
        Commands::Defer { index } => api.defer(index)?,
        Commands::LongDefer { index } => api.long_defer(index)?,
    };

    print::print_messages(&result.messages);
    show_today(api)
}

pub(crate) fn show_today<S: DataStore>(api: &StrandApi<S>) -> Result<()> {
    let todos = api.today_view()?;
    print::print_today(&todos, api.marker(), Local::now().date_naive());
    Ok(())
}

pub(crate) fn show_view<S: DataStore>(api: &StrandApi<S>, view: &str) -> Result<()> {
    let today = Local::now().date_naive();
    match view {
        "all" | "*" => print::print_all(&api.by_category_view()?, api.marker(), today),
        "done" | "d" => print::print_done(&api.done_view()?, today),
        "upcoming" | "u" => print::print_upcoming(&api.upcoming_view()?, today),
        "backlog" | "b" => print::print_backlog(&api.backlog_view()?, today),
        "recurring" | "r" => print::print_recurring(&api.recurring_view()?),
        "tags" | "t" => print::print_tag_index(&api.tag_view()?),
        _ => return show_today(api),
    }
    Ok(())
}

pub(crate) fn show_info<S: DataStore>(api: &StrandApi<S>) -> Result<()> {
    print::print_info(&api.by_category_view()?);
    Ok(())
}
