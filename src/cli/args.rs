use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "strand",
    version,
    about = "A keyboard-driven todo list for the command line",
    long_about = "A keyboard-driven todo list for the command line.\n\n\
        Run without a subcommand to start the interactive prompt."
)]
pub struct Cli {
    /// Use this todo file instead of ~/.strand.json
    #[arg(long, global = true, value_name = "PATH")]
    pub todo_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    Add {
        /// Todo text; tags are |prefixed words
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List todos (today, all, done, upcoming, backlog, recurring, tags)
    List {
        #[arg(default_value = "today")]
        view: String,
    },

    /// Mark a todo as done (recurring todos reschedule instead)
    Complete { index: usize },

    /// Delete a todo entirely
    Delete { index: usize },

    /// Move a todo to the top of the list
    Prioritize { index: usize },

    /// Move a todo to the bottom of the list
    Deprioritize { index: usize },

    /// Move a todo to the backlog
    Backlog { index: usize },

    /// Schedule a todo for a future date (YYYY-MM-DD, mon..sun, "3 days", tomorrow)
    Schedule {
        index: usize,
        #[arg(required = true)]
        date: Vec<String>,
    },

    /// Set a recurrence rule in days (0 or less disables)
    Recur { index: usize, days: i64 },

    /// Add a tag to a todo
    Tag { index: usize, tag: String },

    /// Remove all tags from a todo
    Untag { index: usize },

    /// Place the marker below a todo in the today view
    Mark { index: usize },

    /// Defer a todo to the following Monday
    Defer { index: usize },

    /// Defer a todo for 30 days
    #[command(name = "longdefer")]
    LongDefer { index: usize },

    /// Show version and per-category counts
    Info,

    /// Promote every due upcoming todo (run this once daily from cron)
    ScheduleUpdate,
}
