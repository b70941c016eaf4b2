//! The interactive prompt: a strictly request/response loop over stdin.
//! Line editing and history are left to the terminal; this only reads
//! buffered lines. The marker lives for the duration of one session.

use super::print;
use super::{show_info, show_today, show_view};
use console::Term;
use std::io::{self, BufRead, Write};
use std::process::Command as Shell;
use strand::api::StrandApi;
use strand::error::{Result, StrandError};
use strand::store::DataStore;

pub fn run<S: DataStore>(api: &mut StrandApi<S>) -> Result<()> {
    print::say(&format!(
        "Welcome to strand v{}.  Type 'help' for a list of commands; Ctrl-D or 'quit' to leave.",
        env!("CARGO_PKG_VERSION")
    ));
    show_today(api)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("~> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break; // Ctrl-D
        };
        match dispatch(api, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_recoverable() => {
                print::say(&format!("{{r {}}}", err));
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Resolves a command word (or its short alias) and runs it. Returns
/// `false` when the session should end.
fn dispatch<S: DataStore>(api: &mut StrandApi<S>, line: &str) -> Result<bool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, args)) = tokens.split_first() else {
        return Ok(true);
    };

    match cmd {
        "a" | "add" => {
            let result = api.add(args.join(" "))?;
            mutated(api, result)
        }
        "c" | "complete" => single_index(api, args, |api, idx| api.complete(idx)),
        "x" | "delete" => single_index(api, args, |api, idx| api.delete(idx)),
        "p" | "prioritize" => single_index(api, args, |api, idx| api.prioritize(idx)),
        "!" | "deprioritize" => single_index(api, args, |api, idx| api.deprioritize(idx)),
        "b" | "backlog" => single_index(api, args, |api, idx| api.backlog(idx)),
        "m" | "mark" => single_index(api, args, |api, idx| api.mark(idx)),
        "untag" => single_index(api, args, |api, idx| api.untag(idx)),
        "d" | "dw" | "defer" => single_index(api, args, |api, idx| api.defer(idx)),
        "dm" | "longdefer" => single_index(api, args, |api, idx| api.long_defer(idx)),
        "s" | "schedule" => {
            if args.len() < 2 {
                return Err(argument_error());
            }
            let index = parse_index(args[0])?;
            let result = api.schedule(index, &args[1..].join(" "))?;
            mutated(api, result)
        }
        "r" | "recur" => {
            let [index, days] = args else {
                return Err(argument_error());
            };
            let index = parse_index(index)?;
            let days: i64 = days.parse().map_err(|_| {
                StrandError::InvalidArgument(format!(
                    "I couldn't understand your amount '{}' (should be an integer)",
                    days
                ))
            })?;
            let result = api.recur(index, days)?;
            mutated(api, result)
        }
        "t" | "tag" => {
            let [index, tag] = args else {
                return Err(argument_error());
            };
            let index = parse_index(index)?;
            let result = api.tag(index, tag)?;
            mutated(api, result)
        }
        "l" | "list" => {
            show_view(api, args.first().copied().unwrap_or("today"))?;
            Ok(true)
        }
        "i" | "info" => {
            show_info(api)?;
            Ok(true)
        }
        "cal" | "calendar" => {
            calendar();
            Ok(true)
        }
        "clear" => {
            Term::stdout().clear_screen()?;
            Ok(true)
        }
        "h" | "?" | "help" => {
            print::flowerbox(&print::help_lines(), ' ', 0);
            Ok(true)
        }
        "q" | "quit" => Ok(false),
        _ => {
            print::say("I didn't understand your command.  Type \"help\" for a list of valid commands.");
            Ok(true)
        }
    }
}

fn mutated<S: DataStore>(
    api: &mut StrandApi<S>,
    result: strand::commands::CmdResult,
) -> Result<bool> {
    print::print_messages(&result.messages);
    show_today(api)?;
    Ok(true)
}

fn single_index<S, F>(api: &mut StrandApi<S>, args: &[&str], op: F) -> Result<bool>
where
    S: DataStore,
    F: FnOnce(&mut StrandApi<S>, usize) -> Result<strand::commands::CmdResult>,
{
    let [raw] = args else {
        return Err(argument_error());
    };
    let index = parse_index(raw)?;
    let result = op(api, index)?;
    mutated(api, result)
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| StrandError::InvalidArgument(format!("'{}' is not a todo ID", raw)))
}

fn argument_error() -> StrandError {
    StrandError::InvalidArgument("I don't understand what you want to do".to_string())
}

/// Shells out to `cal` for a three-month view; purely cosmetic, silently
/// skipped when the binary is unavailable.
fn calendar() {
    match Shell::new("cal").args(["-A", "1", "-B", "1"]).output() {
        Ok(output) if output.status.success() => {
            print::say(&String::from_utf8_lossy(&output.stdout));
        }
        _ => print::say("{y The 'cal' command isn't available here.}"),
    }
}
