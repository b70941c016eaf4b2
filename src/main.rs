use clap::Parser;
use colored::Colorize;
use strand::api::StrandApi;
use strand::config::StrandConfig;
use strand::error::Result;
use strand::store::fs::FileStore;

mod cli;
use cli::args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = StrandConfig::resolve(cli.todo_file.clone());
    let store = FileStore::new(&config.todo_file);
    let mut api = StrandApi::new(store);

    match cli.command {
        Some(command) => cli::handle_command(&mut api, command),
        None => cli::repl::run(&mut api),
    }
}
