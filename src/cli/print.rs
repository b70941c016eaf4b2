use chrono::{Days, NaiveDate};
use colored::Colorize;
use console::Term;
use std::collections::BTreeMap;
use strand::commands::{CmdMessage, MessageLevel};
use strand::marker::Marker;
use strand::markup;
use strand::model::{Category, Todo};

const MIN_WIDTH: usize = 80;

pub(super) fn width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).max(MIN_WIDTH)
}

pub(super) fn say(line: &str) {
    println!("{}", markup::render(line));
}

/// Like [`say`], but with tag tokens highlighted.
pub(super) fn line_say(line: &str) {
    say(&highlight_tags(line));
}

fn highlight_tags(line: &str) -> String {
    line.split(' ')
        .map(|word| {
            if word.starts_with('|') {
                format!("{{ig {}}}", word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn titleize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn header_flags(category: Category) -> &'static str {
    match category {
        Category::Today => "wi",
        Category::Upcoming => "w",
        Category::Backlog => "r",
        Category::Recurring => "w",
        Category::Done => "wv",
    }
}

fn todo_line(todo: &Todo) -> String {
    let mut display = format!("{}. {}", todo.index, todo.text);
    if let Some(days) = todo.recurrence_rule {
        display.push_str(&format!(" {{wi Recurs {} days after completion}}", days));
    }
    if todo.category == Category::Done {
        if let Some(at) = todo.completed_at {
            display.push_str(&format!(" {{c Completed {}}}", at.format("%Y-%m-%d")));
        }
    }
    display
}

fn print_category(category: Category, todos: &[Todo], marker: &Marker, today: NaiveDate) {
    if category == Category::Today {
        say(&format!(
            "{{{} Today ({} items) [{}]}}",
            header_flags(category),
            todos.len(),
            today
        ));
    } else {
        say(&format!(
            "{{{} {}}}",
            header_flags(category),
            titleize(&category.to_string())
        ));
    }

    if todos.is_empty() {
        say("{r (none)}");
        return;
    }

    for (row, todo) in todos.iter().enumerate() {
        line_say(&todo_line(todo));
        if category == Category::Today && marker.is_at(row) {
            say(&"-".repeat(width()));
        }
    }
}

pub(super) fn print_today(todos: &[Todo], marker: &Marker, today: NaiveDate) {
    print_category(Category::Today, todos, marker, today);
}

pub(super) fn print_done(todos: &[Todo], today: NaiveDate) {
    print_category(Category::Done, todos, &Marker::new(), today);
}

pub(super) fn print_backlog(todos: &[Todo], today: NaiveDate) {
    print_category(Category::Backlog, todos, &Marker::new(), today);
}

pub(super) fn print_recurring(todos: &[Todo]) {
    say(&format!("{{{} Recurring}}", header_flags(Category::Recurring)));
    if todos.is_empty() {
        say("{r (none)}");
        return;
    }
    for todo in todos {
        line_say(&todo_line(todo));
    }
}

/// The `[Tomorrow]` / `[Friday]` / `[Next Friday]` annotation next to an
/// upcoming group header, for dates within the coming two weeks.
fn date_follower(date: NaiveDate, today: NaiveDate) -> Option<String> {
    if date == today + Days::new(1) {
        return Some("[Tomorrow]".to_string());
    }
    if date >= today + Days::new(6) && date < today + Days::new(14) {
        return Some(format!("[Next {}]", date.format("%A")));
    }
    if date < today + Days::new(6) {
        return Some(format!("[{}]", date.format("%A")));
    }
    None
}

pub(super) fn print_upcoming(groups: &BTreeMap<NaiveDate, Vec<Todo>>, today: NaiveDate) {
    if groups.is_empty() {
        say("{r (none)}");
        return;
    }
    for (date, todos) in groups {
        match date_follower(*date, today) {
            Some(follower) => say(&format!("{{bi {}}} {{wi {}}}", date, follower)),
            None => say(&format!("{{bi {}}}", date)),
        }
        for todo in todos {
            line_say(&format!("    {}", todo_line(todo)));
        }
    }
}

pub(super) fn print_tag_index(index: &BTreeMap<String, Vec<Todo>>) {
    if index.is_empty() {
        say("{r (none)}");
        return;
    }
    for (tag, todos) in index {
        say(&format!("{{gi {}}}", tag));
        for todo in todos {
            line_say(&format!("    {}", todo_line(todo)));
        }
    }
}

pub(super) fn print_all(grouped: &[(Category, Vec<Todo>)], marker: &Marker, today: NaiveDate) {
    for (category, todos) in grouped {
        say("");
        print_category(*category, todos, marker, today);
    }
}

pub(super) fn flowerbox(lines: &[String], box_character: char, box_thickness: usize) {
    let rule = box_character.to_string().repeat(width());
    for _ in 0..box_thickness {
        say(&rule);
    }
    for line in lines {
        say(line);
    }
    for _ in 0..box_thickness {
        say(&rule);
    }
}

pub(super) fn print_info(grouped: &[(Category, Vec<Todo>)]) {
    let mut stats = vec![format!("strand v{}", env!("CARGO_PKG_VERSION"))];
    stats.extend(
        grouped
            .iter()
            .map(|(category, todos)| format!("{} Todos in {}", todos.len(), category)),
    );
    flowerbox(&stats, '*', 0);
}

pub(super) fn help_lines() -> Vec<String> {
    vec![
        format!("strand v{}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Commands (the starting letter can be used if underlined)".to_string(),
        "========".to_string(),
        "{wu a}dd <text>                 - Add a new Todo".to_string(),
        "{wu l}ist                       - List today's Todos".to_string(),
        "    l *, l all                  - List Todos in all categories".to_string(),
        "    l {wu u}pcoming             - List Upcoming Todos".to_string(),
        "    l {wu b}acklog              - List Backlog Todos".to_string(),
        "    l {wu r}ecurring            - List Recurring Todos".to_string(),
        "    l {wu t}ags                 - List Tags and tagged Todos".to_string(),
        "    l {wu d}one                 - List completed Todos".to_string(),
        "{wu c}omplete <id>              - Mark a Todo as done".to_string(),
        "{wu p}rioritize <id>            - Move a Todo to the top of the list".to_string(),
        "!, deprioritize <id>            - Move a Todo to the bottom of the list".to_string(),
        "{wu b}acklog <id>               - Move a Todo to the backlog".to_string(),
        "{wu t}ag <id> <tag>             - Add a Tag to a Todo".to_string(),
        "untag <id>                      - Remove all Tags from a Todo".to_string(),
        "{wu s}chedule <id> <date>       - Schedule a Todo for a future date".to_string(),
        "{wu r}ecur <id> <days>          - Set a recurrence rule for a Todo".to_string(),
        "{wu m}ark <id>                  - Add a marker below the specified Todo (impermanent)"
            .to_string(),
        "{wu d}efer <id>, dw <id>        - Defer a Todo to the following Monday".to_string(),
        "longdefer <id>, dm <id>         - Defer a Todo for 30 days".to_string(),
        "delete <id>, x <id>             - Delete a Todo entirely".to_string(),
        "{wu i}nfo                       - Display strand version and stats".to_string(),
        "cal, calendar                   - Show the surrounding months".to_string(),
        "clear                           - Clear screen".to_string(),
        "{wu h}elp, ?                    - Display this text".to_string(),
        "{wu q}uit                       - Leave".to_string(),
    ]
}
