use crate::error::{Result, StrandError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle bucket a todo currently occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Today,
    Upcoming,
    Backlog,
    Recurring,
    Done,
}

impl Category {
    /// The fixed display order. Every view that groups by category lists
    /// all five, even when empty.
    pub const ALL: [Category; 5] = [
        Category::Today,
        Category::Upcoming,
        Category::Backlog,
        Category::Recurring,
        Category::Done,
    ];

    /// The legal lifecycle moves. Today, upcoming, and backlog can shuffle
    /// among themselves and close out as done; a done todo only comes back
    /// through rescheduling (recurrence) or re-prioritization.
    pub fn can_become(self, next: Category) -> bool {
        use Category::*;
        match (self, next) {
            (from, to) if from == to => true,
            (Today | Upcoming | Backlog, Today | Upcoming | Backlog | Done) => true,
            (Recurring, Today | Upcoming | Done) => true,
            (Done, Today | Upcoming) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Today => "today",
            Category::Upcoming => "upcoming",
            Category::Backlog => "backlog",
            Category::Recurring => "recurring",
            Category::Done => "done",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = StrandError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "today" => Ok(Category::Today),
            "upcoming" => Ok(Category::Upcoming),
            "backlog" => Ok(Category::Backlog),
            "recurring" => Ok(Category::Recurring),
            "done" => Ok(Category::Done),
            other => Err(StrandError::InvalidArgument(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

/// A single task record.
///
/// `index` is positional, not an identity: it is reassigned on every load to
/// the todo's zero-based position in storage order, and is only meaningful
/// within one load/mutate/save cycle. Optional fields are omitted from the
/// stored form entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(skip)]
    pub index: usize,

    pub text: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_on: Option<NaiveDate>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rule_as_string"
    )]
    pub recurrence_rule: Option<i64>,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            index: 0,
            text: text.into(),
            category: Category::Today,
            completed_at: None,
            available_on: None,
            recurrence_rule: None,
        }
    }

    /// Tags are whitespace-delimited tokens in the text starting with `|`.
    pub fn tags(&self) -> Vec<&str> {
        self.text
            .split_whitespace()
            .filter(|word| word.starts_with('|'))
            .collect()
    }

    pub fn has_tags(&self) -> bool {
        self.text.split_whitespace().any(|word| word.starts_with('|'))
    }

    /// Appends a tag to the text, prefixing it with `|` if needed.
    pub fn add_tag(&mut self, tag: &str) {
        if tag.starts_with('|') {
            self.text.push(' ');
            self.text.push_str(tag);
        } else {
            self.text.push_str(&format!(" |{}", tag));
        }
    }

    /// Strips every tag token from the text.
    pub fn clear_tags(&mut self) {
        self.text = self
            .text
            .split_whitespace()
            .filter(|word| !word.starts_with('|'))
            .collect::<Vec<_>>()
            .join(" ");
    }

    /// Moves the todo to `next`, rejecting transitions the lifecycle does
    /// not allow.
    pub fn set_category(&mut self, next: Category) -> Result<()> {
        if !self.category.can_become(next) {
            return Err(StrandError::InvalidTransition {
                from: self.category,
                to: next,
            });
        }
        self.category = next;
        Ok(())
    }

    pub fn is_upcoming(&self) -> bool {
        self.category == Category::Upcoming
    }

    /// An upcoming todo is available once its date has arrived.
    pub fn is_available(&self, today: NaiveDate) -> bool {
        self.available_on.is_none_or(|date| today >= date)
    }
}

/// The recurrence rule is stored as a string integer in the todo file.
mod rule_as_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(rule: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match rule {
            Some(days) => serializer.serialize_str(&days.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid recurrence rule: {}", s))),
        }
    }
}
