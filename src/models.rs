use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Stable identifier assigned to a habit when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub Uuid);

impl HabitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for HabitId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// One tracked habit, stored with the field names the data file has always used.
///
/// `completion_date` is empty while the habit is not completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub completed: bool,
    pub added_date: String,
    pub completion_date: String,
}

/// A record as found in the data file. Older files carry no `id`, and any
/// field but `name` may be missing or `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredHabit {
    #[serde(default)]
    pub id: Option<HabitId>,
    pub name: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub added_date: Option<String>,
    #[serde(default)]
    pub completion_date: Option<String>,
}

impl StoredHabit {
    /// Fills in the gaps; the flag tells whether a fresh id had to be assigned.
    pub fn into_habit(self) -> (Habit, bool) {
        let assigned = self.id.is_none();
        let habit = Habit {
            id: self.id.unwrap_or_default(),
            name: self.name,
            completed: self.completed.unwrap_or_default(),
            added_date: self.added_date.unwrap_or_default(),
            completion_date: self.completion_date.unwrap_or_default(),
        };
        (habit, assigned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Todo,
    Done,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Todo, Filter::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Todo => "todo",
            Filter::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Todo => "Todo",
            Filter::Done => "Done",
        }
    }

    pub fn matches(self, habit: &Habit) -> bool {
        match self {
            Filter::All => true,
            Filter::Todo => !habit.completed,
            Filter::Done => habit.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Filter::All),
            "todo" => Ok(Filter::Todo),
            "done" => Ok(Filter::Done),
            other => Err(format!("unknown filter '{other}', expected all, todo or done")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub filter: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub added_date: String,
    pub completion_date: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitsSnapshot {
    pub filter: Filter,
    pub progress: u8,
    pub total: usize,
    pub completed: usize,
    pub habits: Vec<HabitView>,
}
