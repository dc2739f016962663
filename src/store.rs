use crate::models::{Filter, Habit, HabitId};
use crate::relative::timestamp;
use chrono::{DateTime, Utc};

/// Ordered habit list plus the filter currently applied to the page.
///
/// The filter only lives in memory; a fresh store always starts on `Filter::All`.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    filter: Filter,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits,
            filter: Filter::All,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn add(&mut self, name: &str) -> Option<HabitId> {
        self.add_at(name, Utc::now())
    }

    /// Appends a new open habit. Blank names are ignored.
    pub fn add_at(&mut self, name: &str, now: DateTime<Utc>) -> Option<HabitId> {
        if name.trim().is_empty() {
            return None;
        }

        let habit = Habit {
            id: HabitId::new(),
            name: name.to_string(),
            completed: false,
            added_date: timestamp(now),
            completion_date: String::new(),
        };
        let id = habit.id;
        self.habits.push(habit);
        Some(id)
    }

    pub fn toggle(&mut self, id: HabitId) -> bool {
        self.toggle_at(id, Utc::now())
    }

    /// Flips completion. Returns `false` when no habit has `id`.
    pub fn toggle_at(&mut self, id: HabitId, now: DateTime<Utc>) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return false;
        };

        if habit.completed {
            habit.completed = false;
            habit.completion_date.clear();
        } else {
            habit.completed = true;
            habit.completion_date = timestamp(now);
        }
        true
    }

    pub fn remove(&mut self, id: HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    pub fn clear_all(&mut self) {
        self.habits.clear();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|habit| self.filter.matches(habit))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|habit| habit.completed).count()
    }

    /// Whole percentage of completed habits, rounded down.
    pub fn progress(&self) -> u8 {
        if self.habits.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.habits.len()) as u8
    }
}
