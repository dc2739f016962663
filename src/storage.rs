use crate::models::{Habit, StoredHabit};
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid habit data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Contents of the data file after filling in missing fields.
#[derive(Debug, Default)]
pub struct LoadedHabits {
    pub habits: Vec<Habit>,
    /// Records that were saved without an id and got a fresh one.
    pub assigned_ids: usize,
}

/// Reads the saved habit list. `Ok(None)` means nothing has been saved yet.
pub async fn read_habits(path: &Path) -> Result<Option<LoadedHabits>, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let stored: Vec<StoredHabit> = serde_json::from_slice(&bytes)?;
    let mut loaded = LoadedHabits::default();
    for record in stored {
        let (habit, assigned) = record.into_habit();
        if assigned {
            loaded.assigned_ids += 1;
        }
        loaded.habits.push(habit);
    }
    Ok(Some(loaded))
}

/// Loads the saved habit list, falling back to an empty one on any problem.
///
/// Ids handed out to records that had none are written back straight away,
/// so they survive a restart that happens before the next change.
pub async fn load_habits(path: &Path) -> Vec<Habit> {
    let loaded = match read_habits(path).await {
        Ok(Some(loaded)) => loaded,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("ignoring saved habits at {}: {err}", path.display());
            return Vec::new();
        }
    };

    if loaded.assigned_ids > 0 {
        match persist_habits(path, &loaded.habits).await {
            Ok(()) => info!(count = loaded.assigned_ids, "assigned ids to saved habits"),
            Err(err) => warn!("failed to save assigned habit ids to {}: {err}", path.display()),
        }
    }
    loaded.habits
}

/// Overwrites the data file with the full list.
pub async fn persist_habits(path: &Path, habits: &[Habit]) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(habits)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::HabitStore;

    fn sample(count: usize) -> Vec<Habit> {
        let mut store = HabitStore::default();
        for index in 0..count {
            let id = store.add(&format!("habit {index}")).unwrap();
            if index % 2 == 0 {
                store.toggle(id);
            }
        }
        store.habits().to_vec()
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");

        for count in [0, 1, 5] {
            let habits = sample(count);
            persist_habits(&path, &habits).await.unwrap();
            assert_eq!(load_habits(&path).await, habits);
        }
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(read_habits(&path).await.unwrap().is_none());
        assert!(load_habits(&path).await.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn legacy_ids_stay_the_same_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        let legacy = r#"[{"name":"Run","completed":false,"addedDate":"2024-01-02T10:00:00.000Z","completionDate":""},
            {"name":"Read","completed":true,"addedDate":"2024-01-02T10:00:00.000Z","completionDate":"2024-01-03T10:00:00.000Z"}]"#;
        fs::write(&path, legacy).await.unwrap();

        let first = load_habits(&path).await;
        let second = load_habits(&path).await;
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);

        let reread = read_habits(&path).await.unwrap().unwrap();
        assert_eq!(reread.assigned_ids, 0);
        assert_eq!(reread.habits[1].completion_date, "2024-01-03T10:00:00.000Z");
    }

    #[tokio::test]
    async fn null_completion_date_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        let raw = r#"[{"name":"Run","completed":false,"addedDate":"2024-01-02T10:00:00.000Z","completionDate":null},
            {"name":"Read","completed":false,"addedDate":"2024-01-02T10:00:00.000Z","completionDate":""}]"#;
        fs::write(&path, raw).await.unwrap();

        let habits = load_habits(&path).await;
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].completion_date, "");
        assert_eq!(habits[1].name, "Read");
    }

    #[tokio::test]
    async fn corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        fs::write(&path, b"{not json").await.unwrap();

        assert!(matches!(read_habits(&path).await, Err(StorageError::Serialize(_))));
        assert!(load_habits(&path).await.is_empty());
    }

    #[tokio::test]
    async fn saved_file_is_a_plain_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        persist_habits(&path, &sample(2)).await.unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        let items = raw.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["completed"], true);
        assert!(items[0]["addedDate"].is_string());
        assert_eq!(items[1]["completionDate"], "");
    }
}
