use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::schemas::{Expense, Group};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

// Whole-array rewrite on every save. The store holds a handful of records and
// the server runs a single worker, so no locking is involved.
fn append_to_array<T: Serialize + DeserializeOwned>(
    path: &Path,
    item: T,
) -> Result<(), StorageError> {
    let mut items = load_array::<T>(path)?;
    items.push(item);
    fs::write(path, serde_json::to_string(&items)?)?;
    Ok(())
}

/// Groups stored as one JSON array in a flat file.
#[derive(Clone, Debug)]
pub struct GroupRepository {
    path: PathBuf,
}

impl GroupRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All stored groups; a missing file reads as the empty list.
    pub fn load_groups(&self) -> Result<Vec<Group>, StorageError> {
        load_array(&self.path)
    }

    pub fn save_group(&self, group: Group) -> Result<(), StorageError> {
        append_to_array(&self.path, group)
    }
}

/// Expenses for every group, stored as one JSON array in a flat file.
#[derive(Clone, Debug)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_expenses(&self) -> Result<Vec<Expense>, StorageError> {
        load_array(&self.path)
    }

    pub fn save_expense(&self, expense: Expense) -> Result<(), StorageError> {
        append_to_array(&self.path, expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn group(name: &str) -> Group {
        Group {
            name: name.to_string(),
            members: vec!["alice".to_string(), "bob".to_string()],
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let repo = GroupRepository::new(dir.path().join("groups.json"));
        assert_eq!(repo.load_groups().unwrap(), vec![]);
    }

    #[test]
    fn saved_groups_append_in_order() {
        let dir = TempDir::new().unwrap();
        let repo = GroupRepository::new(dir.path().join("groups.json"));

        repo.save_group(group("trip")).unwrap();
        repo.save_group(group("dinner")).unwrap();

        let loaded = repo.load_groups().unwrap();
        assert_eq!(loaded, vec![group("trip"), group("dinner")]);
    }

    #[test]
    fn expenses_round_trip_through_the_file() {
        let dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(dir.path().join("expenses.json"));
        let expense = Expense {
            group_name: "trip".to_string(),
            expense_name: "lunch".to_string(),
            payer: "alice".to_string(),
            amount: 2000,
        };

        repo.save_expense(expense.clone()).unwrap();
        assert_eq!(repo.load_expenses().unwrap(), vec![expense]);
    }

    #[test]
    fn expenses_are_stored_in_camel_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(&path);

        repo.save_expense(Expense {
            group_name: "trip".to_string(),
            expense_name: "lunch".to_string(),
            payer: "alice".to_string(),
            amount: 2000,
        })
        .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"groupName\":\"trip\""));
        assert!(raw.contains("\"expenseName\":\"lunch\""));
    }

    #[test]
    fn malformed_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.json");
        fs::write(&path, "not json").unwrap();

        let repo = GroupRepository::new(path);
        assert!(matches!(repo.load_groups(), Err(StorageError::Json(_))));
    }
}
