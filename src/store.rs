use chrono::{NaiveDate, NaiveDateTime};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::AppConfig,
    constants::*,
    models::{ReminderEntry, ReminderRecord},
    utils::{format_date, StoreError},
};

/// Flat JSON file holding the ordered reminder list.
pub struct ReminderStore {
    path: PathBuf,
    backup_dir: Option<PathBuf>,
}

impl ReminderStore {
    pub fn new(path: impl Into<PathBuf>, backup_dir: Option<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_dir,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.reminders_file.clone(), config.backup_dir.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry from the file.
    ///
    /// A missing file is seeded with one example record, which is written back
    /// and returned.
    pub fn load(&self, now: NaiveDateTime) -> Result<Vec<ReminderEntry>, StoreError> {
        if !self.path.exists() {
            tracing::info!(
                "{} does not exist, creating it with an example reminder",
                self.path.display()
            );
            let entries = vec![ReminderEntry::from(ReminderRecord::example(now))];
            if let Err(e) = self.save(&entries, now.date()) {
                tracing::warn!("not able to write example reminders: {e}");
            }
            return Ok(entries);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        if content.trim().is_empty() {
            tracing::warn!("{} is empty", self.path.display());
            return Ok(vec![]);
        }
        let entries: Vec<ReminderEntry> =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!("loaded {} reminders", entries.len());
        Ok(entries)
    }

    /// Write all entries back, pretty printed, in their original order
    pub fn save(&self, entries: &[ReminderEntry], today: NaiveDate) -> Result<(), StoreError> {
        let mut content = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
        content.push('\n');
        self.backup(today);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;
        tracing::info!("saved {} reminders", entries.len());
        Ok(())
    }

    /// Path of the backup taken on `today`, if backups are enabled
    pub fn backup_path(&self, today: NaiveDate) -> Option<PathBuf> {
        let dir = self.backup_dir.as_ref()?;
        let name = format!("{}{}.json", BACKUP_FILE_PREFIX, format_date(today));
        Some(dir.join(name))
    }

    // copies the current file aside, at most once per day
    fn backup(&self, today: NaiveDate) {
        let Some(backup_path) = self.backup_path(today) else {
            return;
        };
        if backup_path.exists() || !self.path.exists() {
            return;
        }
        let result = backup_path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::copy(&self.path, &backup_path));
        match result {
            Ok(_) => tracing::info!("created backup {}", backup_path.display()),
            Err(e) => tracing::warn!("not able to create backup {}: {e}", backup_path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    }

    fn store_in(dir: &TempDir) -> ReminderStore {
        ReminderStore::new(
            dir.path().join("reminders.json"),
            Some(dir.path().join("backups")),
        )
    }

    #[test]
    fn test_load_missing_file_seeds_example() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let entries = store.load(now()).unwrap();
        assert_eq!(entries, vec![ReminderEntry::from(ReminderRecord::example(now()))]);
        assert!(store.path().exists());
        let reloaded = store.load(now()).unwrap();
        assert_eq!(reloaded, entries);
        // nothing existed to back up
        assert!(!dir.path().join("backups").exists());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        let result = store.load(now());
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_load_object_instead_of_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"name": "a"}"#).unwrap();
        let result = store.load(now());
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load(now()).unwrap().is_empty());
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ReminderStore::new(dir.path().join("reminders.json"), None);
        let raw = json!([
            {"id": 1, "name": "Water plants", "lastUpdated": "2024-01-01", "days": 3, "createdAt": "2023-12-01T08:00:00"},
            {"id": 2, "name": "备份数据库", "lastUpdated": "2024-01-02", "days": 7},
            {"id": "r-3", "name": "odd", "lastUpdated": null, "days": 2.5},
            "stray note"
        ]);
        fs::write(store.path(), serde_json::to_string(&raw).unwrap()).unwrap();
        let entries = store.load(now()).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(matches!(entries[2], ReminderEntry::Record(_)));
        assert!(matches!(entries[3], ReminderEntry::Malformed(_)));
        store.save(&entries, now().date()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("备份数据库"));
        assert!(content.contains("\n  {\n    \"id\": 1,"));
        let saved: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(saved, raw);
        assert_eq!(store.load(now()).unwrap(), entries);
    }

    #[test]
    fn test_save_creates_one_backup_per_day() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let today = now().date();
        fs::write(store.path(), "[]").unwrap();
        let first = vec![ReminderEntry::from(ReminderRecord::example(now()))];
        store.save(&first, today).unwrap();
        let backup = store.backup_path(today).unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "[]");
        // a second save on the same day keeps the original backup
        store.save(&[], today).unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "[]");
        assert!(store.load(now()).unwrap().is_empty());
    }

    #[test]
    fn test_backup_path() {
        let store = ReminderStore::new("reminders.json", Some(PathBuf::from("backups")));
        let path = store.backup_path(now().date()).unwrap();
        assert_eq!(path, PathBuf::from("backups/reminders-2024-01-04.json"));
        let store = ReminderStore::new("reminders.json", None);
        assert_eq!(store.backup_path(now().date()), None);
    }
}
