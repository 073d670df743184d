//! Loading and saving history configuration files

use std::fs;
use undo_redo::{AddCommand, CommandManager, ConfigError, HistoryConfig};

#[test]
fn test_save_and_load_ron() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.ron");

    let config = HistoryConfig::bounded(25);
    config.save(&path).unwrap();

    assert!(path.exists());
    assert_eq!(HistoryConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, r#"{ "max_history": 2 }"#).unwrap();

    let config = HistoryConfig::load(&path).unwrap();
    assert_eq!(config.max_history, Some(2));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");

    let config = HistoryConfig::load_or_default(&path).unwrap();
    assert_eq!(config, HistoryConfig::default());
}

#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ max_history: ").unwrap();

    let result = HistoryConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn test_manager_from_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.ron");
    fs::write(&path, "(max_history: Some(2))").unwrap();

    let config = HistoryConfig::load(&path).unwrap();
    let mut manager: CommandManager<i64> = CommandManager::with_config(&config);
    let mut value: i64 = 0;

    for amount in 1..=4 {
        manager
            .execute(Box::new(AddCommand::new(amount)), &mut value)
            .unwrap();
    }

    assert_eq!(manager.max_history(), Some(2));
    assert_eq!(manager.undo_count(), 2);
    assert_eq!(value, 10);
}
