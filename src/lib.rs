// Undo/Redo - Library exports for tests and benchmarks

pub mod command;
pub mod config;

// Re-export commonly used types for convenience
pub use command::{
    AddCommand, AppendTextCommand, CommandError, CommandManager, CommandResult, HistoryEvent,
    HistoryListener, HistorySnapshot, MultiplyCommand, UndoableCommand,
};
pub use config::{ConfigError, HistoryConfig};
