// Command Pattern for Undo/Redo functionality
//
// Every reversible mutation of a caller-owned value goes through an
// UndoableCommand handed to a CommandManager.
//
// Architecture:
// - UndoableCommand trait: Defines execute(), undo(), description()
// - CommandManager: Manages undo/redo stacks
// - Concrete commands: AddCommand, MultiplyCommand, AppendTextCommand
// - HistoryEvent / HistoryListener: narration of every stack transition
// - HistorySnapshot: serializable view of both stacks
//
// The target value is never owned by a command. It is passed to each
// execute()/undo() call, so the caller keeps ownership for the whole session.

pub mod commands;
pub mod events;
pub mod manager;
pub mod snapshot;
pub mod trait_def;

pub use commands::{AddCommand, AppendTextCommand, MultiplyCommand};
pub use events::{HistoryEvent, HistoryListener};
pub use manager::CommandManager;
pub use snapshot::{EntryId, HistoryEntry, HistorySnapshot};
pub use trait_def::{CommandError, CommandResult, UndoableCommand};
