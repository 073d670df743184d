// CommandManager - Manages undo/redo stacks

use crate::command::events::{HistoryEvent, HistoryListener};
use crate::command::snapshot::{HistoryEntry, HistorySnapshot};
use crate::command::trait_def::{CommandResult, UndoableCommand};
use crate::config::HistoryConfig;
use std::collections::VecDeque;

/// A command together with its history metadata
struct Recorded<T> {
    command: Box<dyn UndoableCommand<T>>,
    entry: HistoryEntry,
}

/// Manages command execution and undo/redo functionality
///
/// The CommandManager maintains two stacks:
/// - Undo stack: Commands that have been executed and can be undone
/// - Redo stack: Commands that have been undone and can be redone
///
/// When a new command is executed:
/// 1. Execute the command
/// 2. Push it onto the undo stack
/// 3. Clear the redo stack (since we're on a new timeline)
///
/// Undo and redo on an empty stack are reported no-ops: they return
/// `Ok(None)`, emit a [`HistoryEvent`] and leave the target untouched.
///
/// # Memory Management
/// History is unbounded by default. With a `max_history` limit the oldest
/// command is removed once the undo stack grows past it.
pub struct CommandManager<T> {
    /// Stack of commands that can be undone (most recent at the back)
    undo_stack: VecDeque<Recorded<T>>,

    /// Stack of commands that can be redone (most recent at the back)
    redo_stack: VecDeque<Recorded<T>>,

    /// Maximum number of commands to keep in history
    max_history: Option<usize>,

    /// Optional observer for every stack transition
    listener: Option<Box<dyn HistoryListener>>,
}

impl<T> CommandManager<T> {
    /// Create a new CommandManager with unbounded history
    pub fn new() -> Self {
        Self::with_config(&HistoryConfig::default())
    }

    /// Create a new CommandManager with a history limit
    pub fn with_capacity(max_history: usize) -> Self {
        Self::with_config(&HistoryConfig::bounded(max_history))
    }

    /// Create a new CommandManager from a configuration
    pub fn with_config(config: &HistoryConfig) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_history: config.max_history,
            listener: None,
        }
    }

    /// Attach a listener (builder style)
    pub fn with_listener(mut self, listener: impl HistoryListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Attach a listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl HistoryListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Detach the current listener
    pub fn remove_listener(&mut self) {
        self.listener = None;
    }

    /// Execute a command and add it to the undo stack
    ///
    /// This will:
    /// 1. Execute the command
    /// 2. Add it to the undo stack (if successful)
    /// 3. Clear the redo stack (new timeline)
    /// 4. Trim history if needed
    ///
    /// # Errors
    /// Returns the command's error if execution fails. In that case nothing is
    /// recorded and the redo stack is kept.
    pub fn execute(
        &mut self,
        mut command: Box<dyn UndoableCommand<T>>,
        target: &mut T,
    ) -> CommandResult<()> {
        command.execute(target)?;

        let description = command.description();
        self.undo_stack.push_back(Recorded {
            command,
            entry: HistoryEntry::new(description.clone()),
        });
        self.emit(HistoryEvent::Executed { description });

        let discarded = self.redo_stack.len();
        if discarded > 0 {
            self.redo_stack.clear();
            self.emit(HistoryEvent::RedoCleared { discarded });
        }

        self.trim_history();

        Ok(())
    }

    /// Undo the last command
    ///
    /// Pops the last command from the undo stack, undoes it, and pushes it to
    /// the redo stack. Returns the description of the undone command, or
    /// `None` when there was nothing to undo.
    ///
    /// # Errors
    /// Returns an error if the command's undo fails. The command then stays on
    /// the undo stack.
    pub fn undo(&mut self, target: &mut T) -> CommandResult<Option<String>> {
        let Some(mut recorded) = self.undo_stack.pop_back() else {
            self.emit(HistoryEvent::NothingToUndo);
            return Ok(None);
        };

        if let Err(err) = recorded.command.undo(target) {
            log::warn!("Undo of '{}' failed: {}", recorded.entry.description, err);
            self.undo_stack.push_back(recorded);
            return Err(err);
        }

        let description = recorded.entry.description.clone();
        self.redo_stack.push_back(recorded);
        self.emit(HistoryEvent::Undone {
            description: description.clone(),
        });

        Ok(Some(description))
    }

    /// Redo the last undone command
    ///
    /// Pops the last command from the redo stack, executes it again, and
    /// pushes it to the undo stack. Returns the description of the redone
    /// command, or `None` when there was nothing to redo.
    ///
    /// # Errors
    /// Returns an error if the re-execution fails. The command then stays on
    /// the redo stack.
    pub fn redo(&mut self, target: &mut T) -> CommandResult<Option<String>> {
        let Some(mut recorded) = self.redo_stack.pop_back() else {
            self.emit(HistoryEvent::NothingToRedo);
            return Ok(None);
        };

        if let Err(err) = recorded.command.execute(target) {
            log::warn!("Redo of '{}' failed: {}", recorded.entry.description, err);
            self.redo_stack.push_back(recorded);
            return Err(err);
        }

        let description = recorded.entry.description.clone();
        self.undo_stack.push_back(recorded);
        self.emit(HistoryEvent::Redone {
            description: description.clone(),
        });

        Ok(Some(description))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|r| r.entry.description.clone())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(|r| r.entry.description.clone())
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.emit(HistoryEvent::Cleared);
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_history(&self) -> Option<usize> {
        self.max_history
    }

    /// Change the history limit, trimming the undo stack right away
    pub fn set_max_history(&mut self, max_history: Option<usize>) {
        self.max_history = max_history;
        self.trim_history();
    }

    /// Copy of both stacks' metadata, oldest first
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            undo: self.undo_stack.iter().map(|r| r.entry.clone()).collect(),
            redo: self.redo_stack.iter().map(|r| r.entry.clone()).collect(),
        }
    }

    fn trim_history(&mut self) {
        let Some(max_history) = self.max_history else {
            return;
        };

        while self.undo_stack.len() > max_history {
            if let Some(evicted) = self.undo_stack.pop_front() {
                self.emit(HistoryEvent::Evicted {
                    description: evicted.entry.description,
                });
            }
        }
    }

    fn emit(&mut self, event: HistoryEvent) {
        if event.is_noop() {
            log::info!("{}", event);
        } else {
            log::debug!("{}", event);
        }

        if let Some(listener) = self.listener.as_mut() {
            listener.on_event(&event);
        }
    }
}

impl<T> Default for CommandManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
