// UndoableCommand trait definition

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
///
/// An empty undo or redo history is not an error: the manager reports it as a
/// no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// The command operand cannot be applied (e.g. a factor with no inverse)
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
}

/// Trait for commands that support undo/redo
///
/// A command encapsulates one reversible mutation of a target of type `T`.
/// The target is owned by the caller and lent to the command for the duration
/// of each call.
///
/// # Thread Safety
/// Commands must be Send so a whole history can be moved between threads.
///
/// # Example
/// ```
/// use undo_redo::command::{CommandError, CommandResult, UndoableCommand};
///
/// struct SetCommand {
///     new_value: i64,
///     old_value: Option<i64>,
/// }
///
/// impl UndoableCommand<i64> for SetCommand {
///     fn execute(&mut self, target: &mut i64) -> CommandResult<()> {
///         self.old_value = Some(*target);
///         *target = self.new_value;
///         Ok(())
///     }
///
///     fn undo(&mut self, target: &mut i64) -> CommandResult<()> {
///         let old = self
///             .old_value
///             .ok_or_else(|| CommandError::UndoFailed("No old value stored".into()))?;
///         *target = old;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         format!("Set to {}", self.new_value)
///     }
/// }
/// ```
pub trait UndoableCommand<T>: Send {
    /// Apply the forward mutation to `target`
    ///
    /// On error the target must be left unchanged.
    fn execute(&mut self, target: &mut T) -> CommandResult<()>;

    /// Apply the exact inverse of the last execute()
    ///
    /// Restores `target` to the value it had before that execute().
    fn undo(&mut self, target: &mut T) -> CommandResult<()>;

    /// Get a human-readable description of the command
    ///
    /// Used for diagnostics only (e.g., "Undone: Add 5").
    fn description(&self) -> String;
}
