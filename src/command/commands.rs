// Concrete command implementations

use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};

/// Command that adds a constant to an integer
///
/// The inverse subtracts the same constant. Arithmetic is checked: an overflow
/// fails the call and leaves the target untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddCommand {
    amount: i64,
}

impl AddCommand {
    /// Create a new AddCommand
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl UndoableCommand<i64> for AddCommand {
    fn execute(&mut self, target: &mut i64) -> CommandResult<()> {
        *target = target.checked_add(self.amount).ok_or_else(|| {
            CommandError::ExecutionFailed(format!("{} + {} overflows", target, self.amount))
        })?;
        Ok(())
    }

    fn undo(&mut self, target: &mut i64) -> CommandResult<()> {
        *target = target.checked_sub(self.amount).ok_or_else(|| {
            CommandError::UndoFailed(format!("{} - {} overflows", target, self.amount))
        })?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add {}", self.amount)
    }
}

/// Command that multiplies an integer by a constant factor
///
/// The inverse is integer division by the same factor (truncating toward
/// zero). It is exact only when paired with the matching execute(), which is
/// what the manager guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyCommand {
    factor: i64,
}

impl MultiplyCommand {
    /// Create a new MultiplyCommand
    ///
    /// A factor of 0 has no inverse; execute() rejects it.
    pub fn new(factor: i64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> i64 {
        self.factor
    }
}

impl UndoableCommand<i64> for MultiplyCommand {
    fn execute(&mut self, target: &mut i64) -> CommandResult<()> {
        if self.factor == 0 {
            return Err(CommandError::InvalidOperand(
                "Multiplying by 0 cannot be undone".into(),
            ));
        }

        *target = target.checked_mul(self.factor).ok_or_else(|| {
            CommandError::ExecutionFailed(format!("{} * {} overflows", target, self.factor))
        })?;
        Ok(())
    }

    fn undo(&mut self, target: &mut i64) -> CommandResult<()> {
        *target = target.checked_div(self.factor).ok_or_else(|| {
            CommandError::UndoFailed(format!("{} / {} is undefined", target, self.factor))
        })?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Multiply by {}", self.factor)
    }
}

/// Command that types text at the end of a buffer
///
/// Stores the buffer length before the append so undo can cut the buffer back
/// to exactly that point. Undo fails if the buffer no longer ends with the
/// appended text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendTextCommand {
    text: String,
    previous_len: Option<usize>,
}

impl AppendTextCommand {
    /// Create a new AppendTextCommand
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            previous_len: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl UndoableCommand<String> for AppendTextCommand {
    fn execute(&mut self, target: &mut String) -> CommandResult<()> {
        // Store old length for undo
        self.previous_len = Some(target.len());
        target.push_str(&self.text);
        Ok(())
    }

    fn undo(&mut self, target: &mut String) -> CommandResult<()> {
        let previous_len = self
            .previous_len
            .ok_or_else(|| CommandError::UndoFailed("No previous length stored".into()))?;

        if target.get(previous_len..) != Some(self.text.as_str()) {
            return Err(CommandError::UndoFailed(format!(
                "Buffer no longer ends with '{}'",
                self.text
            )));
        }

        target.truncate(previous_len);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Type '{}'", self.text)
    }
}
