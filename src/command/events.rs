// History events - narration of undo/redo stack transitions

use std::fmt;

/// A state change (or reported no-op) of a CommandManager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A new command was executed and recorded
    Executed { description: String },
    /// The most recent command was undone
    Undone { description: String },
    /// The most recently undone command was applied again
    Redone { description: String },
    /// undo() was called with an empty history
    NothingToUndo,
    /// redo() was called with an empty redo history
    NothingToRedo,
    /// A new command invalidated the redo history
    RedoCleared { discarded: usize },
    /// The oldest command fell out of a bounded history
    Evicted { description: String },
    /// Both stacks were emptied
    Cleared,
}

impl HistoryEvent {
    /// Whether this event reports an operation that changed nothing
    pub fn is_noop(&self) -> bool {
        matches!(self, HistoryEvent::NothingToUndo | HistoryEvent::NothingToRedo)
    }
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEvent::Executed { description } => write!(f, "Executed: {}", description),
            HistoryEvent::Undone { description } => write!(f, "Undone: {}", description),
            HistoryEvent::Redone { description } => write!(f, "Redone: {}", description),
            HistoryEvent::NothingToUndo => write!(f, "Nothing to undo"),
            HistoryEvent::NothingToRedo => write!(f, "Nothing to redo"),
            HistoryEvent::RedoCleared { discarded } => {
                write!(f, "Discarded {} redo entries", discarded)
            }
            HistoryEvent::Evicted { description } => {
                write!(f, "Evicted from history: {}", description)
            }
            HistoryEvent::Cleared => write!(f, "History cleared"),
        }
    }
}

/// Observer notified of every HistoryEvent
///
/// Any `FnMut(&HistoryEvent) + Send` closure is a listener.
pub trait HistoryListener: Send {
    fn on_event(&mut self, event: &HistoryEvent);
}

impl<F> HistoryListener for F
where
    F: FnMut(&HistoryEvent) + Send,
{
    fn on_event(&mut self, event: &HistoryEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = HistoryEvent::Undone {
            description: "Add 5".into(),
        };
        assert_eq!(event.to_string(), "Undone: Add 5");
        assert_eq!(HistoryEvent::NothingToRedo.to_string(), "Nothing to redo");
        assert_eq!(
            HistoryEvent::RedoCleared { discarded: 2 }.to_string(),
            "Discarded 2 redo entries"
        );
    }

    #[test]
    fn test_is_noop() {
        assert!(HistoryEvent::NothingToUndo.is_noop());
        assert!(HistoryEvent::NothingToRedo.is_noop());
        assert!(!HistoryEvent::Cleared.is_noop());
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |event: &HistoryEvent| seen.push(event.to_string());
            listener.on_event(&HistoryEvent::NothingToUndo);
        }
        assert_eq!(seen, vec!["Nothing to undo".to_string()]);
    }
}
