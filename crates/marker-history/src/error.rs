/// Errors returned by history operations.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Coarse classification of a [`HistoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Undo/redo moved past the available history.
    OutOfRange,
    /// A cursor position does not fit the (current or supplied) state list.
    InvalidIndex,
}

/// A rejected history operation. The history is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("There is not previous state.")]
    NoPreviousState,

    #[error("There is not next state.")]
    NoNextState,

    #[error("Invalid state index.")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid combination of index and new states.")]
    InvalidCombination { index: usize, len: usize },
}

impl HistoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoPreviousState | Self::NoNextState => ErrorKind::OutOfRange,
            Self::InvalidIndex { .. } | Self::InvalidCombination { .. } => ErrorKind::InvalidIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            HistoryError::NoPreviousState.to_string(),
            "There is not previous state."
        );
        assert_eq!(HistoryError::NoNextState.to_string(), "There is not next state.");
        assert_eq!(
            HistoryError::InvalidIndex { index: 2, len: 1 }.to_string(),
            "Invalid state index."
        );
        assert_eq!(
            HistoryError::InvalidCombination { index: 2, len: 2 }.to_string(),
            "Invalid combination of index and new states."
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(HistoryError::NoPreviousState.kind(), ErrorKind::OutOfRange);
        assert_eq!(HistoryError::NoNextState.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            HistoryError::InvalidIndex { index: 0, len: 0 }.kind(),
            ErrorKind::InvalidIndex
        );
        assert_eq!(
            HistoryError::InvalidCombination { index: 0, len: 0 }.kind(),
            ErrorKind::InvalidIndex
        );
    }
}
