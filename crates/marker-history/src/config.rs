/// Configuration for the history store.

/// Default cap on stored states. Zero means the history grows without bound.
const DEFAULT_MAX_DEPTH: usize = 0;

/// Configuration for a [`crate::StateHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max states kept after `add_state` (0 = unlimited).
    /// The oldest states are dropped first.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Creates a config capped at `max_depth` states.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Whether a depth limit is in effect.
    pub fn is_bounded(&self) -> bool {
        self.max_depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unbounded() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_depth, 0);
        assert!(!config.is_bounded());
    }

    #[test]
    fn test_with_max_depth() {
        let config = HistoryConfig::with_max_depth(10);
        assert_eq!(config.max_depth, 10);
        assert!(config.is_bounded());
    }
}
