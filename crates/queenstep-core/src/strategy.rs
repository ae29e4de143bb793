//! Search strategy selection.

/// The search strategy used to produce events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    /// Depth-first search with explicit place/undo.
    /// Announces every placement, removal and solution.
    #[default]
    Backtracking,

    /// Best-first search over partial assignments ordered by `f = g + h`.
    /// Announces only states that are actually expanded.
    BestFirst,
}

impl SearchStrategy {
    /// Returns all strategies in a stable order.
    pub fn all() -> [SearchStrategy; 2] {
        [SearchStrategy::Backtracking, SearchStrategy::BestFirst]
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Backtracking => write!(f, "Backtracking"),
            SearchStrategy::BestFirst => write!(f, "BestFirst"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_display() {
        assert_eq!(format!("{}", SearchStrategy::Backtracking), "Backtracking");
        assert_eq!(format!("{}", SearchStrategy::BestFirst), "BestFirst");
    }

    #[test]
    fn test_strategy_default() {
        assert_eq!(SearchStrategy::default(), SearchStrategy::Backtracking);
    }

    #[test]
    fn test_all_strategies() {
        assert_eq!(
            SearchStrategy::all(),
            [SearchStrategy::Backtracking, SearchStrategy::BestFirst]
        );
    }
}
