/// How successors of an expanded cell are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborMode {
    /// Jump Point Search: prune neighbors and jump to the next jump point.
    #[default]
    Pruned,
    /// Plain A*: every legal neighbor is a successor.
    All,
}

/// Configuration for a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Successor generation strategy.
    pub neighbors: NeighborMode,
    /// Keep every successor produced by the last search, readable through
    /// [`PathFinder::jump_points`](crate::PathFinder::jump_points).
    pub record_jump_points: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            neighbors: NeighborMode::Pruned,
            record_jump_points: true,
        }
    }
}
