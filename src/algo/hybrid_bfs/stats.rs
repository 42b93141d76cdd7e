use super::*;

/// Expansion strategy a [`HybridBfs`] uses for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Initial top-down phase
    #[default]
    TopDown,
    /// Bottom-up phase
    BottomUp,
    /// Top-down again after a bottom-up phase; expands like [`Stage::TopDown`] but never
    /// switches to bottom-up again
    TopDownAgain,
}

impl Stage {
    /// Returns *true* for both top-down variants
    pub fn is_top_down(self) -> bool {
        !self.is_bottom_up()
    }

    /// Returns *true* for the bottom-up phase
    pub fn is_bottom_up(self) -> bool {
        self == Stage::BottomUp
    }
}

/// A change of expansion strategy before expanding `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSwitch {
    pub level: Distance,
    pub from: Stage,
    pub to: Stage,
}

/// Summary of the most recent [`HybridBfs::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub source: Node,
    pub direction: EdgeDirection,
    /// Value returned by the run
    pub max_distance: Distance,
    /// Sum of the sizes of all frontiers the search loop started a level with
    pub visited: u64,
    /// Size of the frontier at the start of every level, indexed by level
    pub frontier_sizes: Vec<usize>,
    pub top_down_levels: u32,
    pub bottom_up_levels: u32,
    pub switches: Vec<StageSwitch>,
    pub target_found: bool,
    pub hit_distance_limit: bool,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new(INVALID_NODE, EdgeDirection::Forward)
    }
}

impl SearchStats {
    pub(crate) fn new(source: Node, direction: EdgeDirection) -> Self {
        Self {
            source,
            direction,
            max_distance: UNREACHED,
            visited: 0,
            frontier_sizes: Vec::new(),
            top_down_levels: 0,
            bottom_up_levels: 0,
            switches: Vec::new(),
            target_found: false,
            hit_distance_limit: false,
        }
    }

    /// Prepares the statistics for a new run from `source`, keeping the allocations of the
    /// per-level buffers
    pub(crate) fn reset(&mut self, source: Node, direction: EdgeDirection) {
        self.source = source;
        self.direction = direction;
        self.max_distance = UNREACHED;
        self.visited = 0;
        self.frontier_sizes.clear();
        self.top_down_levels = 0;
        self.bottom_up_levels = 0;
        self.switches.clear();
        self.target_found = false;
        self.hit_distance_limit = false;
    }

    /// Returns *true* if the search ever expanded a level bottom-up
    pub fn used_bottom_up(&self) -> bool {
        self.bottom_up_levels > 0
    }

    /// Returns the level before which the search first switched to bottom-up
    pub fn first_bottom_up_level(&self) -> Option<Distance> {
        self.switches
            .iter()
            .find(|s| s.to.is_bottom_up())
            .map(|s| s.level)
    }

    pub(crate) fn record_expansion(&mut self, stage: Stage) {
        if stage.is_bottom_up() {
            self.bottom_up_levels += 1;
        } else {
            self.top_down_levels += 1;
        }
    }
}
