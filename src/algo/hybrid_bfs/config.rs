/// Below this ratio of `unvisited_edges / frontier_edges`, top-down switches to bottom-up
pub const DEFAULT_BOTTOM_UP_RATIO: f64 = 10.0;

/// Above this ratio of `number_of_nodes / frontier_size`, bottom-up switches back to top-down
pub const DEFAULT_TOP_DOWN_RATIO: f64 = 20.0;

/// Initial capacity of each frontier buffer if allocation is not eager
pub const DEFAULT_LAZY_CAPACITY: usize = 1024;

/// Tuning knobs of [`HybridBfs`](super::HybridBfs).
///
/// The default thresholds are empirical values that work well on social and web graphs.
/// All setters follow the builder pattern:
/// ```
/// use dobfs::algo::HybridBfsConfig;
///
/// let config = HybridBfsConfig::new()
///     .bottom_up_ratio(14.0)
///     .top_down_ratio(24.0)
///     .eager_allocation(false);
/// assert_eq!(config.bottom_up_ratio, 14.0);
/// assert!(!config.eager_allocation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridBfsConfig {
    /// Switch from top-down to bottom-up once `unvisited_edges / frontier_edges` drops below
    /// this value. `0.0` disables bottom-up steps entirely.
    pub bottom_up_ratio: f64,

    /// Switch from bottom-up back to top-down once `number_of_nodes / frontier_size` exceeds
    /// this value. `f64::INFINITY` keeps a search bottom-up once it switched.
    pub top_down_ratio: f64,

    /// Pre-size both frontier buffers to the number of nodes. Faster for repeated searches on
    /// large graphs, at the cost of memory that may never be used on sparse reachability.
    pub eager_allocation: bool,

    /// Initial capacity of each frontier buffer if `eager_allocation` is not set
    pub lazy_capacity: usize,
}

impl Default for HybridBfsConfig {
    fn default() -> Self {
        Self {
            bottom_up_ratio: DEFAULT_BOTTOM_UP_RATIO,
            top_down_ratio: DEFAULT_TOP_DOWN_RATIO,
            eager_allocation: true,
            lazy_capacity: DEFAULT_LAZY_CAPACITY,
        }
    }
}

impl HybridBfsConfig {
    /// Creates a config with the default thresholds and eager allocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the top-down to bottom-up threshold.
    /// ** Panics if `ratio` is negative or NaN **
    pub fn bottom_up_ratio(mut self, ratio: f64) -> Self {
        assert!(ratio >= 0.0, "Threshold ratios have to be non-negative");
        self.bottom_up_ratio = ratio;
        self
    }

    /// Updates the bottom-up to top-down threshold.
    /// ** Panics if `ratio` is negative or NaN **
    pub fn top_down_ratio(mut self, ratio: f64) -> Self {
        assert!(ratio >= 0.0, "Threshold ratios have to be non-negative");
        self.top_down_ratio = ratio;
        self
    }

    /// Sets whether frontier buffers are sized to the number of nodes upfront
    pub fn eager_allocation(mut self, eager: bool) -> Self {
        self.eager_allocation = eager;
        self
    }

    /// Updates the initial frontier capacity used without eager allocation
    pub fn lazy_capacity(mut self, capacity: usize) -> Self {
        self.lazy_capacity = capacity;
        self
    }

    /// Returns *true* if pulling from the unvisited side is expected to be cheaper than pushing
    /// from the frontier. A frontier without edges never triggers the switch.
    pub fn prefers_bottom_up(&self, unvisited_edges: u64, frontier_edges: u64) -> bool {
        frontier_edges > 0 && (unvisited_edges as f64 / frontier_edges as f64) < self.bottom_up_ratio
    }

    /// Returns *true* if the frontier became small enough relative to the whole graph for
    /// pushing to be cheaper again.
    pub fn prefers_top_down(&self, number_of_nodes: u64, frontier_size: u64) -> bool {
        frontier_size == 0 || (number_of_nodes as f64 / frontier_size as f64) > self.top_down_ratio
    }

    /// Capacity each frontier buffer is created with for a graph of `n` nodes
    pub(crate) fn frontier_capacity(&self, n: usize) -> usize {
        if self.eager_allocation {
            n
        } else {
            self.lazy_capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = HybridBfsConfig::default();

        // 100 unvisited in-edges vs. 100 frontier out-edges (star center)
        assert!(config.prefers_bottom_up(100, 100));
        assert!(config.prefers_bottom_up(99, 10));
        assert!(!config.prefers_bottom_up(100, 10));
        assert!(!config.prefers_bottom_up(0, 0));
        assert!(!config.prefers_bottom_up(5, 0));

        assert!(config.prefers_top_down(1000, 49));
        assert!(!config.prefers_top_down(1000, 50));
        assert!(!config.prefers_top_down(101, 100));
    }

    #[test]
    fn disabled_switches() {
        let never_bottom_up = HybridBfsConfig::new().bottom_up_ratio(0.0);
        assert!(!never_bottom_up.prefers_bottom_up(0, 1));

        let stay_bottom_up = HybridBfsConfig::new().top_down_ratio(f64::INFINITY);
        assert!(!stay_bottom_up.prefers_top_down(u64::MAX, 1));
    }

    #[test]
    fn frontier_capacity() {
        assert_eq!(HybridBfsConfig::new().frontier_capacity(5000), 5000);
        assert_eq!(
            HybridBfsConfig::new()
                .eager_allocation(false)
                .frontier_capacity(5000),
            DEFAULT_LAZY_CAPACITY
        );
    }

    #[test]
    #[should_panic]
    fn negative_ratio() {
        let _ = HybridBfsConfig::new().bottom_up_ratio(-1.0);
    }
}
