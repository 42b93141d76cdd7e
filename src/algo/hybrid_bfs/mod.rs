/*!
Direction-optimizing breadth-first search.

A [`HybridBfs`] computes hop distances from a single source and decides before every level
whether to expand it [`TopDown`] (frontier nodes push to their neighbors) or [`BottomUp`]
(unvisited nodes pull from a parent in the frontier):

- While top-down, it switches to bottom-up once the edges incident to unvisited nodes become few
  compared to the edges incident to the frontier
  (`unvisited_edges / frontier_edges < bottom_up_ratio`).
- While bottom-up, it switches back once the frontier became small compared to the graph
  (`number_of_nodes / frontier_size > top_down_ratio`). The search then stays top-down until it
  terminates.

The engine is meant for many searches over the same graph: the distance array and both frontier
buffers are allocated once and reused by every call of [`HybridBfs::run`].

# Example
```
use dobfs::{prelude::*, algo::*};

let graph = AdjArrayIn::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
let mut bfs = graph.hybrid_bfs();

assert_eq!(bfs.run(0, true, false, None, None), Ok(4));
assert_eq!(bfs.distances(), &[0, 1, 2, 3, 4]);

assert_eq!(bfs.run(0, true, false, None, Some(2)), Ok(2));
assert_eq!(bfs.distances(), &[0, 1, 2, UNREACHED, UNREACHED]);
```
*/

use log::{debug, trace};

use super::*;

mod config;
mod frontier;
mod stats;
mod step;

pub use config::*;
pub use frontier::*;
pub use stats::*;
pub use step::*;

/// Reusable direction-optimizing BFS over a fixed graph.
///
/// The graph is only borrowed immutably, so any number of engines can search the same graph
/// concurrently. A single engine serializes its searches through `&mut self`.
#[derive(Debug, Clone)]
pub struct HybridBfs<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    config: HybridBfsConfig,
    distances: Vec<Distance>,
    frontier: Frontier,
    stats: SearchStats,
}

impl<'a, G> HybridBfs<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Creates an engine with the default thresholds.
    /// If `eager_allocation` is set, both frontier buffers are sized to the number of nodes.
    pub fn new(graph: &'a G, eager_allocation: bool) -> Self {
        Self::with_config(
            graph,
            HybridBfsConfig::default().eager_allocation(eager_allocation),
        )
    }

    /// Creates an engine with a custom configuration
    pub fn with_config(graph: &'a G, config: HybridBfsConfig) -> Self {
        Self {
            graph,
            config,
            distances: vec![UNREACHED; graph.id_bound() as usize],
            frontier: Frontier::with_capacity(config.frontier_capacity(graph.len())),
            stats: SearchStats::default(),
        }
    }

    /// Runs a complete search from `source` and returns the level counter at termination:
    /// - the eccentricity of `source` if the search ran until no new node was found,
    /// - `max_distance` if that limit was reached first,
    /// - the level whose expansion assigned `target` (i.e. its distance minus one) if the
    ///   target was found; read the target's distance via [`HybridBfs::distance_of`].
    ///
    /// `follow_out`/`follow_in` select the followed edges (see [`EdgeDirection::from_flags`]).
    /// The distance array is reset first, so distances of previous runs never leak into this one.
    ///
    /// # Errors
    /// Fails without touching the distance array if `source` is not a valid vertex, has no edges
    /// in the followed direction, or if neither direction is followed.
    pub fn run(
        &mut self,
        source: Node,
        follow_out: bool,
        follow_in: bool,
        target: Option<Node>,
        max_distance: Option<Distance>,
    ) -> Result<Distance, BfsError> {
        let direction =
            EdgeDirection::from_flags(follow_out, follow_in).ok_or(BfsError::NoDirection)?;

        if !self.graph.is_valid_vertex(source) {
            return Err(BfsError::InvalidSource(source));
        }
        if direction.push_degree(self.graph, source) == 0 {
            return Err(BfsError::SourceWithoutEdges(source));
        }

        self.distances.fill(UNREACHED);
        self.distances[source as usize] = 0;
        self.frontier.reset(source);
        self.stats.reset(source, direction);

        let top_down = TopDown::new(direction);
        let bottom_up = BottomUp::new(direction);

        let mut stage = Stage::TopDown;
        let mut level: Distance = -1;

        while !self.frontier.is_empty() {
            level += 1;
            self.stats.visited += self.frontier.len() as u64;
            self.stats.frontier_sizes.push(self.frontier.len());

            if max_distance == Some(level) {
                self.stats.hit_distance_limit = true;
                break;
            }

            stage = self.next_stage(stage, level, direction);

            let (frontier, next) = self.frontier.split();
            let state = LevelState {
                distances: &mut self.distances,
                frontier,
                next,
                level,
                target,
            };

            let target_found = if stage.is_bottom_up() {
                bottom_up.expand(self.graph, state)
            } else {
                top_down.expand(self.graph, state)
            };
            self.stats.record_expansion(stage);

            if target_found {
                self.stats.target_found = true;
                break;
            }

            self.frontier.advance();
        }

        self.stats.max_distance = level;
        debug!(
            "BFS from {source} finished at level {level} after visiting {} nodes",
            self.stats.visited
        );

        Ok(level)
    }

    /// Runs an unbounded search along out-edges without a target
    pub fn run_from(&mut self, source: Node) -> Result<Distance, BfsError> {
        self.run(source, true, false, None, None)
    }

    /// Evaluates the switch heuristic before expanding `level` and records any change of stage
    fn next_stage(&mut self, stage: Stage, level: Distance, direction: EdgeDirection) -> Stage {
        let next = match stage {
            Stage::TopDown => {
                let frontier_edges = frontier_edges(self.graph, direction, self.frontier.current());
                let unvisited_edges = unvisited_edges(self.graph, direction, &self.distances);
                trace!(
                    "level {level}: {} frontier nodes, {frontier_edges} frontier edges, \
                     {unvisited_edges} unvisited edges",
                    self.frontier.len()
                );

                if self.config.prefers_bottom_up(unvisited_edges, frontier_edges) {
                    Stage::BottomUp
                } else {
                    stage
                }
            }
            Stage::BottomUp => {
                trace!("level {level}: {} frontier nodes", self.frontier.len());

                if self.config.prefers_top_down(
                    self.graph.number_of_nodes() as u64,
                    self.frontier.len() as u64,
                ) {
                    Stage::TopDownAgain
                } else {
                    stage
                }
            }
            // Absorbing: a search never goes bottom-up twice
            Stage::TopDownAgain => {
                trace!("level {level}: {} frontier nodes", self.frontier.len());
                stage
            }
        };

        if next != stage {
            debug!("Changed from {stage:?} to {next:?} at level {level}");
            self.stats.switches.push(StageSwitch {
                level,
                from: stage,
                to: next,
            });
        }

        next
    }

    /// Returns the distance of `u` found by the last search or [`UNREACHED`].
    /// Ids outside of the id space are reported as unreached.
    pub fn distance_of(&self, u: Node) -> Distance {
        self.distances
            .get(u as usize)
            .copied()
            .unwrap_or(UNREACHED)
    }

    /// Returns the distance of `u` found by the last search, if it was reached
    pub fn distance(&self, u: Node) -> Option<NumNodes> {
        reached(self.distance_of(u))
    }

    /// Returns the distance array of the last search, indexed by node id
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Returns all nodes reached by the last search together with their distance
    pub fn reached_nodes(&self) -> impl Iterator<Item = (Node, NumNodes)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(u, &d)| reached(d).map(|d| (u as Node, d)))
    }

    /// Returns the statistics of the last search
    pub fn last_run(&self) -> &SearchStats {
        &self.stats
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn config(&self) -> &HybridBfsConfig {
        &self.config
    }
}

/// Provides [`HybridBfs`] engines directly on graphs
pub trait HybridTraversal: DirectedAdjacencyList + Sized {
    /// Returns an engine with default thresholds and eager allocation
    fn hybrid_bfs(&self) -> HybridBfs<'_, Self> {
        HybridBfs::new(self, true)
    }

    /// Returns an engine with a custom configuration
    fn hybrid_bfs_with(&self, config: HybridBfsConfig) -> HybridBfs<'_, Self> {
        HybridBfs::with_config(self, config)
    }
}

impl<G> HybridTraversal for G where G: DirectedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Configurations covering pure top-down, pure bottom-up, and the default hybrid
    fn configs() -> [HybridBfsConfig; 4] {
        [
            HybridBfsConfig::default(),
            HybridBfsConfig::default().eager_allocation(false).lazy_capacity(1),
            HybridBfsConfig::default().bottom_up_ratio(0.0),
            HybridBfsConfig::default()
                .bottom_up_ratio(f64::INFINITY)
                .top_down_ratio(f64::INFINITY),
        ]
    }

    fn reference_distances<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Distance> {
        graph.bfs_with_predecessor(source).distances()
    }

    fn reversed(graph: &AdjArrayIn) -> AdjArrayIn {
        AdjArrayIn::from_edges(graph.id_bound(), graph.edges(false).map(|e| e.reverse()))
    }

    fn symmetric(graph: &AdjArrayIn) -> AdjArrayIn {
        let mut sym = AdjArrayIn::new(graph.id_bound());
        for Edge(u, v) in graph.edges(false) {
            sym.try_add_edge(u, v);
            sym.try_add_edge(v, u);
        }
        sym
    }

    fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, avg_deg: f64) -> AdjArrayIn {
        AdjArrayIn::gnp_no_loops(rng, n, (avg_deg / n as f64).min(1.0))
    }

    fn path() -> AdjArrayIn {
        let mut graph = AdjArrayIn::new(5);
        graph.connect_path(0..5);
        graph
    }

    #[test]
    fn directed_path() {
        let graph = path();
        let mut bfs = HybridBfs::new(&graph, true);

        assert_eq!(bfs.run(0, true, false, None, None), Ok(4));
        assert_eq!(bfs.distances(), &[0, 1, 2, 3, 4]);
        assert_eq!(bfs.distance(4), Some(4));

        assert_eq!(bfs.run(2, true, false, None, None), Ok(2));
        assert_eq!(bfs.distances(), &[UNREACHED, UNREACHED, 0, 1, 2]);
    }

    #[test]
    fn directed_path_with_limit() {
        let graph = path();
        let mut bfs = HybridBfs::new(&graph, false);

        assert_eq!(bfs.run(0, true, false, None, Some(2)), Ok(2));
        assert_eq!(bfs.distances(), &[0, 1, 2, UNREACHED, UNREACHED]);
        assert!(bfs.last_run().hit_distance_limit);

        assert_eq!(bfs.run(0, true, false, None, Some(0)), Ok(0));
        assert_eq!(bfs.distances(), &[0, UNREACHED, UNREACHED, UNREACHED, UNREACHED]);

        // A limit beyond the eccentricity has no effect
        assert_eq!(bfs.run(0, true, false, None, Some(10)), Ok(4));
        assert!(!bfs.last_run().hit_distance_limit);
    }

    #[test]
    fn star_switches_to_bottom_up() {
        let mut graph = AdjArrayIn::new(101);
        graph.connect_star(0, 1..=100);

        let mut bfs = graph.hybrid_bfs();
        assert_eq!(bfs.run_from(0), Ok(1));

        assert_eq!(bfs.distance_of(0), 0);
        assert!((1..=100).all(|u| bfs.distance_of(u) == 1));

        let stats = bfs.last_run();
        assert!(stats.used_bottom_up());
        // Switched before the expansion that assigns distance 1
        assert_eq!(stats.first_bottom_up_level(), Some(0));
        assert_eq!(
            stats.switches,
            vec![StageSwitch {
                level: 0,
                from: Stage::TopDown,
                to: Stage::BottomUp
            }]
        );
        assert_eq!(stats.visited, 101);
        assert_eq!(stats.frontier_sizes, vec![1, 100]);
    }

    #[test]
    fn switches_back_to_top_down() {
        // A broom: the source fans out to 100 nodes that all lead into a long tail
        let n = 200;
        let mut graph = AdjArrayIn::new(n);
        graph.connect_star(0, 1..=100);
        for u in 1..=100 {
            graph.add_edge(u, 101);
        }
        graph.connect_path(101..n);

        let mut bfs = graph.hybrid_bfs();
        assert_eq!(bfs.run_from(0), Ok((n - 100) as Distance));

        // The sparse tail never sends the search bottom-up a second time
        let stats = bfs.last_run();
        assert_eq!(
            stats.switches.iter().map(|s| (s.level, s.to)).collect_vec(),
            vec![(0, Stage::BottomUp), (2, Stage::TopDownAgain)]
        );
        assert_eq!(stats.bottom_up_levels, 2);
        assert_eq!(stats.top_down_levels, n - 101);
        assert_eq!(bfs.distances(), reference_distances(&graph, 0));
    }

    #[test]
    fn stats_buffers_are_reused() {
        let mut graph = AdjArrayIn::new(101);
        graph.connect_star(0, 1..=100);
        graph.connect_path(1..=50);

        let mut bfs = graph.hybrid_bfs();
        bfs.run_from(1).unwrap();
        assert_eq!(bfs.last_run().frontier_sizes.len(), 50);
        let sizes_ptr = bfs.last_run().frontier_sizes.as_ptr();

        bfs.run_from(0).unwrap();
        let stats = bfs.last_run();
        assert_eq!(stats.source, 0);
        assert_eq!(stats.frontier_sizes, vec![1, 100]);
        assert_eq!(stats.frontier_sizes.as_ptr(), sizes_ptr);
        assert_eq!(stats.visited, 101);
        assert_eq!(stats.first_bottom_up_level(), Some(0));
        assert_eq!(stats.switches.len(), 1);

        bfs.run(1, true, false, None, Some(3)).unwrap();
        let stats = bfs.last_run();
        assert_eq!(stats.source, 1);
        assert_eq!(stats.frontier_sizes, vec![1, 1, 1, 1]);
        assert!(stats.hit_distance_limit);
        assert!(stats.switches.is_empty());
        assert_eq!(stats.bottom_up_levels, 0);
    }

    #[test]
    fn invalid_sources() {
        let mut graph = AdjArrayIn::from_edges(6, [(0, 1), (1, 2), (3, 0)]);
        graph.remove_vertex(5);

        let mut bfs = graph.hybrid_bfs();
        assert_eq!(bfs.run_from(0), Ok(2));
        let before = bfs.distances().to_vec();

        assert_eq!(bfs.run_from(6), Err(BfsError::InvalidSource(6)));
        assert_eq!(bfs.run_from(5), Err(BfsError::InvalidSource(5)));
        assert_eq!(bfs.run_from(2), Err(BfsError::SourceWithoutEdges(2)));
        assert_eq!(bfs.run_from(4), Err(BfsError::SourceWithoutEdges(4)));
        assert_eq!(bfs.run(3, true, false, None, None), Ok(3));
        assert_eq!(
            bfs.run(3, false, true, None, None),
            Err(BfsError::SourceWithoutEdges(3))
        );
        assert_eq!(bfs.run(0, false, false, None, None), Err(BfsError::NoDirection));

        bfs.run_from(0).unwrap();
        assert_eq!(bfs.distances(), before.as_slice());
        assert_eq!(bfs.distance_of(1000), UNREACHED);
    }

    #[test]
    fn failed_runs_keep_previous_results() {
        let graph = path();
        let mut bfs = graph.hybrid_bfs();
        bfs.run_from(1).unwrap();
        let before = bfs.distances().to_vec();

        assert!(bfs.run_from(4).is_err());
        assert_eq!(bfs.distances(), before.as_slice());
    }

    #[test]
    fn degenerate_runs() {
        // Only sinks behind the source
        let mut graph = AdjArrayIn::new(4);
        graph.connect_star(0, [1, 2]);

        let mut bfs = graph.hybrid_bfs();
        assert_eq!(bfs.run(0, true, false, Some(3), None), Ok(1));
        assert!(!bfs.last_run().target_found);
        assert_eq!(bfs.distances(), &[0, 1, 1, UNREACHED]);
    }

    #[test]
    fn cross_validate_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        for n in [10, 50, 200, 1000] {
            for avg_deg in [1.0, 2.0, 5.0, 20.0] {
                let graph = random_graph(rng, n, avg_deg);
                let sources = graph.vertices_with_neighbors().take(5).collect_vec();

                for config in configs() {
                    let mut bfs = graph.hybrid_bfs_with(config);
                    for &source in &sources {
                        let expected = reference_distances(&graph, source);
                        let ecc = bfs.run_from(source).unwrap();

                        assert_eq!(bfs.distances(), expected.as_slice());
                        assert_eq!(ecc, *expected.iter().max().unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn cross_validate_directions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [30, 300] {
            let graph = random_graph(rng, n, 3.0);
            let rev = reversed(&graph);
            let sym = symmetric(&graph);

            for config in configs() {
                let mut bfs = graph.hybrid_bfs_with(config);

                for source in rev.vertices_with_neighbors().take(5) {
                    bfs.run(source, false, true, None, None).unwrap();
                    assert_eq!(bfs.distances(), reference_distances(&rev, source));
                }

                for source in sym.vertices_with_neighbors().take(5) {
                    bfs.run(source, true, true, None, None).unwrap();
                    assert_eq!(bfs.distances(), reference_distances(&sym, source));
                }
            }
        }
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        let graph = random_graph(rng, 500, 4.0);
        let sources = graph.vertices_with_neighbors().take(10).collect_vec();

        let mut bfs = graph.hybrid_bfs();
        let first = sources
            .iter()
            .map(|&s| (bfs.run_from(s).unwrap(), bfs.distances().to_vec()))
            .collect_vec();

        for (&s, (ecc, distances)) in sources.iter().zip(&first).rev() {
            assert_eq!(bfs.run_from(s).unwrap(), *ecc);
            assert_eq!(bfs.distances(), distances.as_slice());
        }
    }

    #[test]
    fn frontiers_hold_exactly_one_level() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for config in configs() {
            let graph = random_graph(rng, 400, 3.0);
            let mut bfs = graph.hybrid_bfs_with(config);

            for source in graph.vertices_with_neighbors().take(5) {
                let ecc = bfs.run_from(source).unwrap();
                let stats = bfs.last_run();

                assert_eq!(stats.frontier_sizes.len() as Distance, ecc + 1);
                for (level, &size) in stats.frontier_sizes.iter().enumerate() {
                    let at_level = bfs
                        .distances()
                        .iter()
                        .filter(|&&d| d == level as Distance)
                        .count();
                    assert_eq!(size, at_level);
                }

                assert_eq!(stats.visited as usize, bfs.reached_nodes().count());
                assert_eq!(
                    stats.top_down_levels + stats.bottom_up_levels,
                    stats.frontier_sizes.len() as u32
                );
            }
        }
    }

    #[test]
    fn early_exit_at_target() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        let graph = random_graph(rng, 300, 2.5);

        for config in configs() {
            let mut bfs = graph.hybrid_bfs_with(config);

            for source in graph.vertices_with_neighbors().take(5) {
                let expected = reference_distances(&graph, source);

                for (target, &d) in expected.iter().enumerate() {
                    if d <= 0 {
                        continue;
                    }

                    let level = bfs
                        .run(source, true, false, Some(target as Node), None)
                        .unwrap();

                    assert!(bfs.last_run().target_found);
                    assert_eq!(level, d - 1);
                    assert_eq!(bfs.distance_of(target as Node), d);
                    assert!(bfs.distances().iter().all(|&x| x <= d));
                }
            }
        }
    }

    #[test]
    fn distance_bound() {
        let rng = &mut Pcg64Mcg::seed_from_u64(51);
        let graph = random_graph(rng, 300, 2.0);

        for config in configs() {
            let mut bfs = graph.hybrid_bfs_with(config);

            for source in graph.vertices_with_neighbors().take(5) {
                let expected = reference_distances(&graph, source);

                for m in 0..5 {
                    let level = bfs.run(source, true, false, None, Some(m)).unwrap();
                    assert!(level <= m);

                    for (&found, &exp) in bfs.distances().iter().zip(&expected) {
                        if exp <= m {
                            assert_eq!(found, exp);
                        } else {
                            assert_eq!(found, UNREACHED);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn sparse_id_space() {
        let rng = &mut Pcg64Mcg::seed_from_u64(61);
        let mut graph = random_graph(rng, 300, 4.0);
        graph.remove_vertices((0..300).step_by(7));

        for config in configs() {
            let mut bfs = graph.hybrid_bfs_with(config);
            assert_eq!(bfs.distances().len(), 300);

            for source in graph.vertices_with_neighbors().take(5) {
                bfs.run_from(source).unwrap();
                assert_eq!(bfs.distances(), reference_distances(&graph, source));
                assert!((0..300).step_by(7).all(|u| bfs.distance_of(u) == UNREACHED));
            }
        }
    }

    #[test]
    fn engines_share_a_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(71);
        let graph = random_graph(rng, 1000, 5.0);
        let sources = graph.vertices_with_neighbors().take(8).collect_vec();

        let results = std::thread::scope(|scope| {
            let handles = sources
                .chunks(2)
                .map(|chunk| {
                    let graph = &graph;
                    scope.spawn(move || {
                        let mut bfs = graph.hybrid_bfs();
                        chunk
                            .iter()
                            .map(|&s| {
                                bfs.run_from(s).unwrap();
                                bfs.distances().to_vec()
                            })
                            .collect_vec()
                    })
                })
                .collect_vec();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect_vec()
        });

        for (source, distances) in sources.into_iter().zip(results) {
            assert_eq!(distances, reference_distances(&graph, source));
        }
    }

    proptest! {
        #[test]
        fn matches_reference_bfs(
            n in 1u32..40,
            raw_edges in prop::collection::vec((0u32..40, 0u32..40), 0..160),
            bottom_up_ratio in prop_oneof![Just(0.0), Just(10.0), Just(f64::INFINITY)],
        ) {
            let mut graph = AdjArrayIn::new(n);
            for (u, v) in raw_edges {
                graph.try_add_edge(u % n, v % n);
            }

            let config = HybridBfsConfig::default().bottom_up_ratio(bottom_up_ratio);
            let mut bfs = graph.hybrid_bfs_with(config);

            for source in graph.vertices() {
                match bfs.run_from(source) {
                    Ok(ecc) => {
                        let expected = reference_distances(&graph, source);
                        prop_assert_eq!(bfs.distances(), expected.as_slice());
                        prop_assert_eq!(ecc, *expected.iter().max().unwrap());
                    }
                    Err(err) => {
                        prop_assert_eq!(graph.out_degree_of(source), 0);
                        prop_assert_eq!(err, BfsError::SourceWithoutEdges(source));
                    }
                }
            }
        }
    }
}
