/*!
The two ways of expanding one BFS level.

- [`TopDown`] pushes: every frontier node walks its edges and claims unvisited neighbors.
  Its cost is proportional to the number of edges incident to the frontier.
- [`BottomUp`] pulls: every unvisited node looks for a parent in the frontier and stops at the
  first one found. Its cost is proportional to the number of edges incident to unvisited nodes,
  but each such node usually stops early once most of the graph is in or behind the frontier.

Both share the distance array of the search and only ever assign `level + 1` to nodes that are
still [`UNREACHED`], so a search may alternate between them freely.
*/

use itertools::Either;

use super::*;

/// Which adjacency relation a search follows.
///
/// The *push* relation is what [`TopDown`] walks from frontier nodes; the *pull* relation is its
/// reverse, walked by [`BottomUp`] from unvisited nodes towards potential parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Follow edges `(u, v)` from `u` to `v`: push along out-edges, pull along in-edges
    Forward,
    /// Follow edges `(u, v)` from `v` to `u`: push along in-edges, pull along out-edges
    Backward,
    /// Ignore orientation: push and pull along both
    Both,
}

impl EdgeDirection {
    /// Derives the direction from the pair of follow flags; `None` if neither is set
    pub fn from_flags(follow_out: bool, follow_in: bool) -> Option<Self> {
        match (follow_out, follow_in) {
            (true, false) => Some(Self::Forward),
            (false, true) => Some(Self::Backward),
            (true, true) => Some(Self::Both),
            (false, false) => None,
        }
    }

    /// Returns the direction whose push relation is this direction's pull relation
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Both => Self::Both,
        }
    }

    /// Returns the nodes reachable from `u` in one step
    pub fn push_neighbors<G>(self, graph: &G, u: Node) -> impl Iterator<Item = Node> + '_
    where
        G: DirectedAdjacencyList,
    {
        match self {
            Self::Forward => Either::Left(Either::Left(graph.out_neighbors_of(u))),
            Self::Backward => Either::Left(Either::Right(graph.in_neighbors_of(u))),
            Self::Both => Either::Right(graph.out_neighbors_of(u).chain(graph.in_neighbors_of(u))),
        }
    }

    /// Returns the nodes that reach `u` in one step
    pub fn pull_neighbors<G>(self, graph: &G, u: Node) -> impl Iterator<Item = Node> + '_
    where
        G: DirectedAdjacencyList,
    {
        self.reversed().push_neighbors(graph, u)
    }

    /// Returns the size of the push relation of `u`
    pub fn push_degree<G>(self, graph: &G, u: Node) -> NumNodes
    where
        G: DirectedAdjacencyList,
    {
        match self {
            Self::Forward => graph.out_degree_of(u),
            Self::Backward => graph.in_degree_of(u),
            Self::Both => graph.total_degree_of(u),
        }
    }

    /// Returns the size of the pull relation of `u`
    pub fn pull_degree<G>(self, graph: &G, u: Node) -> NumNodes
    where
        G: DirectedAdjacencyList,
    {
        self.reversed().push_degree(graph, u)
    }
}

/// Everything a step may read or write while expanding a single level
#[derive(Debug)]
pub struct LevelState<'s> {
    /// Distances of the running search, indexed by node id
    pub distances: &'s mut [Distance],
    /// Nodes at distance `level`
    pub frontier: &'s [Node],
    /// Receives the nodes assigned `level + 1`
    pub next: &'s mut Vec<Node>,
    /// Distance of the frontier nodes
    pub level: Distance,
    /// Stop as soon as this node is assigned a distance
    pub target: Option<Node>,
}

/// Strategy for expanding one BFS level
pub trait ExpansionStep {
    /// Assigns `level + 1` to unvisited nodes adjacent to the frontier and collects them in
    /// `state.next`. Returns *true* if the target was assigned, in which case the expansion
    /// stopped right away and the target is *not* added to `state.next`.
    fn expand<G>(&self, graph: &G, state: LevelState<'_>) -> bool
    where
        G: DirectedAdjacencyList;
}

/// Frontier-push expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopDown {
    pub direction: EdgeDirection,
}

impl TopDown {
    pub fn new(direction: EdgeDirection) -> Self {
        Self { direction }
    }
}

impl ExpansionStep for TopDown {
    fn expand<G>(&self, graph: &G, state: LevelState<'_>) -> bool
    where
        G: DirectedAdjacencyList,
    {
        let LevelState {
            distances,
            frontier,
            next,
            level,
            target,
        } = state;

        for &u in frontier {
            debug_assert_eq!(distances[u as usize], level);

            for v in self.direction.push_neighbors(graph, u) {
                if distances[v as usize] == UNREACHED {
                    distances[v as usize] = level + 1;
                    if Some(v) == target {
                        return true;
                    }
                    next.push(v);
                }
            }
        }

        false
    }
}

/// Unvisited-pull expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomUp {
    pub direction: EdgeDirection,
}

impl BottomUp {
    pub fn new(direction: EdgeDirection) -> Self {
        Self { direction }
    }
}

impl ExpansionStep for BottomUp {
    fn expand<G>(&self, graph: &G, state: LevelState<'_>) -> bool
    where
        G: DirectedAdjacencyList,
    {
        let LevelState {
            distances,
            next,
            level,
            target,
            ..
        } = state;

        for u in graph.vertices() {
            if distances[u as usize] != UNREACHED {
                continue;
            }

            // First parent wins; any parent on the frontier yields the same distance
            let has_parent = self
                .direction
                .pull_neighbors(graph, u)
                .any(|p| distances[p as usize] == level);

            if has_parent {
                distances[u as usize] = level + 1;
                if Some(u) == target {
                    return true;
                }
                next.push(u);
            }
        }

        false
    }
}

/// Number of edges a [`TopDown`] step would examine from `frontier`
pub fn frontier_edges<G>(graph: &G, direction: EdgeDirection, frontier: &[Node]) -> u64
where
    G: DirectedAdjacencyList,
{
    frontier
        .iter()
        .map(|&u| direction.push_degree(graph, u) as u64)
        .sum()
}

/// Number of edges a [`BottomUp`] step could examine at most, i.e. the pull-degrees of all
/// nodes that are still unvisited
pub fn unvisited_edges<G>(graph: &G, direction: EdgeDirection, distances: &[Distance]) -> u64
where
    G: DirectedAdjacencyList,
{
    graph
        .vertices()
        .filter(|&u| distances[u as usize] == UNREACHED)
        .map(|u| direction.pull_degree(graph, u) as u64)
        .sum()
}
