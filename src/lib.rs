/*!
`dobfs` computes **d**irection-**o**ptimizing **b**readth-**f**irst **s**earches on graphs that are
- unlabelled: Nodes are numbered `0` to `n - 1`
- unweighted: Distances are hop counts
- directed: Undirected searches follow both edge orientations

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as a tuple-struct
`Edge(Node, Node)`. Distances are `i32` where [`UNREACHED`](node::UNREACHED) (`-1`) marks a node
the search did not reach.

Searches run on [`AdjArrayIn`](repr::AdjArrayIn) or [`SparseAdjArrayIn`](repr::SparseAdjArrayIn),
which store in-neighbors next to out-neighbors: the bottom-up step of a hybrid search has to walk
edges in reverse. Vertices can be removed from these graphs; their ids stay reserved and are
skipped by every search.

# Hybrid search

A top-down BFS pushes from every frontier node to its unvisited neighbors. Once the frontier
covers a large share of the remaining edges it is cheaper to let every unvisited node pull from
any parent in the frontier instead (bottom-up). [`HybridBfs`](algo::HybridBfs) decides between
both before each level and switches back to top-down when the frontier becomes small again.

```
use dobfs::{prelude::*, algo::*, gens::*};

let mut graph = AdjArrayIn::new(101);
graph.connect_star(0, 1..=100);

let mut bfs = graph.hybrid_bfs();
assert_eq!(bfs.run(0, true, false, None, None), Ok(1));
assert!(bfs.last_run().used_bottom_up());
assert!((1..=100).all(|u| bfs.distance_of(u) == 1));
```

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and all representations,
- [`algo`] includes the hybrid search and the reference traversal (`graph.bfs(start_node)`),
- [`gens`] includes random graph generators and deterministic substructures such as paths and stars,
- [`error`] includes the errors a search reports for invalid requests.

In most use-cases, `use dobfs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

/// `dobfs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::BfsError, node::*, ops::*, repr::*};
}
