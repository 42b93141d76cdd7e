/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraphIn`] with two
[`Neighborhood`] types, which control how out- and in-adjacency is stored.

## Provided Representations

- [`AdjArrayIn`]: adjacency arrays for outgoing and incoming neighbors.
- [`SparseAdjArrayIn`]: sparse adjacency arrays using inline small vectors.

## Design
Both directions are stored so that in-neighbors and in-degrees are available in `O(1)`, as
required by the bottom-up steps of [`HybridBfs`](crate::algo::HybridBfs).

Vertices can be removed without compacting the id space. A removed id stays inside
`0..id_bound()` but is no longer reported by `vertices()` and is rejected by `is_valid_vertex`.
*/

use super::*;

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// - Outgoing adjacency is stored in `out_nbs`.
/// - Incoming adjacency is stored in `in_nbs`.
/// - Removed vertices are marked in `removed`.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Clone)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    removed: NodeBitSet,
    num_removed: NumNodes,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArrayIn = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays for both outgoing and incoming neighborhoods.
pub type SparseAdjArrayIn = DirectedGraphIn<SparseNeighborhood, SparseNeighborhood>;

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphType for DirectedGraphIn<OutNbs, InNbs> {
    const DIRECTED: bool = true;
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphNodeOrder for DirectedGraphIn<OutNbs, InNbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.id_bound() - self.num_removed
    }

    fn id_bound(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }

    fn is_valid_vertex(&self, u: Node) -> bool {
        u < self.id_bound() && !self.removed.get_bit(u)
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
            .filter(move |&u| !self.removed.get_bit(u))
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphEdgeOrder for DirectedGraphIn<OutNbs, InNbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> AdjacencyList for DirectedGraphIn<OutNbs, InNbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> DirectedAdjacencyList
    for DirectedGraphIn<OutNbs, InNbs>
{
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> AdjacencyTest for DirectedGraphIn<OutNbs, InNbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphNew for DirectedGraphIn<OutNbs, InNbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![OutNbs::new(n); n as usize],
            in_nbs: vec![InNbs::new(n); n as usize],
            removed: NodeBitSet::new(n),
            num_removed: 0,
            num_edges: 0,
        }
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphEdgeEditing
    for DirectedGraphIn<OutNbs, InNbs>
{
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(
            self.is_valid_vertex(u) && self.is_valid_vertex(v),
            "Edge ({u},{v}) has an endpoint that is not a valid vertex"
        );
        self.out_nbs[u as usize].add_neighbor(v);
        self.in_nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.add_edge(u, v);
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphVertexEditing
    for DirectedGraphIn<OutNbs, InNbs>
{
    fn try_remove_vertex(&mut self, u: Node) -> bool {
        if !self.is_valid_vertex(u) {
            return false;
        }

        // Copy the neighborhoods first as we mutate the opposite side while iterating
        let out_nbs: Vec<Node> = self.out_nbs[u as usize].neighbors().collect();
        let in_nbs: Vec<Node> = self.in_nbs[u as usize].neighbors().collect();

        for v in out_nbs {
            self.in_nbs[v as usize].try_remove_neighbor(u);
            self.num_edges -= 1;
        }

        for v in in_nbs {
            // Self-loops were already accounted for above
            if v != u {
                self.out_nbs[v as usize].try_remove_neighbor(u);
                self.num_edges -= 1;
            }
        }

        self.out_nbs[u as usize].clear();
        self.in_nbs[u as usize].clear();
        self.removed.set_bit(u);
        self.num_removed += 1;

        true
    }
}
