/*!
# Graph Operations

Traits describing what a graph has to offer to the algorithms of this crate.
All getters take `&self` only: algorithms such as [`HybridBfs`](crate::algo::HybridBfs) borrow a
graph immutably and may thus share it with any number of other readers.

The node-id space of a graph is `0..id_bound()`. Not every id in that range has to be a valid
vertex (see [`GraphVertexEditing`]), which is why [`GraphNodeOrder::vertices`] and
[`GraphNodeOrder::vertices_range`] differ.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::prelude::*;

/// Distinguishes directed from undirected representations at the type level
pub trait GraphType {
    /// *true* if `Edge(u, v)` and `Edge(v, u)` are distinct edges
    const DIRECTED: bool;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of (valid) nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the smallest id that is larger than every id ever handed out, i.e. `MaxId + 1`.
    /// Arrays indexed by node ids have to be of this size.
    fn id_bound(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Returns the largest node id of the graph or `None` if the id space is empty
    fn max_vertex_id(&self) -> Option<Node> {
        self.id_bound().checked_sub(1)
    }

    /// Returns *true* if `u` is a valid vertex of the graph.
    /// Never panics; ids outside of the id space are simply invalid.
    fn is_valid_vertex(&self, u: Node) -> bool {
        u < self.id_bound()
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over all valid vertices in increasing id order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns the range of all ids possibly including invalid ones.
    /// In contrast to `self.vertices()`, the returned range does not borrow `self`.
    ///
    /// # Warning
    /// It is the responsibility of the caller to identify and treat invalid ids accordingly.
    fn vertices_range(&self) -> Range<Node> {
        0..self.id_bound()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= id_bound` **
    ///
    /// Note that for directed graphs, this is equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the closed neighborhood of a given vertex.
    /// ** Panics if `u >= id_bound` **
    fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= id_bound` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all valid vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= id_bound` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect()
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Adjacency getters of directed graphs that also know their incoming edges
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);
    propagate!(max_out_degree => max_degree() -> NumNodes);

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= id_bound` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= id_bound` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= id_bound` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over the in-degrees of all valid vertices
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.in_degree_of(u))
    }

    /// Returns the maximum in-degree in the graph
    fn max_in_degree(&self) -> NumNodes {
        self.in_degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over incoming edges `(v, u)` of a given vertex `u`.
    /// ** Panics if `u >= id_bound` **
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.in_neighbors_of(u).map(move |v| Edge(v, u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= id_bound || v >= id_bound` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= id_bound` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// Representations may skip the presence check and create a multi-edge instead.
    /// ** Panics if `u` or `v` is not a valid vertex **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u` or `v` is not a valid vertex **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// ** Panics if the edge is not present **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if `u >= id_bound || v >= id_bound` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// Provides functions to delete vertices without compacting the id space
pub trait GraphVertexEditing: GraphEdgeEditing {
    /// Removes all edges incident to `u` and marks `u` as invalid.
    /// Returns *false* if `u` was not a valid vertex to begin with.
    fn try_remove_vertex(&mut self, u: Node) -> bool;

    /// Removes `u` from the graph.
    /// ** Panics if `u` is not a valid vertex **
    fn remove_vertex(&mut self, u: Node) {
        assert!(self.try_remove_vertex(u));
    }

    /// Removes all vertices of the collection
    /// ** Panics if any of them is not a valid vertex **
    fn remove_vertices(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.remove_vertex(u);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
