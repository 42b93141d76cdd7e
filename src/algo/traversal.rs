/*!
Plain (single-strategy) breadth-first traversal.

This module provides:
- A lazy BFS iterator over the out-neighborhoods of a graph, optionally yielding the
  predecessor of every visited node.
- The `TraversalTree` extension that turns a predecessor-yielding traversal into parent,
  depth or distance arrays.
- A `Traversal` trait that exposes these traversals directly as methods on graphs.

Distances obtained from [`TraversalTree::distances`] serve as the ground truth for the
direction-optimizing [`HybridBfs`](super::HybridBfs).
*/

use std::collections::VecDeque;

use super::*;

/// Gives access to the graph an algorithm/iterator is working on
pub trait WithGraphRef<G> {
    /// Returns the graph being traversed.
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without a predecessor.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the visited node.
    fn item(&self) -> Node;

    /// Returns the predecessor (if any).
    fn predecessor(&self) -> Option<Node>;

    /// Returns `(predecessor, item)`.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        (self.0 != self.1).then_some(self.0)
    }
}

/// Breadth-first traversal iterator over the out-neighborhoods of a graph.
///
/// Parameterized by the type of items yielded (either `Node` or `PredecessorOfNode`).
pub struct BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<I>,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode>;

impl<G, I> WithGraphRef<G> for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, I> Iterator for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.queue.push_back(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G, I> BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= id_bound` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.id_bound());
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([I::new_without_predecessor(start)]),
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Returns *true* if `u` has been discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    /// Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `id_bound` where each node is initially its own
    /// parent and fills in the traversal tree structure using `parent_array_into`.
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (root depth = 0). Unvisited entries remain unchanged.
    fn depths_into(&mut self, depths: &mut [Distance]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Constructs a distance array of size `id_bound` in which every node that is not visited
    /// by the traversal keeps [`UNREACHED`].
    ///
    /// # Examples
    /// ```
    /// use dobfs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayIn::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// let distances = g.bfs_with_predecessor(0).distances();
    /// assert_eq!(distances, vec![0, 1, 2, UNREACHED]);
    /// ```
    fn distances(&mut self) -> Vec<Distance> {
        let mut depths = vec![UNREACHED; self.graph_ref().id_bound() as usize];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G> TraversalTree<'a, G> for BFSWithPredecessor<'a, G> where G: AdjacencyList {}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use dobfs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayIn::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
