/*!
# Substructure Generators

Utility methods to embed deterministic **substructures** into an existing graph:

- **Paths**
- **Cycles**
- **Stars**

They are handy to build instances with known distances for testing traversal algorithms.

# Example

```rust
use dobfs::{prelude::*, gens::*};

let mut g = AdjArrayIn::new(6);
g.connect_path([0, 1, 2]);
g.connect_star(2, [3, 4, 5]);

assert_eq!(
    g.ordered_edges(false),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(2, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to every given leaf with an edge `(center, leaf)`.
    /// For directed graphs, the leaves are not connected back to the center.
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();
        let Some(first) = iter.next() else {
            return;
        };

        let mut prev = first;
        for u in iter {
            self.add_edge(prev, u);
            prev = u;
        }

        if prev != first {
            self.add_edge(prev, first);
        }
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf);
        }
    }
}
