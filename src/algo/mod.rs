/*!
# Graph Algorithms

Traversals built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use dobfs::algo::*;
```
and gain access to the direction-optimizing [`HybridBfs`] as well as the plain queue-based
[`BFS`] it is validated against.
*/

mod hybrid_bfs;
mod traversal;

use crate::prelude::*;

pub use hybrid_bfs::*;
pub use traversal::*;
