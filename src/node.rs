/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) index distance arrays
directly with node values.

Distances are signed so that a single array can hold both "not reached yet" (`-1`) and the
actual hop count of reached nodes without the padding overhead of `Option<u32>`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Hop distance from the source of a search; negative values mean *unreached*
pub type Distance = i32;

/// Distance of every node that has not (yet) been reached by a search
pub const UNREACHED: Distance = -1;

/// Converts a stored distance into an `Option`, mapping [`UNREACHED`] to `None`
#[inline]
pub const fn reached(distance: Distance) -> Option<NumNodes> {
    if distance < 0 {
        None
    } else {
        Some(distance as NumNodes)
    }
}
