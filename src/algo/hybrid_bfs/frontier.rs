use crate::node::Node;

/// Double buffer holding the nodes of the current level and collecting those of the next one.
///
/// After a level is expanded the two buffers swap roles; the buffer that becomes `next` is
/// cleared but keeps its allocation, so a search allocates at most when a level outgrows every
/// previous one.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    current: Vec<Node>,
    next: Vec<Node>,
}

impl Frontier {
    /// Creates two empty buffers with `capacity` reserved each
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
        }
    }

    /// Empties both buffers and makes `source` the only node of the current level
    pub fn reset(&mut self, source: Node) {
        self.current.clear();
        self.next.clear();
        self.current.push(source);
    }

    /// Nodes of the current level
    pub fn current(&self) -> &[Node] {
        &self.current
    }

    /// Returns the number of nodes of the current level
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns *true* if the current level has no nodes
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Borrows the current level immutably and the next level mutably at the same time
    pub fn split(&mut self) -> (&[Node], &mut Vec<Node>) {
        (&self.current, &mut self.next)
    }

    /// Makes the next level the current one and clears the buffer of the old level for reuse
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
    }

    /// Returns the smaller of both buffer capacities
    pub fn capacity(&self) -> usize {
        self.current.capacity().min(self.next.capacity())
    }
}
