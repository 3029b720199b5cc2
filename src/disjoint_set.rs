//! Union-find over node identifiers, used by the bottleneck selector to track
//! which nodes are joined by the links admitted so far.

use crate::network::NodeId;

/// A disjoint-set forest over nodes `1..=N` with size-based merging and path compression.
///
/// Slot 0 is never used so that node identifiers index the arrays directly.
/// Parent pointers always form a forest: every chain of parents ends at a root that is its own parent.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// A fresh forest in which every node is its own singleton component.
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            parent: (0..=node_count).collect(),
            size: vec![1; node_count + 1],
        }
    }

    /// Resolve the representative of `node`, pointing every node on the way directly at it.
    ///
    /// Iterative, so arbitrarily long parent chains cannot exhaust the stack.
    pub(crate) fn find(&mut self, node: NodeId) -> usize {
        let mut root = node.get();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node.get();
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// Returns `true` if they were previously separate.
    pub(crate) fn merge(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        // hang the smaller tree under the larger
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        true
    }

    pub(crate) fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of nodes in the component containing `node`.
    pub(crate) fn component_size(&mut self, node: NodeId) -> usize {
        let root = self.find(node);
        self.size[root]
    }
}
