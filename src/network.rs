use std::num::NonZero;

use unordered_pair::UnorderedPair;

use crate::bottleneck;
use crate::router::ConstrainedRouter;
use crate::verdict::Verdict;

/// Identifier of a node; networks number their nodes from 1 through N.
pub type NodeId = NonZero<usize>;
/// Traversal cost of a single link.
pub type Cost = u64;
/// Risk level of a single link.
pub type Risk = u64;

/// An undirected link between two nodes, carrying a traversal cost and a risk level.
///
/// Links are immutable once built; the order of `ends` carries no meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Link {
    /// The two endpoints of this link.
    pub ends: UnorderedPair<NodeId>,
    /// Cost of traversing this link in either direction.
    pub cost: Cost,
    /// Risk level of this link.
    pub risk: Risk,
}

/// A network of `node_count` nodes joined by an ordered list of [`Link`]s.
///
/// The start terminal is always node 1 and the end terminal is always node N.
/// [`Network`]s should be built using a [`NetworkBuilder`](crate::builder::NetworkBuilder),
/// which guarantees every link endpoint lies in `[1, N]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network {
    pub(crate) node_count: NodeId,
    pub(crate) links: Vec<Link>,
}

impl Network {
    /// Number of nodes, N.
    pub fn node_count(&self) -> usize {
        self.node_count.get()
    }

    /// Links in the order they were added.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The start terminal, node 1.
    pub fn start(&self) -> NodeId {
        NodeId::MIN
    }

    /// The end terminal, node N.
    pub fn end(&self) -> NodeId {
        self.node_count
    }

    /// Solves this network in two phases.
    ///
    /// First the [bottleneck selector](crate::bottleneck::select) finds the lowest risk ceiling under which the terminals connect,
    /// then a [`ConstrainedRouter`] finds the cheapest route using only links at or below that ceiling.
    ///
    /// Returns [`Verdict::Disconnected`] if no ceiling connects the terminals.
    pub fn solve(&self) -> Verdict {
        let Some(bottleneck) = bottleneck::select(self) else {
            return Verdict::Disconnected;
        };

        match ConstrainedRouter::new(self, bottleneck.risk).route() {
            Some(route) => Verdict::Stable { risk: bottleneck.risk, cost: route.cost },
            // the selector only reports a ceiling once the terminals share a component,
            // and every link it merged is kept by the router
            None => Verdict::Disconnected,
        }
    }
}
