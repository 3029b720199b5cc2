use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::network::{Cost, Network, NodeId, Risk};

/// The cheapest route found by a [`ConstrainedRouter`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    /// Total traversal cost along [`Self::path`].
    pub cost: Cost,
    /// Nodes visited from the start terminal to the end terminal, both inclusive.
    pub path: Vec<NodeId>,
}

/// Shortest-path search restricted to the links of a network whose risk does not exceed a ceiling.
///
/// The induced subgraph is built once in [`Self::new`]; between any pair of nodes it keeps only the cheapest admitted link,
/// since a costlier parallel link can never be part of a cheapest route.
pub struct ConstrainedRouter {
    graph: UnGraphMap<NodeId, Cost>,
    node_count: usize,
    start: NodeId,
    end: NodeId,
}

impl ConstrainedRouter {
    /// Build the subgraph of `network` induced by links with risk at most `ceiling`.
    pub fn new(network: &Network, ceiling: Risk) -> Self {
        let mut graph = UnGraphMap::with_capacity(network.node_count(), network.links().len());
        graph.add_node(network.start());
        graph.add_node(network.end());

        for link in network.links().iter().filter(|link| link.risk <= ceiling) {
            let UnorderedPair(a, b) = link.ends;
            match graph.edge_weight_mut(a, b) {
                Some(cost) => *cost = link.cost.min(*cost),
                None => {
                    graph.add_edge(a, b, link.cost);
                }
            }
        }

        Self {
            graph,
            node_count: network.node_count(),
            start: network.start(),
            end: network.end(),
        }
    }

    /// Number of distinct node pairs joined in the induced subgraph.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Run Dijkstra's algorithm from the start terminal, stopping as soon as the end terminal is settled.
    ///
    /// The frontier may hold several entries for one node; an entry whose cost is worse than the best recorded for its node is stale and skipped.
    /// Returns [`None`] if the end terminal is unreachable within the subgraph.
    pub fn route(&self) -> Option<Route> {
        // indexed by node id; slot 0 unused, None is unreached
        let mut best: Vec<Option<Cost>> = vec![None; self.node_count + 1];
        let mut previous: Vec<Option<NodeId>> = vec![None; self.node_count + 1];
        let mut frontier = BinaryHeap::new();

        best[self.start.get()] = Some(0);
        frontier.push(Reverse((0, self.start)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if best[node.get()].is_some_and(|known| cost > known) {
                log::trace!("skipping stale entry for node {node} at cost {cost}");
                continue;
            }

            if node == self.end {
                let path = self.trace_back(&previous);
                log::debug!("settled end terminal at cost {cost} over {} hops", path.len() - 1);
                return Some(Route { cost, path });
            }

            for (_, next, &step) in self.graph.edges(node) {
                let candidate = cost.saturating_add(step);
                if best[next.get()].map_or(true, |known| candidate < known) {
                    best[next.get()] = Some(candidate);
                    previous[next.get()] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        None
    }

    fn trace_back(&self, previous: &[Option<NodeId>]) -> Vec<NodeId> {
        let mut path = vec![self.end];
        let mut current = self.end;
        while current != self.start {
            match previous[current.get()] {
                Some(node) => {
                    path.push(node);
                    current = node;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}
