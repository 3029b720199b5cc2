use unordered_pair::UnorderedPair;

use crate::network::{Cost, Link, Network, NodeId, Risk};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A link was added with an endpoint of 0 or greater than the node count given to the builder.
    EndpointOutOfBounds {
        /// The offending endpoint, as given.
        endpoint: usize,
    },
}

/// Incrementally assembles a [`Network`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder becomes invalid, every further mutation does nothing and [`Self::build`] reports why.
#[derive(Clone, Debug)]
pub struct NetworkBuilder {
    node_count: NodeId,
    links: Vec<Link>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::with_nodes(NodeId::MIN)
    }
}

impl NetworkBuilder {
    /// Construct a new builder for a network of `node_count` nodes and no links.
    pub fn with_nodes(node_count: NodeId) -> Self {
        Self {
            node_count,
            links: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Preallocate room for `additional` more links.
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        self.links.reserve(additional);
        self
    }

    /// Add an undirected link between `from` and `to`.
    ///
    /// May cause the builder to enter an [`EndpointOutOfBounds`](BuilderInvalidReason::EndpointOutOfBounds) invalid state if either endpoint is outside `[1, N]`.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_link(&mut self, from: usize, to: usize, cost: Cost, risk: Risk) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let Some(from) = self.checked_node(from) else { return self };
        let Some(to) = self.checked_node(to) else { return self };

        self.links.push(Link { ends: UnorderedPair(from, to), cost, risk });
        self
    }

    fn checked_node(&mut self, endpoint: usize) -> Option<NodeId> {
        match NodeId::new(endpoint) {
            Some(node) if node <= self.node_count => Some(node),
            _ => {
                self.invalid_reasons.push(BuilderInvalidReason::EndpointOutOfBounds { endpoint });
                None
            }
        }
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Network`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Network, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Network {
            node_count: self.node_count,
            links: self.links.clone(),
        })
    }
}
