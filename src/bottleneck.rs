use itertools::Itertools;

use crate::disjoint_set::DisjointSet;
use crate::network::{Link, Network, Risk};

/// The lowest risk ceiling under which the terminals of a network are connected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bottleneck {
    /// The ceiling itself, i.e. the risk of [`Self::link`].
    pub risk: Risk,
    /// The link whose admission first joined the terminals.
    /// Among links of equal risk, which one this is depends on sort order and carries no meaning.
    pub link: Link,
}

/// Find the minimum risk ceiling under which [`Network::start`] and [`Network::end`] are connected.
///
/// Links are admitted into a fresh [`DisjointSet`] in ascending order of risk.
/// Connectivity only ever grows as links are admitted, so the risk of the link being admitted when the terminals first share a component
/// is the smallest possible maximum risk over every connecting path.
///
/// Returns [`None`] if the terminals remain apart after every link is admitted.
/// Connectivity is tested only after each admission, so a network with no links never yields a ceiling, even when N = 1.
pub fn select(network: &Network) -> Option<Bottleneck> {
    let (start, end) = (network.start(), network.end());
    let mut components = DisjointSet::new(network.node_count());

    for link in network.links().iter().sorted_unstable_by_key(|link| link.risk) {
        components.merge(link.ends.0, link.ends.1);

        if components.connected(start, end) {
            log::debug!(
                "terminals joined at risk {} by {:?}, component of {} nodes",
                link.risk,
                link.ends,
                components.component_size(start)
            );
            return Some(Bottleneck { risk: link.risk, link: *link });
        }
    }

    log::debug!("terminals {start} and {end} never connect across {} links", network.links().len());
    None
}
