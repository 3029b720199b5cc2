#![warn(missing_docs)]

//! # `stable_power`
//!
//! Routing between the two terminals of a power network whose links each carry a traversal cost and a risk level.
//! Build a [`Network`] with a [`NetworkBuilder`] (or read one with [`Ingest`](ingest::Ingest)), then call [`solve()`](Network::solve).
//!
//! The answer is lexicographic: first the lowest risk ceiling R such that node 1 and node N are connected using only links of risk at most R,
//! then the cheapest route between them using only those links.
//! A cheaper route that needs a riskier link is never preferred.
//!
//! # Internals
//! Solving happens in two phases.
//!
//! 1. The [bottleneck selector](bottleneck::select) admits links in ascending order of risk into a union-find forest.
//! Connectivity only grows as links are admitted, so the risk of the link that first joins the terminals is the minimum bottleneck R.
//! 2. The [`ConstrainedRouter`](router::ConstrainedRouter) keeps the links with risk at most R and runs Dijkstra's algorithm from node 1,
//! stopping once node N is settled.
//!
//! Every structure is built fresh per network and dropped afterwards; nothing is shared between networks.
//!
//! The [`batch`] module drives the text format: a case count T, then T networks, each given as `N M` followed by `M` lines of `u v cost risk`.
//! Each network is answered with `-1` if the terminals never connect, or `R cost` otherwise.

pub use builder::NetworkBuilder;
pub use network::{Cost, Link, Network, NodeId, Risk};
pub use verdict::Verdict;

pub mod batch;
pub mod bottleneck;
pub mod builder;
pub(crate) mod disjoint_set;
pub mod ingest;
pub(crate) mod network;
pub mod router;
pub(crate) mod verdict;
