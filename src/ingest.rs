use std::str::{FromStr, SplitAsciiWhitespace};

use strum::Display;
use thiserror::Error;

use crate::builder::{BuilderInvalidReason, NetworkBuilder};
use crate::network::{Network, NodeId};

/// The value a token was expected to hold, for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    CaseCount,
    NodeCount,
    LinkCount,
    From,
    To,
    Cost,
    Risk,
}

/// Reasons a network could not be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum IngestError {
    #[error("input ended while reading {field}")]
    UnexpectedEnd { field: Field },
    #[error("expected a non-negative integer for {field}, found `{token}`")]
    NotAnInteger { field: Field, token: String },
    #[error("a network must have at least one node")]
    NoNodes,
    #[error("network is invalid: {0:?}")]
    InvalidNetwork(Vec<BuilderInvalidReason>),
}

/// Reads whitespace-separated integers from the batch text format.
///
/// Line breaks carry no meaning; only token order matters.
pub struct Ingest<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> From<&'a str> for Ingest<'a> {
    fn from(input: &'a str) -> Self {
        Self { tokens: input.split_ascii_whitespace() }
    }
}

impl Ingest<'_> {
    fn next_value<T: FromStr>(&mut self, field: Field) -> Result<T, IngestError> {
        let token = self.tokens.next().ok_or(IngestError::UnexpectedEnd { field })?;
        token.parse().map_err(|_| IngestError::NotAnInteger { field, token: token.to_owned() })
    }

    /// Read the leading number of test cases, T.
    pub fn case_count(&mut self) -> Result<usize, IngestError> {
        self.next_value(Field::CaseCount)
    }

    /// Read one network: the line `N M` followed by `M` lines of `u v cost risk`.
    pub fn network(&mut self) -> Result<Network, IngestError> {
        let node_count = NodeId::new(self.next_value(Field::NodeCount)?).ok_or(IngestError::NoNodes)?;
        let link_count: usize = self.next_value(Field::LinkCount)?;

        let mut builder = NetworkBuilder::with_nodes(node_count);
        // declared count is unchecked; cap the up-front reservation
        builder.reserve(link_count.min(1 << 16));
        for _ in 0..link_count {
            let from = self.next_value(Field::From)?;
            let to = self.next_value(Field::To)?;
            let cost = self.next_value(Field::Cost)?;
            let risk = self.next_value(Field::Risk)?;
            builder.add_link(from, to, cost, risk);
        }

        builder.build().map_err(|reasons| IngestError::InvalidNetwork(reasons.clone()))
    }
}
