use std::fmt::{Display, Formatter};

use crate::network::{Cost, Risk};

/// The answer for one network.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// No risk ceiling connects the terminals.
    Disconnected,
    /// The terminals connect once links up to `risk` are admitted, and the cheapest such route costs `cost`.
    Stable {
        /// The minimum bottleneck risk.
        risk: Risk,
        /// The cheapest route cost using only links of risk at most `risk`.
        cost: Cost,
    },
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "-1"),
            Self::Stable { risk, cost } => write!(f, "{risk} {cost}"),
        }
    }
}
