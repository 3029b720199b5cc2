use std::io::Write;

use thiserror::Error;

use crate::ingest::{Ingest, IngestError};

/// Reasons a batch stopped before answering every case.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The case count itself could not be read.
    #[error("could not read the number of cases: {0}")]
    CaseCount(#[source] IngestError),
    /// Case `case` (1-based) was malformed; the cases before it were answered.
    #[error("case {case} is malformed: {source}")]
    Ingest { case: usize, source: IngestError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Answer every case in `input`, writing one line per case to `output` in order.
///
/// The first malformed case stops the batch; lines already written for earlier cases stay written.
/// Returns the number of cases answered.
pub fn run<W: Write>(input: &str, output: &mut W) -> Result<usize, BatchError> {
    let mut ingest = Ingest::from(input);
    let cases = ingest.case_count().map_err(BatchError::CaseCount)?;
    log::debug!("batch declares {cases} cases");

    for case in 1..=cases {
        let network = ingest.network().map_err(|source| BatchError::Ingest { case, source })?;
        writeln!(output, "{}", network.solve())?;
    }

    output.flush()?;
    Ok(cases)
}
