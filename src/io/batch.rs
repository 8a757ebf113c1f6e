//! CSV batch sizing: read many requests, size each, write the outcomes.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use super::export::{Outcome, write_csv};
use crate::sizing::calculator::calculate;
use crate::sizing::types::SizingRequest;

/// Failures that abort a batch run.
///
/// Per-row calculation errors do not abort; they are reported in the
/// outcome's `status` column instead.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot open \"{path}\": {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed row {row}: {source}")]
    Parse {
        /// 1-based data row number (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

/// Reads requests from CSV with a header naming the request fields.
///
/// # Errors
///
/// Returns [`BatchError::Parse`] for the first row that does not
/// deserialize into a [`SizingRequest`].
pub fn read_requests(reader: impl Read) -> Result<Vec<SizingRequest>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize()
        .enumerate()
        .map(|(i, row)| row.map_err(|source| BatchError::Parse { row: i + 1, source }))
        .collect()
}

/// Sizes every request, keeping rejected ones alongside accepted ones.
pub fn size_all(requests: &[SizingRequest]) -> Vec<Outcome> {
    requests
        .iter()
        .map(|req| Outcome {
            request: *req,
            result: calculate(req),
        })
        .collect()
}

/// Runs a batch from `reader` to `writer` and returns the outcomes.
///
/// # Errors
///
/// Returns a [`BatchError`] on malformed input or a failed write.
pub fn run(reader: impl Read, writer: impl Write) -> Result<Vec<Outcome>, BatchError> {
    let requests = read_requests(reader)?;
    let outcomes = size_all(&requests);
    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    if rejected > 0 {
        warn!(rejected, total = outcomes.len(), "batch contains rejected requests");
    }
    write_csv(&outcomes, writer)?;
    info!(rows = outcomes.len(), "batch sized");
    Ok(outcomes)
}

/// Runs a batch from the CSV file at `input` into `writer`.
///
/// # Errors
///
/// Returns [`BatchError::Open`] if `input` cannot be opened, otherwise as
/// [`run`].
pub fn run_file(input: &Path, writer: impl Write) -> Result<Vec<Outcome>, BatchError> {
    let file = File::open(input).map_err(|source| BatchError::Open {
        path: input.display().to_string(),
        source,
    })?;
    run(io::BufReader::new(file), writer)
}
