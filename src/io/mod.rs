/// Batch sizing over CSV input.
pub mod batch;
/// CSV export of sizing outcomes.
pub mod export;
