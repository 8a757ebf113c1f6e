/// Pure sizing calculation.
pub mod calculator;
pub mod error;
/// Request, result, and voltage value types.
pub mod types;

pub use calculator::calculate;
pub use error::SizingError;
pub use types::{SizingRequest, SizingResult, SystemVoltage};
