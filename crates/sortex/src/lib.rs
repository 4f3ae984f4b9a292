pub mod error;
pub mod faults;
pub mod input;
pub mod sorting;

// Re-export main types for convenience
pub use error::DrillError;
pub use faults::{FaultKind, FaultProbe};
pub use input::read_choice;
pub use sorting::SortMode;
