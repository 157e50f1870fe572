// mod.rs - Core logic module

pub mod alignment;
pub mod scorer;
pub mod significance;

// Re-export main types for convenience
pub use alignment::{AlignmentConfig, TraceMode};
pub use scorer::{percent_difference, AlignmentScorer, AlignmentTrace, ScanError, ScanResult};
pub use significance::{FitError, SignificanceEstimator, SignificanceModel};
