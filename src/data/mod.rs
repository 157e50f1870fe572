// mod.rs - Data structures module

pub mod fasta;

// Re-export main types for convenience
pub use fasta::{apply_id_filters, FastaError, Sequence};
