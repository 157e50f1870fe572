// lib.rs - seqsig library root

//! # seqsig - Closest-match search with alignment significance statistics
//!
//! This library finds the closest match for a query DNA sequence in a
//! candidate set by pairwise alignment, attaches BLAST-style significance
//! (E-values and p-values) to the alignment scores via an extreme-value
//! fit, and builds neighbor-joining trees from multiple-sequence
//! alignments.
//!
//! ## Features
//!
//! - **Score-only scanning**: the bulk scan never materializes alignment
//!   traces; the full alignment is computed on demand for one pair only
//! - **Significance statistics**: Gumbel tail fit with the standard
//!   E-value and p-value formulas from sequence-database searching
//! - **Tree construction**: identity distance matrix, neighbor joining,
//!   Newick output and terminal rendering
//! - **Flexible scoring**: presets plus fully custom match/mismatch/gap
//!   parameters
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use seqsig::prelude::*;
//! use seqsig::core::significance::SignificanceEstimator;
//! use std::path::Path;
//!
//! let target = fasta::read_first(Path::new("mystery.fa"))?;
//! let candidates = fasta::read_records(Path::new("breeds.fa"))?;
//!
//! let scorer = AlignmentScorer::new(AlignmentConfig::default());
//! let scan = scorer.compute_all_scores(&target, &candidates)?;
//! println!("Closest match: {}", candidates[scan.best_index].id);
//!
//! let estimator = SignificanceEstimator::new(target.len(), candidates[0].len());
//! let p_values = estimator.compute_p_values(&scan.scores)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod phylo;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{
        percent_difference, AlignmentConfig, AlignmentScorer, AlignmentTrace, ScanError,
        ScanResult, TraceMode,
    };
    pub use crate::core::significance::{p_value, SignificanceEstimator, SignificanceModel};
    pub use crate::data::fasta::{self, Sequence};
    pub use crate::output::write_report;
    pub use crate::phylo;
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{AlignmentConfig, AlignmentScorer, ScanResult, TraceMode};
pub use crate::core::significance::{SignificanceEstimator, SignificanceModel};
pub use crate::data::fasta::Sequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "seqsig v{} - Closest-match search with alignment significance statistics",
        VERSION
    )
}
