// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub target: Option<String>,
    pub candidates: Option<String>,
    pub report: Option<String>,
    pub format: Option<String>,

    // Alignment settings
    pub alignment_mode: Option<String>,
    pub match_score: Option<i32>,
    pub mismatch_penalty: Option<i32>,
    pub gap_open: Option<i32>,
    pub gap_extend: Option<i32>,

    // Best-match difference
    pub difference: Option<bool>,
    pub trace_mode: Option<String>,

    // Candidate filtering
    pub include_candidates: Option<String>,
    pub exclude_candidates: Option<String>,

    // Tree construction
    pub msa: Option<String>,
    pub tree_output: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqsig.toml - Configuration file for seqsig
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Target (mystery) FASTA file; the first record is used
target = "/path/to/mystery.fa"

# Candidate FASTA file; all records are scanned in order
candidates = "/path/to/candidates.fa"

# Write a per-candidate significance report to this file
# report = "significance.tsv"

# Report format: tsv, csv, json
format = "tsv"

# =============================================================================
# ALIGNMENT SETTINGS
# =============================================================================

# Alignment scoring preset: simple, dna, dna-strict
alignment_mode = "simple"

# Custom alignment scores (overrides preset mode)
# match_score = 1
# mismatch_penalty = 0
# gap_open = 0
# gap_extend = 0

# =============================================================================
# BEST-MATCH DIFFERENCE
# =============================================================================

# Compute the percent difference against the best match
# (needs a full traceback alignment, much slower)
difference = false

# Traceback mode for the difference alignment: global, local
trace_mode = "global"

# =============================================================================
# CANDIDATE FILTERING
# =============================================================================

# Include only candidates matching regex pattern
# include_candidates = "breed_.*"

# Exclude candidates matching regex pattern
# exclude_candidates = "control.*"

# =============================================================================
# TREE CONSTRUCTION
# =============================================================================

# Multiple-sequence-alignment FASTA for tree construction
# msa = "/path/to/msa.fa"

# Output path for the Newick tree
tree_output = "phylo_tree.nwk"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_round_trips() {
        let sample = Config::generate_sample();
        let config: Config = toml::from_str(&sample).unwrap();

        assert_eq!(config.target.as_deref(), Some("/path/to/mystery.fa"));
        assert_eq!(config.alignment_mode.as_deref(), Some("simple"));
        assert_eq!(config.tree_output.as_deref(), Some("phylo_tree.nwk"));
        assert_eq!(config.difference, Some(false));
        assert!(config.report.is_none());
        assert!(config.threads.is_none());
    }
}
