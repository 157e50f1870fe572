// validation.rs - Input validation utilities

use std::str::FromStr;

use regex::Regex;

use crate::cli::args::Args;
use crate::core::{AlignmentConfig, TraceMode};

pub struct ValidationResult {
    pub alignment_config: AlignmentConfig,
    pub trace_mode: TraceMode,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate report format
    match args.format.to_lowercase().as_str() {
        "tsv" | "csv" | "json" => {}
        other => {
            return Err(format!(
                "Unsupported report format: {}. Use: tsv, csv, json",
                other
            ))
        }
    }

    // Validate trace mode
    let trace_mode = TraceMode::from_str(&args.trace_mode)?;

    // Validate and create alignment config
    let alignment_config = if args.match_score.is_some()
        || args.mismatch_penalty.is_some()
        || args.gap_open.is_some()
        || args.gap_extend.is_some()
    {
        // Custom mode; unset values fall back to the simple preset
        AlignmentConfig::custom(
            args.match_score.unwrap_or(1),
            args.mismatch_penalty.unwrap_or(0),
            args.gap_open.unwrap_or(0),
            args.gap_extend.unwrap_or(0),
        )
    } else {
        // Preset mode
        AlignmentConfig::from_mode(&args.alignment_mode)?
    };

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_candidates {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_candidates regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_candidates {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_candidates regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        alignment_config,
        trace_mode,
        include_regex,
        exclude_regex,
    })
}
