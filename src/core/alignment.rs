// alignment.rs - Alignment configuration and trace mode

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for sequence alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
    pub description: Option<String>,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        // Match-count scoring: an identical pair scores its full length
        Self {
            match_score: 1,
            mismatch_penalty: 0,
            gap_open: 0,
            gap_extend: 0,
            description: Some("Simple match-count scoring".to_string()),
        }
    }
}

impl AlignmentConfig {
    /// Create configuration from preset name
    pub fn from_mode(mode: &str) -> Result<Self, String> {
        match mode {
            "simple" => Ok(Self::default()),
            "dna" => Ok(Self {
                match_score: 2,
                mismatch_penalty: -1,
                gap_open: 5,
                gap_extend: 2,
                description: Some("Standard DNA alignment".to_string()),
            }),
            "dna-strict" => Ok(Self {
                match_score: 3,
                mismatch_penalty: -2,
                gap_open: 8,
                gap_extend: 3,
                description: Some("Strict DNA alignment (higher penalties)".to_string()),
            }),
            _ => Err(format!("Unknown alignment mode: {}", mode)),
        }
    }

    /// Create custom configuration
    pub fn custom(match_score: i32, mismatch_penalty: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_open,
            gap_extend,
            description: Some("Custom alignment parameters".to_string()),
        }
    }
}

/// Traceback alignment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    Global,
    Local,
}

impl FromStr for TraceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" => Ok(TraceMode::Global),
            "local" => Ok(TraceMode::Local),
            _ => Err(format!("Invalid trace mode: {}. Use: global, local", s)),
        }
    }
}

impl TraceMode {
    pub fn description(&self) -> &str {
        match self {
            TraceMode::Global => "global (end-to-end)",
            TraceMode::Local => "local (best subregion)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_simple_scoring() {
        let config = AlignmentConfig::default();
        assert_eq!(config.match_score, 1);
        assert_eq!(config.mismatch_penalty, 0);
        assert_eq!(config.gap_open, 0);
        assert_eq!(config.gap_extend, 0);
    }

    #[test]
    fn test_preset_modes() {
        assert_eq!(
            AlignmentConfig::from_mode("simple").unwrap(),
            AlignmentConfig::default()
        );

        let dna = AlignmentConfig::from_mode("dna").unwrap();
        assert_eq!(dna.match_score, 2);
        assert_eq!(dna.gap_open, 5);

        assert!(AlignmentConfig::from_mode("protein").is_err());
    }

    #[test]
    fn test_trace_mode_parsing() {
        assert_eq!(TraceMode::from_str("global").unwrap(), TraceMode::Global);
        assert_eq!(TraceMode::from_str("LOCAL").unwrap(), TraceMode::Local);
        assert!(TraceMode::from_str("banded").is_err());
    }
}
