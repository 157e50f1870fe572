// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.target.is_none() {
            self.target = config.target;
        }
        if self.candidates.is_none() {
            self.candidates = config.candidates;
        }
        if self.report.is_none() {
            self.report = config.report;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }
        if self.alignment_mode == "simple" && config.alignment_mode.is_some() {
            self.alignment_mode = config.alignment_mode.unwrap();
        }
        if self.trace_mode == "global" && config.trace_mode.is_some() {
            self.trace_mode = config.trace_mode.unwrap();
        }
        if self.tree_output == "phylo_tree.nwk" && config.tree_output.is_some() {
            self.tree_output = config.tree_output.unwrap();
        }

        // Custom alignment scores
        if self.match_score.is_none() {
            self.match_score = config.match_score;
        }
        if self.mismatch_penalty.is_none() {
            self.mismatch_penalty = config.mismatch_penalty;
        }
        if self.gap_open.is_none() {
            self.gap_open = config.gap_open;
        }
        if self.gap_extend.is_none() {
            self.gap_extend = config.gap_extend;
        }

        // Candidate filtering
        if self.include_candidates.is_none() {
            self.include_candidates = config.include_candidates;
        }
        if self.exclude_candidates.is_none() {
            self.exclude_candidates = config.exclude_candidates;
        }

        // Tree construction
        if self.msa.is_none() {
            self.msa = config.msa;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.difference && config.difference.unwrap_or(false) {
            self.difference = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            target: None,
            candidates: None,
            difference: false,
            trace_mode: "global".to_string(),
            alignment_mode: "simple".to_string(),
            match_score: None,
            mismatch_penalty: None,
            gap_open: None,
            gap_extend: None,
            report: None,
            format: "tsv".to_string(),
            msa: None,
            tree_output: "phylo_tree.nwk".to_string(),
            include_candidates: None,
            exclude_candidates: None,
            threads: None,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_config_fills_missing_values() {
        let config = Config {
            target: Some("mystery.fa".to_string()),
            candidates: Some("breeds.fa".to_string()),
            alignment_mode: Some("dna".to_string()),
            threads: Some(4),
            difference: Some(true),
            ..Config::default()
        };

        let merged = default_args().merge_with_config(config);

        assert_eq!(merged.target.as_deref(), Some("mystery.fa"));
        assert_eq!(merged.candidates.as_deref(), Some("breeds.fa"));
        assert_eq!(merged.alignment_mode, "dna");
        assert_eq!(merged.threads, Some(4));
        assert!(merged.difference);
    }

    #[test]
    fn test_cli_values_win_over_config() {
        let mut args = default_args();
        args.target = Some("cli.fa".to_string());
        args.alignment_mode = "dna-strict".to_string();

        let config = Config {
            target: Some("config.fa".to_string()),
            alignment_mode: Some("dna".to_string()),
            ..Config::default()
        };

        let merged = args.merge_with_config(config);

        assert_eq!(merged.target.as_deref(), Some("cli.fa"));
        assert_eq!(merged.alignment_mode, "dna-strict");
    }
}
