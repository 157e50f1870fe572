// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// seqsig - Closest-match search with alignment significance statistics
pub struct Args {
    /// path to the target (mystery) FASTA file; the first record is used
    #[argh(option)]
    pub target: Option<String>,

    /// path to the candidate FASTA file; all records are scanned in order
    #[argh(option)]
    pub candidates: Option<String>,

    /// compute the percent difference against the best match (needs a full traceback alignment, much slower)
    #[argh(switch)]
    pub difference: bool,

    /// traceback mode for --difference: global, local (default: global)
    #[argh(option, default = "String::from(\"global\")")]
    pub trace_mode: String,

    /// alignment scoring preset: simple, dna, dna-strict (default: simple)
    #[argh(option, default = "String::from(\"simple\")")]
    pub alignment_mode: String,

    /// custom match score (overrides preset mode, enables custom mode)
    #[argh(option)]
    pub match_score: Option<i32>,

    /// custom mismatch penalty (overrides preset mode, enables custom mode)
    #[argh(option)]
    pub mismatch_penalty: Option<i32>,

    /// custom gap open penalty (overrides preset mode, enables custom mode)
    #[argh(option)]
    pub gap_open: Option<i32>,

    /// custom gap extend penalty (overrides preset mode, enables custom mode)
    #[argh(option)]
    pub gap_extend: Option<i32>,

    /// write a per-candidate significance report to this file
    #[argh(option)]
    pub report: Option<String>,

    /// report format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// multiple-sequence-alignment FASTA for tree construction
    #[argh(option)]
    pub msa: Option<String>,

    /// output path for the Newick tree (default: phylo_tree.nwk)
    #[argh(option, default = "String::from(\"phylo_tree.nwk\")")]
    pub tree_output: String,

    /// include only candidates matching regex pattern
    #[argh(option)]
    pub include_candidates: Option<String>,

    /// exclude candidates matching regex pattern
    #[argh(option)]
    pub exclude_candidates: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
