// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;

use seqsig::cli::Config;
use seqsig::core::significance::{self, SignificanceEstimator};
use seqsig::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate required parameters
    let target_path = args.target.as_ref().ok_or("--target is required")?;
    let candidates_path = args.candidates.as_ref().ok_or("--candidates is required")?;

    println!("🚀 seqsig v{}", env!("CARGO_PKG_VERSION"));

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    }

    // Validate all arguments
    let validation = validate_args(&args)?;

    let total_start = Instant::now();

    // Load sequences; both files are read fully and closed before any
    // alignment work starts
    let target = fasta::read_first(Path::new(target_path))
        .map_err(|e| format!("Failed to load target: {}", e))?;
    let candidates = fasta::read_records(Path::new(candidates_path))
        .map_err(|e| format!("Failed to load candidates: {}", e))?;
    let loaded = candidates.len();
    let candidates = fasta::apply_id_filters(
        candidates,
        validation.include_regex.as_ref(),
        validation.exclude_regex.as_ref(),
    );

    println!("🧬 Target: {} ({} bp)", target.id, target.len());
    if candidates.len() != loaded {
        println!(
            "🧬 Candidates: {} ({} filtered out)",
            candidates.len(),
            loaded - candidates.len()
        );
    } else {
        println!("🧬 Candidates: {}", candidates.len());
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Alignment scan: score-only, best match tracked across all candidates
    println!(
        "\n🔄 Scoring candidates ({})...",
        validation
            .alignment_config
            .description
            .as_deref()
            .unwrap_or("custom")
    );
    let scorer = AlignmentScorer::new(validation.alignment_config.clone());
    let scan = scorer
        .compute_all_scores(&target, &candidates)
        .map_err(|e| format!("Alignment scan failed: {}", e))?;

    let best = &candidates[scan.best_index];
    println!("\n🏆 Closest match: {}", best.id);
    println!("Sequence: {}", String::from_utf8_lossy(&best.seq));

    if args.difference {
        // Full traceback alignment for the best pair only
        println!(
            "🔍 Computing difference ({} traceback)...",
            validation.trace_mode.description()
        );
        let trace = scorer
            .materialize_alignment(&target, best, validation.trace_mode)
            .map_err(|e| format!("Traceback alignment failed: {}", e))?;
        let difference = percent_difference(&trace)
            .map_err(|e| format!("Percent difference failed: {}", e))?;
        println!("Difference percentage: {:.2}%", difference);
    }

    // Significance: the E-value search space uses the first candidate's
    // length for every score
    let estimator = SignificanceEstimator::new(target.len(), candidates[0].len());
    let model = estimator
        .fit_model(&scan.scores)
        .map_err(|e| format!("Significance estimation failed: {}", e))?;
    let e_values: Vec<f64> = scan
        .scores
        .iter()
        .map(|&score| estimator.e_value(score, &model))
        .collect();
    let p_values: Vec<f64> = e_values.iter().map(|&e| significance::p_value(e)).collect();

    println!(
        "\n📈 Fitted tail model: lambda={:.6}, K={}",
        model.lambda, model.k
    );
    println!("📊 P-values: {:?}", p_values);

    // Write significance report if requested
    if let Some(report_path) = &args.report {
        write_report(
            report_path,
            &args.format,
            &candidates,
            &scan,
            &e_values,
            &p_values,
            &command_line,
        )?;
    }

    // Build the tree when an MSA is supplied; independent of the scan
    if let Some(msa_path) = &args.msa {
        println!("\n🌳 Building neighbor-joining tree from {}...", msa_path);
        let records = fasta::read_records(Path::new(msa_path))
            .map_err(|e| format!("Failed to load alignment: {}", e))?;
        let matrix = phylo::identity_matrix(&records)
            .map_err(|e| format!("Tree construction failed: {}", e))?;
        let tree = phylo::neighbor_joining(&matrix);
        phylo::write_newick(&tree, &args.tree_output)?;
        phylo::print_tree(&tree);
    }

    // Print summary
    let total_elapsed = total_start.elapsed();
    println!("\n🎉 === SEQSIG COMPLETED SUCCESSFULLY ===");
    println!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    println!("🔧 Command: {}", command_line);

    Ok(())
}
