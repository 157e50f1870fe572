// mod.rs - Significance report writers

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::scorer::ScanResult;
use crate::data::fasta::Sequence;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    Ok(())
}

fn write_delimited(
    file_path: &str,
    delimiter: char,
    candidates: &[Sequence],
    scan: &ScanResult,
    e_values: &[f64],
    p_values: &[f64],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# seqsig v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write header
    writeln!(
        writer,
        "candidate{d}length{d}score{d}e_value{d}p_value{d}best_match",
        d = delimiter
    )
    .map_err(|e| format!("Write error: {}", e))?;

    // Write rows, index-aligned with the candidate set
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(
            writer,
            "{id}{d}{len}{d}{score}{d}{e:e}{d}{p}{d}{best}",
            id = candidate.id,
            len = candidate.len(),
            score = scan.scores[i],
            e = e_values[i],
            p = p_values[i],
            best = i == scan.best_index,
            d = delimiter
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Significance report written to: {}", file_path);
    Ok(())
}

/// Write the significance report in JSON format
fn write_json(
    file_path: &str,
    candidates: &[Sequence],
    scan: &ScanResult,
    e_values: &[f64],
    p_values: &[f64],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;

    let rows: Vec<serde_json::Value> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            serde_json::json!({
                "candidate": candidate.id,
                "length": candidate.len(),
                "score": scan.scores[i],
                "e_value": e_values[i],
                "p_value": p_values[i],
                "best_match": i == scan.best_index,
            })
        })
        .collect();

    let report = serde_json::json!({
        "command_line": command_line,
        "generated": chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "best_index": scan.best_index,
        "best_score": scan.best_score,
        "candidates": rows,
    });

    let content = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write report file '{}': {}", file_path, e))?;

    println!("✅ Significance report written to: {}", file_path);
    Ok(())
}

/// Write the significance report in the specified format
pub fn write_report(
    file_path: &str,
    format: &str,
    candidates: &[Sequence],
    scan: &ScanResult,
    e_values: &[f64],
    p_values: &[f64],
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_delimited(
            file_path,
            '\t',
            candidates,
            scan,
            e_values,
            p_values,
            command_line,
        ),
        "csv" => write_delimited(
            file_path,
            ',',
            candidates,
            scan,
            e_values,
            p_values,
            command_line,
        ),
        "json" => write_json(file_path, candidates, scan, e_values, p_values, command_line),
        _ => Err(format!(
            "Unsupported report format: {}. Use: tsv, csv, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> (Vec<Sequence>, ScanResult, Vec<f64>, Vec<f64>) {
        let candidates = vec![
            Sequence::new("match", b"ACGTACGT".to_vec()),
            Sequence::new("other", b"TTTTTTTT".to_vec()),
        ];
        let scan = ScanResult {
            scores: vec![8.0, 2.0],
            best_index: 0,
            best_score: 8.0,
        };
        (candidates, scan, vec![0.02, 1.5], vec![0.0198, 0.7769])
    }

    #[test]
    fn test_tsv_report_rows() {
        let (candidates, scan, e_values, p_values) = sample_inputs();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tsv");
        let path_str = path.to_str().unwrap();

        write_report(
            path_str,
            "tsv",
            &candidates,
            &scan,
            &e_values,
            &p_values,
            "seqsig --target t.fa --candidates c.fa",
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Command: seqsig"));
        assert!(content.contains("candidate\tlength\tscore\te_value\tp_value\tbest_match"));
        assert!(content.contains("match\t8\t8\t"));
        assert!(content.contains("\ttrue"));
        assert!(content.contains("other\t8\t2\t"));
    }

    #[test]
    fn test_json_report_structure() {
        let (candidates, scan, e_values, p_values) = sample_inputs();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let path_str = path.to_str().unwrap();

        write_report(
            path_str,
            "json",
            &candidates,
            &scan,
            &e_values,
            &p_values,
            "cmd",
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["best_index"], 0);
        assert_eq!(parsed["candidates"][0]["candidate"], "match");
        assert_eq!(parsed["candidates"][0]["best_match"], true);
        assert_eq!(parsed["candidates"][1]["p_value"], 0.7769);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let (candidates, scan, e_values, p_values) = sample_inputs();
        let result = write_report(
            "out.bin",
            "parquet",
            &candidates,
            &scan,
            &e_values,
            &p_values,
            "cmd",
        );
        assert!(result.is_err());
    }
}
