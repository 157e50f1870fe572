// fasta.rs - FASTA record loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use bio::io::fasta;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("Failed to open FASTA file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid FASTA record in '{path}': {message}")]
    Parse { path: String, message: String },
    #[error("No records found in '{path}'")]
    Empty { path: String },
}

/// A named DNA sequence, read-only after loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub seq: Vec<u8>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Read all records from a FASTA file, preserving file order
pub fn read_records(path: &Path) -> Result<Vec<Sequence>, FastaError> {
    let file = File::open(path).map_err(|e| FastaError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = fasta::Reader::new(BufReader::new(file));
    let mut records = Vec::new();

    for record_result in reader.records() {
        let record = record_result.map_err(|e| FastaError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        records.push(Sequence::new(record.id(), record.seq()));
    }

    if records.is_empty() {
        return Err(FastaError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(records)
}

/// Read the first record of a FASTA file (the query/target input)
pub fn read_first(path: &Path) -> Result<Sequence, FastaError> {
    let mut records = read_records(path)?;
    Ok(records.swap_remove(0))
}

/// Filter records by id against optional include/exclude patterns,
/// preserving order
pub fn apply_id_filters(
    records: Vec<Sequence>,
    include: Option<&Regex>,
    exclude: Option<&Regex>,
) -> Vec<Sequence> {
    records
        .into_iter()
        .filter(|record| {
            if let Some(pattern) = include {
                if !pattern.is_match(&record.id) {
                    return false;
                }
            }
            if let Some(pattern) = exclude {
                if pattern.is_match(&record.id) {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fasta(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_records_preserves_order() {
        let file = write_fasta(">first\nACGT\n>second\nTTTT\n>third\nGGGG\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "first");
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].id, "second");
        assert_eq!(records[2].id, "third");
    }

    #[test]
    fn test_read_first_uses_first_record() {
        let file = write_fasta(">mystery\nACGTACGT\n>ignored\nTTTT\n");
        let target = read_first(file.path()).unwrap();

        assert_eq!(target.id, "mystery");
        assert_eq!(target.seq, b"ACGTACGT");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_records(Path::new("/nonexistent/input.fa"));
        assert!(matches!(result, Err(FastaError::Io { .. })));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = write_fasta("");
        let result = read_records(file.path());
        assert!(matches!(result, Err(FastaError::Empty { .. })));
    }

    #[test]
    fn test_id_filters() {
        let records = vec![
            Sequence::new("breed_collie", "ACGT"),
            Sequence::new("breed_husky", "ACGA"),
            Sequence::new("control_1", "TTTT"),
        ];

        let include = Regex::new("^breed_").unwrap();
        let exclude = Regex::new("husky").unwrap();
        let filtered = apply_id_filters(records, Some(&include), Some(&exclude));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "breed_collie");
    }
}
