// distance.rs - Identity distance matrix from a multiple sequence alignment

use thiserror::Error;

use crate::data::fasta::Sequence;

#[derive(Debug, Error)]
pub enum PhyloError {
    #[error("Alignment rows have unequal lengths: '{id}' is {len}, expected {expected}")]
    RaggedAlignment {
        id: String,
        len: usize,
        expected: usize,
    },
    #[error("Need at least 3 aligned sequences to build a tree, got {0}")]
    TooFewSequences(usize),
}

/// Symmetric pairwise distance matrix with taxon labels
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the identity distance matrix of an MSA.
///
/// Distance is 1 - matches/columns over the aligned columns; gap characters
/// compare like any other symbol, matching the "identity" calculator of the
/// classic phylogenetics toolkits.
pub fn identity_matrix(records: &[Sequence]) -> Result<DistanceMatrix, PhyloError> {
    if records.len() < 3 {
        return Err(PhyloError::TooFewSequences(records.len()));
    }

    let expected = records[0].len();
    for record in records {
        if record.len() != expected {
            return Err(PhyloError::RaggedAlignment {
                id: record.id.clone(),
                len: record.len(),
                expected,
            });
        }
    }

    let n = records.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = identity_distance(&records[i].seq, &records[j].seq);
            values[i][j] = d;
            values[j][i] = d;
        }
    }

    Ok(DistanceMatrix {
        labels: records.iter().map(|r| r.id.clone()).collect(),
        values,
    })
}

fn identity_distance(a: &[u8], b: &[u8]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    1.0 - matches as f64 / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(id: &str, bases: &str) -> Sequence {
        Sequence::new(id, bases.as_bytes())
    }

    #[test]
    fn test_identity_matrix_values() {
        let records = vec![
            seq("a", "ACGT"),
            seq("b", "ACGA"),
            seq("c", "TTTT"),
        ];
        let matrix = identity_matrix(&records).unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.values[0][0], 0.0);
        assert_eq!(matrix.values[0][1], 0.25);
        assert_eq!(matrix.values[1][0], 0.25);
        // "ACGT" vs "TTTT": one matching column
        assert_eq!(matrix.values[0][2], 0.75);
    }

    #[test]
    fn test_gap_columns_count_as_symbols() {
        let records = vec![
            seq("a", "AC-T"),
            seq("b", "AC-A"),
            seq("c", "ACGT"),
        ];
        let matrix = identity_matrix(&records).unwrap();

        // Shared gap column is a match
        assert_eq!(matrix.values[0][1], 0.25);
        // Gap against symbol is a mismatch
        assert_eq!(matrix.values[0][2], 0.25);
    }

    #[test]
    fn test_ragged_alignment_is_rejected() {
        let records = vec![seq("a", "ACGT"), seq("b", "ACG"), seq("c", "ACGT")];
        let result = identity_matrix(&records);

        assert!(matches!(
            result,
            Err(PhyloError::RaggedAlignment {
                len: 3,
                expected: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_too_few_sequences() {
        let records = vec![seq("a", "ACGT"), seq("b", "ACGT")];
        assert!(matches!(
            identity_matrix(&records),
            Err(PhyloError::TooFewSequences(2))
        ));
    }
}
