// scorer.rs - Pairwise alignment scan and best-match selection

use indicatif::{ProgressBar, ProgressStyle};
use parasail_rs::{Aligner, Matrix};
use rayon::prelude::*;
use thiserror::Error;

use crate::core::alignment::{AlignmentConfig, TraceMode};
use crate::data::fasta::Sequence;

const DNA_ALPHABET: &[u8] = b"ACGT";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Candidate set is empty: best match is undefined")]
    EmptyCandidateSet,
    #[error("Aligned sequences have different lengths ({query} vs {reference})")]
    TraceMismatch { query: usize, reference: usize },
    #[error("Alignment engine failure: {0}")]
    Engine(String),
}

/// One materialized pairwise alignment: the two gapped strings plus the score
#[derive(Debug, Clone)]
pub struct AlignmentTrace {
    pub query: String,
    pub reference: String,
    pub score: f64,
}

/// Result of a full candidate scan
///
/// `scores` is index-aligned with the candidate set. The best match is
/// selected with a non-strict `>=` update from a running best of 0, so
/// trailing ties overwrite earlier ones; that behavior is kept for
/// compatibility with existing result sets.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub scores: Vec<f64>,
    pub best_index: usize,
    pub best_score: f64,
}

/// Scores a candidate set against a single target sequence
pub struct AlignmentScorer {
    config: AlignmentConfig,
}

impl AlignmentScorer {
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    /// Score every candidate against the target in score-only mode.
    ///
    /// Scoring runs on the rayon pool (candidates are independent; the
    /// collected vector stays index-aligned with the candidate set). The
    /// best-match fold runs sequentially in index order afterwards so the
    /// `>=` tie-break matches a sequential scan exactly.
    pub fn compute_all_scores(
        &self,
        target: &Sequence,
        candidates: &[Sequence],
    ) -> Result<ScanResult, ScanError> {
        if candidates.is_empty() {
            return Err(ScanError::EmptyCandidateSet);
        }

        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap(),
        );

        let scores: Result<Vec<f64>, ScanError> = candidates
            .par_iter()
            .map(|candidate| {
                let score = self.score_pair(target, candidate);
                pb.inc(1);
                score
            })
            .collect();
        let scores = scores?;

        pb.finish_with_message(format!("✅ Scored {} candidates", candidates.len()));

        let mut best_index = 0;
        let mut best_score = 0.0_f64;
        for (i, &score) in scores.iter().enumerate() {
            if score >= best_score {
                best_score = score;
                best_index = i;
            }
        }

        Ok(ScanResult {
            scores,
            best_index,
            best_score,
        })
    }

    /// Single score-only global alignment
    fn score_pair(&self, target: &Sequence, candidate: &Sequence) -> Result<f64, ScanError> {
        let matrix = Matrix::create(
            DNA_ALPHABET,
            self.config.match_score,
            self.config.mismatch_penalty,
        )
        .map_err(|e| ScanError::Engine(e.to_string()))?;

        let aligner = Aligner::new()
            .matrix(matrix)
            .gap_open(self.config.gap_open)
            .gap_extend(self.config.gap_extend)
            .global()
            .build();

        let result = aligner
            .align(Some(&target.seq), &candidate.seq)
            .map_err(|e| ScanError::Engine(e.to_string()))?;

        Ok(result.get_score() as f64)
    }

    /// Materialize the full alignment for one pair.
    ///
    /// This enables traceback buffers and is far more expensive than the
    /// score-only scan, so it is only run on demand for a single candidate.
    pub fn materialize_alignment(
        &self,
        target: &Sequence,
        candidate: &Sequence,
        mode: TraceMode,
    ) -> Result<AlignmentTrace, ScanError> {
        let matrix = Matrix::create(
            DNA_ALPHABET,
            self.config.match_score,
            self.config.mismatch_penalty,
        )
        .map_err(|e| ScanError::Engine(e.to_string()))?;

        let aligner = match mode {
            TraceMode::Global => Aligner::new()
                .matrix(matrix)
                .gap_open(self.config.gap_open)
                .gap_extend(self.config.gap_extend)
                .global()
                .use_trace()
                .build(),
            TraceMode::Local => Aligner::new()
                .matrix(matrix)
                .gap_open(self.config.gap_open)
                .gap_extend(self.config.gap_extend)
                .local()
                .use_trace()
                .build(),
        };

        let result = aligner
            .align(Some(&target.seq), &candidate.seq)
            .map_err(|e| ScanError::Engine(e.to_string()))?;

        let traceback = result
            .get_traceback_strings(&target.seq, &candidate.seq)
            .map_err(|e| ScanError::Engine(e.to_string()))?;

        Ok(AlignmentTrace {
            query: traceback.query,
            reference: traceback.reference,
            score: result.get_score() as f64,
        })
    }
}

/// Percent of aligned positions where the two sequences differ.
///
/// A gap opposite a symbol counts as a difference. The two aligned strings
/// always have equal length for a valid trace; unequal lengths are rejected
/// rather than walked out of bounds.
pub fn percent_difference(trace: &AlignmentTrace) -> Result<f64, ScanError> {
    let query = trace.query.as_bytes();
    let reference = trace.reference.as_bytes();

    if query.len() != reference.len() {
        return Err(ScanError::TraceMismatch {
            query: query.len(),
            reference: reference.len(),
        });
    }
    if query.is_empty() {
        return Ok(0.0);
    }

    let differences = query
        .iter()
        .zip(reference.iter())
        .filter(|(q, r)| q != r)
        .count();

    Ok(differences as f64 / query.len() as f64 * 100.0)
}
