// significance.rs - Extreme-value significance statistics for alignment scores
//
// Follows the BLAST treatment of sequence similarity scores:
// https://www.ncbi.nlm.nih.gov/BLAST/tutorial/Altschul-1.html

use thiserror::Error;

/// Iteration cap for the scale solve
const FIT_ITER_MAX: usize = 100;
/// Convergence accuracy for the scale parameter
const FIT_ACCURACY: f64 = 1.0e-9;
/// Fixed frequency constant; a full Karlin-Altschul treatment would
/// estimate K jointly with lambda
const FREQUENCY_CONSTANT_K: f64 = 0.1;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Degenerate score set: {distinct} distinct value(s), need at least 2")]
    Degenerate { distinct: usize },
    #[error("Score set contains non-finite values")]
    NonFinite,
    #[error("Scale fit did not converge")]
    NoConvergence,
}

/// Fitted tail-distribution parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceModel {
    pub lambda: f64,
    pub k: f64,
}

/// Converts alignment scores into E-values and p-values.
///
/// `candidate_len` is the first candidate's length and is used as the
/// subject length for every score, not each candidate's own length.
pub struct SignificanceEstimator {
    target_len: usize,
    candidate_len: usize,
}

impl SignificanceEstimator {
    pub fn new(target_len: usize, candidate_len: usize) -> Self {
        Self {
            target_len,
            candidate_len,
        }
    }

    /// Fit the tail distribution to a score vector.
    ///
    /// The scores are negated so that their right tail becomes the left
    /// tail of the fitted extreme-value family; lambda is the reciprocal
    /// of the fitted scale.
    pub fn fit_model(&self, scores: &[f64]) -> Result<SignificanceModel, FitError> {
        let negated: Vec<f64> = scores.iter().map(|&s| -s).collect();
        let scale = fit_gumbel_scale(&negated)?;

        Ok(SignificanceModel {
            lambda: 1.0 / scale,
            k: FREQUENCY_CONSTANT_K,
        })
    }

    /// E-value for one score: E = K * M * N * exp(-lambda * S)
    pub fn e_value(&self, score: f64, model: &SignificanceModel) -> f64 {
        let search_space = self.target_len as f64 * self.candidate_len as f64;
        model.k * search_space * (-model.lambda * score).exp()
    }

    /// Fit once, then map every score to a p-value in index order
    pub fn compute_p_values(&self, scores: &[f64]) -> Result<Vec<f64>, FitError> {
        let model = self.fit_model(scores)?;
        Ok(scores
            .iter()
            .map(|&score| p_value(self.e_value(score, &model)))
            .collect())
    }
}

/// Poisson-tail conversion from expected count to probability of at
/// least one: P = 1 - exp(-E)
pub fn p_value(e_value: f64) -> f64 {
    1.0 - (-e_value).exp()
}

/// Fit the scale of a Gumbel distribution (the shape-zero member of the
/// generalized extreme-value family) by maximum likelihood.
///
/// The scale solves
///   sigma - mean(x) + sum(x_i * exp(-x_i/sigma)) / sum(exp(-x_i/sigma)) = 0
/// via Newton-Raphson from the method-of-moments estimate
/// sigma0 = sqrt(6)*sd/pi. The left side is strictly increasing in sigma
/// (its derivative is 1 + weighted_variance/sigma^2), so the root is unique.
fn fit_gumbel_scale(samples: &[f64]) -> Result<f64, FitError> {
    if samples.iter().any(|x| !x.is_finite()) {
        return Err(FitError::NonFinite);
    }

    let mut distinct: Vec<f64> = Vec::new();
    for &x in samples {
        if !distinct.contains(&x) {
            distinct.push(x);
        }
    }
    if distinct.len() < 2 {
        return Err(FitError::Degenerate {
            distinct: distinct.len(),
        });
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    let minimum = samples.iter().cloned().fold(f64::INFINITY, f64::min);

    // Method-of-moments starting point
    let mut scale = (6.0 * variance).sqrt() / std::f64::consts::PI;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FitError::NoConvergence);
    }

    for _ in 0..FIT_ITER_MAX {
        // Weights are shifted by the sample minimum; the common factor
        // cancels in the ratios and keeps the exponentials bounded
        let mut s0 = 0.0;
        let mut s1 = 0.0;
        let mut s2 = 0.0;
        for &x in samples {
            let w = (-(x - minimum) / scale).exp();
            s0 += w;
            s1 += x * w;
            s2 += x * x * w;
        }
        let weighted_mean = s1 / s0;
        let weighted_variance = s2 / s0 - weighted_mean * weighted_mean;

        let objective = scale - mean + weighted_mean;
        let derivative = 1.0 + weighted_variance / (scale * scale);

        let next = scale - objective / derivative;
        if !next.is_finite() || next <= 0.0 {
            return Err(FitError::NoConvergence);
        }

        let delta = (next - scale).abs();
        scale = next;
        if delta < FIT_ACCURACY {
            return Ok(scale);
        }
    }

    Err(FitError::NoConvergence)
}
