use super::similarity::{norm, SimilarityMatrix, NORM_EPSILON};
use super::standardize::{standardize, ZeroVariancePolicy};
use super::RecommendError;
use crate::catalog::{Catalogue, Song, TrackId};
use serde::Serialize;
use tracing::debug;

/// What to do when the seed's standardized vector has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DegenerateVectorPolicy {
    /// Similarity against a degenerate vector is 0.0.
    #[default]
    Zero,

    /// Fail with `RecommendError::DegenerateVector` if the seed is degenerate.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankerSettings {
    pub zero_variance: ZeroVariancePolicy,
    pub degenerate_vectors: DegenerateVectorPolicy,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    #[serde(flatten)]
    pub song: Song,
    pub similarity: f64,
}

/// Validates a signed `k` coming from outside the typed API.
pub fn checked_k(k: i64) -> Result<usize, RecommendError> {
    usize::try_from(k).map_err(|_| RecommendError::InvalidK(k))
}

/// Returns the `k` songs most similar to `seed_id`, best first.
pub fn rank(
    catalogue: &Catalogue,
    seed_id: TrackId,
    k: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    rank_with(catalogue, seed_id, k, &RankerSettings::default())
}

/// Same as [`rank`] with explicit zero-variance and degenerate-vector policies.
///
/// The result holds `min(k, N - 1)` songs sorted by descending similarity.
/// Equal scores keep catalogue order. Only the seed itself is excluded, other
/// songs scoring 1.0 against it are still returned.
pub fn rank_with(
    catalogue: &Catalogue,
    seed_id: TrackId,
    k: usize,
    settings: &RankerSettings,
) -> Result<Vec<Recommendation>, RecommendError> {
    if catalogue.is_empty() {
        return Err(RecommendError::EmptyCatalogue);
    }
    let seed_index = catalogue
        .index_of(seed_id)
        .ok_or(RecommendError::SeedNotFound(seed_id))?;

    if k == 0 || catalogue.len() == 1 {
        debug!("Nothing to rank for seed {} (k = {}, n = {})", seed_id, k, catalogue.len());
        return Ok(vec![]);
    }

    let standardized = standardize(&catalogue.feature_matrix(), settings.zero_variance);
    if settings.degenerate_vectors == DegenerateVectorPolicy::Reject
        && norm(standardized.row(seed_index)) <= NORM_EPSILON
    {
        return Err(RecommendError::DegenerateVector(seed_id));
    }

    let similarities = SimilarityMatrix::compute(standardized.rows());
    debug!(
        "Computed {}x{} similarity matrix for seed {}",
        similarities.size(),
        similarities.size(),
        seed_id
    );

    let mut candidates: Vec<(usize, f64)> = similarities
        .row(seed_index)
        .iter()
        .copied()
        .enumerate()
        .filter(|(index, _)| *index != seed_index)
        .collect();

    // Stable sort plus the explicit index key keeps ties in catalogue order.
    candidates.sort_by(|(ia, sa), (ib, sb)| sb.total_cmp(sa).then(ia.cmp(ib)));

    Ok(candidates
        .into_iter()
        .take(k)
        .map(|(index, similarity)| Recommendation {
            song: catalogue.songs()[index].clone(),
            similarity,
        })
        .collect())
}
