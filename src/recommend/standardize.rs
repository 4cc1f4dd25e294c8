//! Per-feature standardization (z-scores).

use tracing::debug;

/// Floor applied to standard deviations under `ZeroVariancePolicy::Epsilon`.
pub const MIN_STD_DEV: f64 = 1e-6;

/// What to do with a feature that has the same value for every song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ZeroVariancePolicy {
    /// Emit the column as all zeros.
    #[default]
    Zero,

    /// Divide by `max(std_dev, MIN_STD_DEV)`.
    Epsilon,
}

/// Column statistics fitted on the input matrix (population, ddof = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStats {
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct StandardizedMatrix {
    rows: Vec<Vec<f64>>,
    stats: FeatureStats,
}

impl StandardizedMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn stats(&self) -> &FeatureStats {
        &self.stats
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.stats.means.len()
    }
}

/// A column is constant when every value is bit-equal to the first one, or
/// when its spread underflows to zero.
fn is_constant(rows: &[Vec<f64>], c: usize, std_dev: f64) -> bool {
    let first = rows[0][c].to_bits();
    std_dev == 0.0 || rows.iter().all(|r| r[c].to_bits() == first)
}

/// Standardizes every column to zero mean and unit population variance.
///
/// The column count is taken from the first row.
///
/// # Panics
///
/// Panics if the rows do not all have the same length. A [`Catalogue`]
/// feature matrix always satisfies this.
///
/// [`Catalogue`]: crate::catalog::Catalogue
pub fn standardize(rows: &[Vec<f64>], policy: ZeroVariancePolicy) -> StandardizedMatrix {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
    assert!(
        rows.iter().all(|r| r.len() == n_cols),
        "standardize: rows must all have {} columns",
        n_cols
    );

    if n_rows == 0 {
        return StandardizedMatrix {
            rows: vec![],
            stats: FeatureStats {
                means: vec![],
                std_devs: vec![],
            },
        };
    }

    let n = n_rows as f64;
    let mut means = vec![0.0f64; n_cols];
    for row in rows {
        for (c, value) in row.iter().enumerate() {
            means[c] += value;
        }
    }
    for mean in means.iter_mut() {
        *mean /= n;
    }

    let mut std_devs = vec![0.0f64; n_cols];
    for row in rows {
        for (c, value) in row.iter().enumerate() {
            let d = value - means[c];
            std_devs[c] += d * d;
        }
    }
    for std_dev in std_devs.iter_mut() {
        *std_dev = (*std_dev / n).sqrt();
    }

    // Divisor per column; None means the column is emitted as zeros.
    let divisors: Vec<Option<f64>> = std_devs
        .iter()
        .enumerate()
        .map(|(c, &std_dev)| {
            let constant = is_constant(rows, c, std_dev);
            if constant {
                debug!("Feature column {} has zero variance ({:?})", c, policy);
            }
            match policy {
                ZeroVariancePolicy::Zero if constant => None,
                ZeroVariancePolicy::Zero => Some(std_dev),
                ZeroVariancePolicy::Epsilon => Some(std_dev.max(MIN_STD_DEV)),
            }
        })
        .collect();

    let standardized = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(c, value)| match divisors[c] {
                    Some(divisor) => (value - means[c]) / divisor,
                    None => 0.0,
                })
                .collect()
        })
        .collect();

    StandardizedMatrix {
        rows: standardized,
        stats: FeatureStats { means, std_devs },
    }
}
