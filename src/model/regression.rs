use statrs::statistics::Statistics;

use crate::prelude::*;

/// Fitted simple linear regression, `y = slope * x + intercept`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Fits the regression with ordinary least squares.
    ///
    /// Slope is `cov(x, y) / var(x)`, and the line passes through the means.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        if points.len() < 2 {
            bail!("at least 2 points are needed to fit a line, got {}", points.len());
        }

        let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();

        let variance = xs.iter().variance();
        if !variance.is_finite() || variance <= 0.0 {
            bail!("the inputs must have a finite non-zero variance, got {}", variance);
        }
        let slope = xs.iter().covariance(ys.iter()) / variance;
        let intercept = ys.iter().mean() - slope * xs.iter().mean();

        Ok(Self { slope, intercept })
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
