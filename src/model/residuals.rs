use crate::model::Regression;

/// Accumulates squared residuals to report the root-mean-square error.
#[derive(Default)]
pub struct Residuals {
    sum_squared: f64,
    count: usize,
}

impl Residuals {
    pub fn evaluate(regression: &Regression, points: &[(f64, f64)]) -> Self {
        let mut residuals = Self::default();
        for (x, y) in points {
            residuals.push(y - regression.predict(*x));
        }
        residuals
    }

    pub fn push(&mut self, residual: f64) {
        self.sum_squared += residual * residual;
        self.count += 1;
    }

    #[must_use]
    pub fn rmse(&self) -> f64 {
        (self.sum_squared / self.count.max(1) as f64).sqrt()
    }
}
