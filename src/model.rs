//! The served model: a one-feature linear regression fit on a fixed training set.

pub use self::regression::Regression;
pub use self::residuals::Residuals;

pub mod regression;
pub mod residuals;

/// Model family name reported by the metadata endpoint.
pub const NAME: &str = "Linear Regression";

pub const AUTHOR: &str = "Sumit Gatade";

pub const VERSION: &str = "2.0";

/// Points the model is fit on at startup, `y = 2x`.
pub const TRAINING_SET: [(f64, f64); 5] =
    [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0), (5.0, 10.0)];
