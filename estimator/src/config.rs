use std::{
    env,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use crate::{EstimatorErr, Result};

/// Environment variable naming the model artifact.
pub const MODEL_VAR: &str = "SALARY_MODEL";

/// Environment variable holding the last year to project estimates to.
pub const UNTIL_VAR: &str = "SALARY_UNTIL";

const DEFAULT_MODEL_PATH: &str = "model.json";

/// Years a projection horizon may be set to.
pub const HORIZON_YEARS: RangeInclusive<i32> = 2020..=2100;

/// Immutable process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    model_path: PathBuf,
    until: Option<i32>,
}

impl EstimatorConfig {
    /// Creates a new estimator configuration.
    ///
    /// # Args
    /// * `model_path` - Path of the model artifact.
    /// * `until` - Last year to project estimates to, `None` to only estimate the work year.
    ///
    /// # Returns
    /// An `EstimatorConfig` instance.
    pub fn new<P: Into<PathBuf>>(model_path: P, until: Option<i32>) -> Self {
        Self {
            model_path: model_path.into(),
            until,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Fails if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_path = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let until = lookup(UNTIL_VAR)
            .map(|v| parse_year(UNTIL_VAR, &v))
            .transpose()?;

        Ok(Self::new(model_path, until))
    }

    /// Overrides the projection horizon.
    pub fn with_until(mut self, until: Option<i32>) -> Self {
        self.until = until;
        self
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the last year to project estimates to, if any.
    pub fn until(&self) -> Option<i32> {
        self.until
    }
}

/// Parses a projection horizon given through `var`.
///
/// # Errors
/// Fails if `value` is not a year within [`HORIZON_YEARS`].
pub fn parse_year(var: &'static str, value: &str) -> Result<i32> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|e| EstimatorErr::InvalidConfig {
            var,
            msg: format!("cannot parse {value:?} as a year: {e}"),
        })?;

    if !HORIZON_YEARS.contains(&year) {
        return Err(EstimatorErr::InvalidConfig {
            var,
            msg: format!(
                "year {year} is outside {}..={}",
                HORIZON_YEARS.start(),
                HORIZON_YEARS.end()
            ),
        });
    }

    Ok(year)
}
