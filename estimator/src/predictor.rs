use std::fmt;

use log::{debug, warn};
use machine_learning::{Model, Regressor};
use serde::Serialize;

use crate::{
    EstimatorConfig, EstimatorErr, GrowthPolicy, Profile, Result,
    catalog::Catalog,
    encoder::{N_FEATURES, encode},
};

/// An estimated salary for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub year: i32,
    /// Annual salary in thousands of currency units.
    pub salary_k: f64,
}

impl Prediction {
    fn from_salary(year: i32, salary: f64) -> Self {
        Self {
            year,
            salary_k: salary / 1000.0,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.1}K USD", self.year, self.salary_k)
    }
}

/// Turns profiles into salary estimates: encodes them, runs the model and projects its output.
pub struct Predictor<M> {
    model: M,
    policy: GrowthPolicy,
}

impl Predictor<Model> {
    /// Loads the model artifact named by `config`.
    ///
    /// # Errors
    /// Returns an `EstimatorErr` if the artifact can't be loaded or doesn't take the encoded
    /// features.
    pub fn load(config: &EstimatorConfig) -> Result<Self> {
        let model = Model::load(config.model_path())?;
        Self::new(model)
    }
}

impl<M: Regressor> Predictor<M> {
    /// Creates a new `Predictor` with the default growth policy.
    ///
    /// # Errors
    /// Fails if `model` doesn't take exactly the amount of features profiles are encoded into.
    pub fn new(model: M) -> Result<Self> {
        let got = model.n_features();
        if got != N_FEATURES {
            return Err(EstimatorErr::IncompatibleModel {
                got,
                expected: N_FEATURES,
            });
        }

        Ok(Self {
            model,
            policy: GrowthPolicy::default(),
        })
    }

    /// Estimates the salary of `profile` for its own work year.
    pub fn estimate(&self, profile: &Profile) -> Result<Prediction> {
        let salary = self.base_salary(profile)?;
        Ok(Prediction::from_salary(i32::from(profile.work_year), salary))
    }

    /// Estimates the salary of `profile` for each of `years`.
    ///
    /// Every year is extrapolated from the same base estimate. Nothing is returned if the model
    /// fails.
    pub fn project<I>(&self, profile: &Profile, years: I) -> Result<Vec<Prediction>>
    where
        I: IntoIterator<Item = i32>,
    {
        let base_salary = self.base_salary(profile)?;
        let base_year = i32::from(profile.work_year);
        let experience = profile.experience.code();
        let job_title = profile.job_title.label();

        let projections = years
            .into_iter()
            .map(|year| {
                let salary = self
                    .policy
                    .project(base_salary, base_year, year, experience, job_title);
                Prediction::from_salary(year, salary)
            })
            .collect();

        Ok(projections)
    }

    /// Estimates the salary of `profile` for every year from its work year up to `until`.
    pub fn project_until(&self, profile: &Profile, until: i32) -> Result<Vec<Prediction>> {
        self.project(profile, i32::from(profile.work_year)..=until)
    }

    fn base_salary(&self, profile: &Profile) -> Result<f64> {
        let features = encode(profile);

        let salary = self
            .model
            .predict_one(features.as_slice())
            .map_err(|e| {
                warn!("inference failed for {:?}: {e}", features.as_slice());
                EstimatorErr::Inference(e)
            })?;

        let salary = f64::from(salary);
        debug!(salary = salary; "base prediction");
        Ok(salary)
    }
}
