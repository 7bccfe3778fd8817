//! Categorical to numeric feature encoding.

use std::fmt;

use log::debug;

use crate::{Profile, catalog::Catalog};

/// The amount of features the model takes.
pub const N_FEATURES: usize = 8;

/// The column names, in the order the model was trained with.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "employee_residence",
    "remote_ratio",
    "company_location",
    "company_size",
];

/// The fixed order numeric input of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; N_FEATURES]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl fmt::Display for FeatureVector {
    /// Writes every feature as `name=value`, in model order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in FEATURE_NAMES.iter().zip(self.0).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Encodes a profile into the model's feature vector.
///
/// Work year and remote ratio pass through unchanged, every categorical field becomes its catalog
/// index. Location and residence are encoded with the same country catalog.
pub fn encode(profile: &Profile) -> FeatureVector {
    let index = |i: usize| i as f32;

    let features = FeatureVector([
        f32::from(profile.work_year),
        index(profile.experience.index()),
        index(profile.employment.index()),
        index(profile.job_title.index()),
        index(profile.residence.index()),
        f32::from(profile.remote_ratio),
        index(profile.location.index()),
        index(profile.company_size.index()),
    ]);

    debug!("encoded profile: {features}");
    features
}
