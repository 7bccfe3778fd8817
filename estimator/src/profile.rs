use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    EstimatorErr, Result,
    catalog::{CompanySize, Country, Employment, Experience, JobTitle},
};

/// The work years a profile can be estimated for.
pub const WORK_YEARS: RangeInclusive<u16> = 2020..=2025;

/// The remote work percentages a profile can choose from.
pub const REMOTE_RATIOS: [u8; 5] = [0, 25, 50, 75, 100];

/// A single salary estimation request.
///
/// Fields missing from a JSON profile take the same defaults the selection form starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub work_year: u16,
    pub experience: Experience,
    pub employment: Employment,
    pub job_title: JobTitle,
    pub residence: Country,
    /// Percentage of remote work.
    pub remote_ratio: u8,
    pub location: Country,
    pub company_size: CompanySize,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            work_year: 2023,
            experience: Experience::default(),
            employment: Employment::default(),
            job_title: JobTitle::default(),
            residence: Country::default(),
            remote_ratio: 50,
            location: Country::default(),
            company_size: CompanySize::default(),
        }
    }
}

impl Profile {
    /// Parses and validates a JSON profile whose categorical fields hold catalog labels.
    ///
    /// # Errors
    /// Returns an `EstimatorErr` if the JSON is malformed, a label is unknown or a numeric field
    /// falls outside of its choices.
    pub fn from_json(content: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the numeric fields hold one of the values the form offers.
    pub fn validate(&self) -> Result<()> {
        if !WORK_YEARS.contains(&self.work_year) {
            return Err(EstimatorErr::WorkYearOutOfRange {
                year: self.work_year,
            });
        }

        if !REMOTE_RATIOS.contains(&self.remote_ratio) {
            return Err(EstimatorErr::InvalidRemoteRatio {
                ratio: self.remote_ratio,
            });
        }

        Ok(())
    }
}
