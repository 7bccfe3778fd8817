//! Heuristic multi-year salary projection.
//!
//! The growth constants model expected raises, they are not learned from the data the model was
//! trained on.

/// Generic yearly industry wage growth.
pub const BASE_GROWTH_RATE: f64 = 0.04;

/// Growth multiplier per experience code.
pub const EXPERIENCE_MULTIPLIERS: &[(&str, f64)] =
    &[("EN", 1.0), ("MI", 1.15), ("SE", 1.25), ("EX", 1.35)];

/// Growth multiplier per job title.
pub const JOB_MULTIPLIERS: &[(&str, f64)] = &[
    ("Data Scientist", 1.2),
    ("Machine Learning Engineer", 1.2),
    ("Data Engineer", 1.15),
    ("Applied Scientist", 1.25),
    ("Research Scientist", 1.25),
    ("Data Analyst", 1.1),
    ("Others", 1.0),
];

/// Multiplier of codes or titles missing from a table.
const NEUTRAL: f64 = 1.0;

/// The compound growth policy used to extrapolate a salary to other years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    base_rate: f64,
    experience: &'static [(&'static str, f64)],
    jobs: &'static [(&'static str, f64)],
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            base_rate: BASE_GROWTH_RATE,
            experience: EXPERIENCE_MULTIPLIERS,
            jobs: JOB_MULTIPLIERS,
        }
    }
}

impl GrowthPolicy {
    /// Returns the multiplier of an experience code, `1.0` for unknown codes.
    pub fn experience_multiplier(&self, code: &str) -> f64 {
        lookup(self.experience, code)
    }

    /// Returns the multiplier of a job title, `1.0` for unknown titles.
    pub fn job_multiplier(&self, title: &str) -> f64 {
        lookup(self.jobs, title)
    }

    /// Returns the yearly growth rate of a given experience and role.
    pub fn effective_rate(&self, experience_code: &str, job_title: &str) -> f64 {
        self.base_rate * self.experience_multiplier(experience_code) * self.job_multiplier(job_title)
    }

    /// Extrapolates `base_salary`, earned in `base_year`, to `target_year`.
    ///
    /// Targets before the base year discount the salary instead of growing it.
    ///
    /// # Arguments
    /// * `base_salary` - The salary in `base_year`, in currency units.
    /// * `base_year` - The year `base_salary` corresponds to.
    /// * `target_year` - The year to project to.
    /// * `experience_code` - The experience short code (`EN`, `MI`, `SE`, `EX`).
    /// * `job_title` - The job title label.
    ///
    /// # Returns
    /// `base_salary * (1 + rate) ^ (target_year - base_year)`.
    pub fn project(
        &self,
        base_salary: f64,
        base_year: i32,
        target_year: i32,
        experience_code: &str,
        job_title: &str,
    ) -> f64 {
        let rate = self.effective_rate(experience_code, job_title);
        base_salary * (1.0 + rate).powi(target_year.saturating_sub(base_year))
    }
}

/// Projects a salary with the default [`GrowthPolicy`].
pub fn project(
    base_salary: f64,
    base_year: i32,
    target_year: i32,
    experience_code: &str,
    job_title: &str,
) -> f64 {
    GrowthPolicy::default().project(
        base_salary,
        base_year,
        target_year,
        experience_code,
        job_title,
    )
}

fn lookup(table: &[(&str, f64)], key: &str) -> f64 {
    table
        .iter()
        .find_map(|&(k, m)| (k == key).then_some(m))
        .unwrap_or(NEUTRAL)
}
