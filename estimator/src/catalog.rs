//! Fixed categorical catalogs.
//!
//! Every catalog entry is bound to the integer index the model was trained with. The indices are
//! neither alphabetical nor ordered by seniority and must never change without retraining.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::EstimatorErr;

/// A fixed enumeration of the valid labels of a categorical field.
pub trait Catalog: Copy + Eq + 'static {
    /// The field name, used for error reporting.
    const FIELD: &'static str;

    /// Every entry, in index order.
    const ALL: &'static [Self];

    /// Returns the human readable label of this entry.
    fn label(self) -> &'static str;

    /// Returns the integer this entry is encoded as.
    fn index(self) -> usize;

    /// Looks up the entry with the given label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.label() == label)
    }
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($(#[$vmeta:meta])* $variant:ident = $index:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $index,)+
        }

        impl Catalog for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = EstimatorErr;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| EstimatorErr::UnknownLabel {
                    field: Self::FIELD,
                    label: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(de::Error::custom)
            }
        }
    };
}

catalog! {
    /// Experience level.
    Experience ("experience level") {
        #[default]
        Senior = 0 => "Senior Level",
        Entry = 1 => "Entry Level",
        Mid = 2 => "Mid Level",
        Executive = 3 => "Executive",
    }
}

impl Experience {
    /// Returns the short code the growth policy is keyed by.
    pub fn code(self) -> &'static str {
        match self {
            Self::Senior => "SE",
            Self::Entry => "EN",
            Self::Mid => "MI",
            Self::Executive => "EX",
        }
    }
}

catalog! {
    /// Employment type.
    Employment ("employment type") {
        #[default]
        FullTime = 0 => "Full-time",
        Contract = 1 => "Contract",
        PartTime = 2 => "Part-time",
        Freelance = 3 => "Freelance",
    }
}

catalog! {
    /// Job title, anything outside the named roles is `Others`.
    JobTitle ("job title") {
        #[default]
        DataScientist = 0 => "Data Scientist",
        DataAnalyst = 1 => "Data Analyst",
        AppliedScientist = 2 => "Applied Scientist",
        ResearchScientist = 3 => "Research Scientist",
        DataEngineer = 4 => "Data Engineer",
        MachineLearningEngineer = 5 => "Machine Learning Engineer",
        Others = 6 => "Others",
    }
}

catalog! {
    /// Country, shared by the company location and the employee residence.
    Country ("country") {
        #[default]
        UnitedStates = 0 => "United States",
        UnitedKingdom = 1 => "United Kingdom",
        Germany = 2 => "Germany",
        Canada = 3 => "Canada",
        Spain = 4 => "Spain",
        Other = 5 => "Other",
    }
}

catalog! {
    /// Company size by headcount.
    CompanySize ("company size") {
        #[default]
        Small = 0 => "Small (<50)",
        Medium = 1 => "Medium (50-250)",
        Large = 2 => "Large (>250)",
    }
}
