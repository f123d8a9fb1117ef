//! Feature-name catalog and feature selection
//!
//! The named feature sets are generated at build time from the base metric
//! lists in [`catalog`]: every static metric expands to `current_`, `parent_`
//! and `delta_` columns, class/interface/enum/method metrics additionally to
//! one column per aggregation (`min`, `max`, `avg`, `median`, `sum`).
//!
//! # Feature sets
//!
//! | Set | Contents |
//! |-----|----------|
//! | `ALL` | every set below, in order |
//! | `STATIC` | file + class + interface + enum + method |
//! | `FGJIT` | fine-grained just-in-time metrics |
//! | `JIT` | Kamei et al. just-in-time metrics |
//! | `WD` | warning density |
//! | `PMD` | PMD rule hit counts |

pub mod catalog;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use catalog::{PmdRule, PmdSeverity, PMD_RULES};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/feature_sets.rs"));
}

pub use generated::{
    ALL_FEATURES, FGJIT_FEATURES, JIT_FEATURES, PMD_FEATURES, STATIC_CLASS_FEATURES,
    STATIC_ENUM_FEATURES, STATIC_FEATURES, STATIC_FILE_FEATURES, STATIC_INTERFACE_FEATURES,
    STATIC_METHOD_FEATURES, WD_FEATURES,
};

/// Named, build-time generated feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureSet {
    /// Every feature column
    #[default]
    All,
    /// All static metrics
    Static,
    /// File-level static metrics
    StaticFile,
    /// Class-aggregated static metrics
    StaticClass,
    /// Interface-aggregated static metrics
    StaticInterface,
    /// Enum-aggregated static metrics
    StaticEnum,
    /// Method-aggregated static metrics
    StaticMethod,
    /// Fine-grained just-in-time metrics
    Fgjit,
    /// Kamei et al. just-in-time metrics
    Jit,
    /// Warning density
    Wd,
    /// PMD rule hit counts
    Pmd,
}

impl FeatureSet {
    /// All feature sets
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Static,
            Self::StaticFile,
            Self::StaticClass,
            Self::StaticInterface,
            Self::StaticEnum,
            Self::StaticMethod,
            Self::Fgjit,
            Self::Jit,
            Self::Wd,
            Self::Pmd,
        ]
    }

    /// Ordered column names of this set
    #[must_use]
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Self::All => ALL_FEATURES,
            Self::Static => STATIC_FEATURES,
            Self::StaticFile => STATIC_FILE_FEATURES,
            Self::StaticClass => STATIC_CLASS_FEATURES,
            Self::StaticInterface => STATIC_INTERFACE_FEATURES,
            Self::StaticEnum => STATIC_ENUM_FEATURES,
            Self::StaticMethod => STATIC_METHOD_FEATURES,
            Self::Fgjit => FGJIT_FEATURES,
            Self::Jit => JIT_FEATURES,
            Self::Wd => WD_FEATURES,
            Self::Pmd => PMD_FEATURES,
        }
    }

    /// Constant-style name, e.g. `STATIC_CLASS_FEATURES`
    #[must_use]
    pub fn table_name(self) -> &'static str {
        match self {
            Self::All => "ALL_FEATURES",
            Self::Static => "STATIC_FEATURES",
            Self::StaticFile => "STATIC_FILE_FEATURES",
            Self::StaticClass => "STATIC_CLASS_FEATURES",
            Self::StaticInterface => "STATIC_INTERFACE_FEATURES",
            Self::StaticEnum => "STATIC_ENUM_FEATURES",
            Self::StaticMethod => "STATIC_METHOD_FEATURES",
            Self::Fgjit => "FGJIT_FEATURES",
            Self::Jit => "JIT_FEATURES",
            Self::Wd => "WD_FEATURES",
            Self::Pmd => "PMD_FEATURES",
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

impl FromStr for FeatureSet {
    type Err = Error;

    /// Accepts both `STATIC_CLASS_FEATURES` and `static-class` spellings
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_ascii_uppercase()
            .replace('-', "_")
            .trim_end_matches("_FEATURES")
            .to_string();
        Self::all()
            .iter()
            .copied()
            .find(|set| set.table_name().trim_end_matches("_FEATURES") == normalized)
            .ok_or_else(|| Error::Configuration(format!("unknown feature set '{s}'")))
    }
}

/// Columns handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSelection {
    /// A generated feature set
    Set(FeatureSet),
    /// An explicit, ordered list of column names
    Columns(Vec<String>),
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self::Set(FeatureSet::All)
    }
}

impl FeatureSelection {
    /// Read the first row of a CSV file as an ordered list of feature names
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its first row is empty
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut record = csv::StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(Error::Configuration(format!(
                "feature list {} is empty",
                path.display()
            )));
        }

        let names: Vec<String> = record
            .iter()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return Err(Error::Configuration(format!(
                "feature list {} has no column names",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), count = names.len(), "loaded feature list");
        Ok(Self::Columns(names))
    }

    /// Ordered column names of this selection
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Set(set) => set.names().to_vec(),
            Self::Columns(cols) => cols.iter().map(String::as_str).collect(),
        }
    }

    /// Number of selected columns
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Set(set) => set.names().len(),
            Self::Columns(cols) => cols.len(),
        }
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
