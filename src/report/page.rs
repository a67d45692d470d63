use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A report page, chosen on the command line or in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Preprocessing and labeling tables with the sentiment distribution
    RandomForest,
    /// Confusion matrix and classification report
    Metrics,
    /// K-fold cross-validation results and averaged metrics
    KFold,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::RandomForest, Self::Metrics, Self::KFold];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RandomForest => "Random Forest",
            Self::Metrics => "Metrics",
            Self::KFold => "K-Fold Cross Validation",
        }
    }

    /// Anchor used by the document navigation.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::RandomForest => "random-forest",
            Self::Metrics => "metrics",
            Self::KFold => "k-fold",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
