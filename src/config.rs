//! Configuration
//!
//! Test settings that can be stored as JSON and reused across runs.
use crate::constants::DEFAULT_ALPHA;
use crate::decision::TestResult;
use crate::errors::GTestError;
use crate::goodness_of_fit::{self, Hypothesis};
use crate::utils::fmt_counts;
use crate::validation::check_alpha;
use crate::{batch, contingency};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}
fn default_hypothesis() -> Hypothesis {
    Hypothesis::Simple
}
fn default_parallel() -> bool {
    false
}

/// Configuration for running G-tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GTestConfig {
    /// Significance level.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Degrees of freedom policy for goodness of fit.
    #[serde(default = "default_hypothesis")]
    pub hypothesis: Hypothesis,
    /// Whether batch operations use the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for GTestConfig {
    fn default() -> Self {
        GTestConfig {
            alpha: DEFAULT_ALPHA,
            hypothesis: Hypothesis::Simple,
            parallel: false,
        }
    }
}

impl GTestConfig {
    pub fn validate(&self) -> Result<(), GTestError> {
        check_alpha(self.alpha)
    }

    /// Goodness-of-fit test under the configured hypothesis.
    pub fn goodness_of_fit(&self, expected: &[f64], observed: &[i64]) -> Result<(TestResult, bool), GTestError> {
        self.validate()?;
        let result = goodness_of_fit::evaluate(expected, observed, self.hypothesis)?;
        debug!(
            "Goodness of fit ({:?}) of [{}]: p = {:.6e}",
            self.hypothesis,
            fmt_counts(observed),
            result.p_value
        );
        let reject = result.reject(self.alpha)?;
        Ok((result, reject))
    }

    /// Independence test of a contingency table.
    pub fn independence(&self, table: &[Vec<i64>]) -> Result<(TestResult, bool), GTestError> {
        self.validate()?;
        let result = contingency::evaluate(table)?;
        let reject = result.reject(self.alpha)?;
        Ok((result, reject))
    }

    /// Indices of the tables rejected at the configured significance level.
    pub fn significant(&self, tables: &[Vec<Vec<i64>>]) -> Result<Vec<usize>, GTestError> {
        batch::significant(tables, self.alpha, self.parallel)
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save the configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), GTestError> {
        fs::write(path, self.json_dump()?).map_err(|e| GTestError::UnableToWrite(e.to_string()))
    }

    /// Dump the configuration as a json object.
    fn json_dump(&self) -> Result<String, GTestError> {
        serde_json::to_string(self).map_err(|e| GTestError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string.
    fn from_json(json_str: &str) -> Result<Self, GTestError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| GTestError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, GTestError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let json_str = fs::read_to_string(path).map_err(|e| GTestError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for GTestConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = GTestConfig::default();
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.hypothesis, Hypothesis::Simple);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json() {
        let config = GTestConfig {
            alpha: 0.01,
            hypothesis: Hypothesis::Intrinsic,
            parallel: true,
        };
        let json = config.json_dump().unwrap();
        assert_eq!(GTestConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_defaults_on_missing_fields() {
        let config = GTestConfig::from_json(r#"{"hypothesis": "Intrinsic"}"#).unwrap();
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.hypothesis, Hypothesis::Intrinsic);
        assert!(matches!(
            GTestConfig::from_json(r#"{"hypothesis": "Composite"}"#),
            Err(GTestError::UnableToRead(_))
        ));
    }

    #[test]
    fn test_config_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("gtest.json");
        let config = GTestConfig {
            alpha: 0.1,
            ..Default::default()
        };
        config.save_config(&file_path).unwrap();
        assert_eq!(GTestConfig::load_config(&file_path).unwrap(), config);
        assert!(matches!(
            GTestConfig::load_config(dir.path().join("missing.json")),
            Err(GTestError::UnableToRead(_))
        ));
    }

    #[test]
    fn test_config_goodness_of_fit() {
        let config = GTestConfig {
            hypothesis: Hypothesis::Intrinsic,
            ..Default::default()
        };
        let (result, reject) = config.goodness_of_fit(&[0.167, 0.483, 0.350], &[14, 21, 25]).unwrap();
        assert_eq!(result.degrees_of_freedom, 1);
        assert!(reject);

        let (result, reject) = GTestConfig::default()
            .goodness_of_fit(&[0.167, 0.483, 0.350], &[14, 21, 25])
            .unwrap();
        assert_eq!(result.degrees_of_freedom, 2);
        assert!(!reject);
    }

    #[test]
    fn test_config_independence() {
        let config = GTestConfig {
            alpha: 0.0002,
            ..Default::default()
        };
        let table = vec![vec![40, 22, 43], vec![91, 21, 28], vec![60, 10, 22]];
        let (result, reject) = config.independence(&table).unwrap();
        assert!((result.statistic - 22.860523581).abs() < 1e-9);
        assert!(reject);
        assert_eq!(config.significant(&[table]).unwrap(), vec![0]);
    }

    #[test]
    fn test_config_bad_alpha() {
        let config = GTestConfig {
            alpha: 1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(GTestError::OutOfRangeSignificance(1.0)));
        assert!(config.independence(&[vec![1, 2], vec![3, 4]]).is_err());
    }
}
