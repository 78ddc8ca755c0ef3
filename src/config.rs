//! Tunables of the exhaustive lineup searches.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Longest lineup admitted for exhaustive search; `8!` orderings is already 40,320.
pub const DEFAULT_MAX_LINEUP_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Absolute tolerance within which two schedule scores are considered tied.
    pub tolerance: f64,

    /// Number of tied worst-case opponent responses retained by a minimax search.
    pub adversaries: usize,

    /// Upper bound on the lineup length of any permutation search.
    pub max_lineup_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            adversaries: 3,
            max_lineup_len: DEFAULT_MAX_LINEUP_LEN,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(InvalidInput::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.adversaries == 0 {
            return Err(InvalidInput::Config(
                "at least one adversary must be retained".into(),
            ));
        }
        Ok(())
    }

    /// Rejects a permutation search over `len` players if it exceeds [Self::max_lineup_len].
    pub fn preflight(&self, len: usize) -> Result<(), InvalidInput> {
        if len > self.max_lineup_len {
            return Err(InvalidInput::SearchTooLarge {
                len,
                max_len: self.max_lineup_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"adversaries": 5}"#).unwrap();
        assert_eq!(
            SearchConfig {
                adversaries: 5,
                ..SearchConfig::default()
            },
            config
        );
    }

    #[test]
    fn invalid_tolerance() {
        let config = SearchConfig {
            tolerance: -1e-6,
            ..SearchConfig::default()
        };
        assert_eq!(
            "invalid search config: tolerance must be a non-negative number, got -0.000001",
            config.validate().unwrap_err().to_string()
        );
        let config = SearchConfig {
            tolerance: f64::NAN,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn no_adversaries() {
        let config = SearchConfig {
            adversaries: 0,
            ..SearchConfig::default()
        };
        assert_eq!(
            InvalidInput::Config("at least one adversary must be retained".into()),
            config.validate().unwrap_err()
        );
    }

    #[test]
    fn preflight() {
        let config = SearchConfig::default();
        assert!(config.preflight(8).is_ok());
        assert_eq!(
            InvalidInput::SearchTooLarge { len: 9, max_len: 8 },
            config.preflight(9).unwrap_err()
        );
    }
}
