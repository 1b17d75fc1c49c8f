//! Gas budget policy
//!
//! Separates the fixed per-step safety ceiling (base limit, declared in
//! configuration or overridden per component) from the operator-supplied
//! scale factor passed on the command line. The effective limit is
//! recomputed for every deployment step; nothing is mutated in place.

use thiserror::Error;

/// Fallback per-step ceiling when neither the environment configuration nor
/// the component descriptor declares one.
pub const DEFAULT_BASE_GAS_LIMIT: u64 = 6_900_000;

/// Operator-supplied scale factor applied to every step's base gas limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasMultiplier(f64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GasError {
    #[error("invalid gas multiplier '{raw}' - must be a non-negative number")]
    InvalidMultiplier { raw: String },

    #[error("base gas limit must be positive")]
    ZeroBaseLimit,
}

impl GasMultiplier {
    /// Parse the optional `--gas-multiplier` argument. Absent means `1`.
    pub fn parse(raw: Option<&str>) -> Result<Self, GasError> {
        let Some(raw) = raw else {
            return Ok(Self(1.0));
        };
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| GasError::InvalidMultiplier {
                raw: raw.to_string(),
            })?;
        if !value.is_finite() || value < 0.0 {
            return Err(GasError::InvalidMultiplier {
                raw: raw.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0 == 1.0
    }
}

impl Default for GasMultiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

impl std::fmt::Display for GasMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effective resource ceiling for one deployment step.
///
/// The fractional part is truncated toward zero; the same rule applies to
/// every step so mixed-limit plans scale consistently.
pub fn effective_limit(base_limit: u64, multiplier: GasMultiplier) -> u64 {
    (base_limit as f64 * multiplier.value()) as u64
}
