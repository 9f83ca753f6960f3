//! Centralized configuration values shared across the OOML modeling pipeline.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used when validating geometry dimensions.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Default radial segment count for cylinders and cones when the caller does
/// not request an explicit tessellation resolution.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 20;

/// Fixed latitude/longitude segment count for sphere tessellation.
///
/// Spheres always render at this resolution; the DSL does not expose it as a
/// parameter.
///
/// # Examples
/// ```
/// use config::constants::SPHERE_SEGMENTS;
/// assert!(SPHERE_SEGMENTS >= 12);
/// ```
pub const SPHERE_SEGMENTS: u32 = 20;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates embedding the DSL.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into dimension validation.
    pub tolerance: f64,
    /// Default segment count for primitives that require angular subdivision.
    pub default_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default segments.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// ```
    pub fn new(tolerance: f64, default_segments: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_segments < 3 {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        Ok(Self {
            tolerance,
            default_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "default_segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
