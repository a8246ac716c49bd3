//! Centralized configuration values shared across the mesh generation crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons in tests and geometry checks.
///
/// The generators themselves never snap or merge vertices; this tolerance is
/// only used when comparing computed coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of sides around a revolved solid.
///
/// # Examples
/// ```
/// use config::constants::MIN_SIDES;
/// assert_eq!(MIN_SIDES, 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Minimum number of axial stacks of a revolved solid.
///
/// Two stacks give the two poles plus a single ring.
///
/// # Examples
/// ```
/// use config::constants::MIN_STACKS;
/// assert_eq!(MIN_STACKS, 2);
/// ```
pub const MIN_STACKS: u32 = 2;

/// Minimum number of points in an extruded outline.
///
/// # Examples
/// ```
/// use config::constants::MIN_OUTLINE_POINTS;
/// assert_eq!(MIN_OUTLINE_POINTS, 3);
/// ```
pub const MIN_OUTLINE_POINTS: usize = 3;

// =============================================================================
// LEVEL OF DETAIL
// =============================================================================

/// Smallest level of detail that still yields a closed revolved solid.
///
/// A level of detail maps to `sides = stacks = lod / 2`, so 6 gives triangular
/// cross sections with three stacks.
///
/// # Examples
/// ```
/// use config::constants::{MIN_RECOMMENDED_LOD, MIN_SIDES};
/// assert!(MIN_RECOMMENDED_LOD / 2 >= MIN_SIDES);
/// ```
pub const MIN_RECOMMENDED_LOD: u32 = 6;

/// Coarse tessellation, suited for previews.
pub const LOD_LOW: u32 = 24;

/// Balanced tessellation used when the host does not pick one.
pub const LOD_NORMAL: u32 = 60;

/// Dense tessellation for final exports.
pub const LOD_HIGH: u32 = 100;

/// Default level of detail.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_LOD, LOD_NORMAL};
/// assert_eq!(DEFAULT_LOD, LOD_NORMAL);
/// ```
pub const DEFAULT_LOD: u32 = LOD_NORMAL;

// =============================================================================
// MASS OBJECT SHAPE
// =============================================================================

/// Fraction of `min(length, 2 * radius)` used as the axial height of the
/// rounded ends of a mass object.
///
/// # Examples
/// ```
/// use config::constants::MASS_ARC_HEIGHT_FACTOR;
/// // Both rounded ends must fit inside the object.
/// assert!(MASS_ARC_HEIGHT_FACTOR < 0.5);
/// ```
pub const MASS_ARC_HEIGHT_FACTOR: f64 = 0.35;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry checks.
    pub tolerance: f64,
    /// Level of detail used when the host does not supply one.
    pub level_of_detail: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and level of detail.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 40).expect("valid config");
    /// assert_eq!(cfg.level_of_detail, 40);
    /// ```
    pub fn new(tolerance: f64, level_of_detail: u32) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if level_of_detail < MIN_RECOMMENDED_LOD {
            return Err(ConfigError::InvalidLevelOfDetail(level_of_detail));
        }
        Ok(Self {
            tolerance,
            level_of_detail,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            level_of_detail: DEFAULT_LOD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the level of detail is too coarse to close a solid.
    InvalidLevelOfDetail(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidLevelOfDetail(value) => {
                write!(f, "level_of_detail must be >= {MIN_RECOMMENDED_LOD}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
