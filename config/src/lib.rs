//! # Config Crate
//!
//! Centralized configuration constants for the mesh generation pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_LOD, EPSILON, MIN_SIDES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Level of detail maps to sides and stacks
//! let sides = DEFAULT_LOD / 2;
//! assert!(sides >= MIN_SIDES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Platform Values**: Nothing depends on the host application
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
