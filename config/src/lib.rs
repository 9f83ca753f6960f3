//! # Config Crate
//!
//! Centralized configuration constants for the OOML modeling DSL.
//! Tessellation defaults and numeric tolerances are defined once here so the
//! modeling crates stay declarative and free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, EPSILON_TOLERANCE};
//!
//! let value: f64 = 1.0e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//! assert!(DEFAULT_SEGMENTS >= 3);
//! ```

pub mod constants;
