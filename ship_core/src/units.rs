//! # Unit Types
//!
//! Newtype wrappers for the volume units used by the shipping calculation.
//! Dimensions are entered in inches, freight is quoted in cubic meters (CBM).
//!
//! ## Example
//!
//! ```rust
//! use ship_core::units::{CubicInches, CubicMeters, Inches};
//!
//! let volume = CubicInches::from_dimensions(Inches(10.0), Inches(25.0), Inches(25.0));
//! assert_eq!(volume.0, 6250.0);
//!
//! let cbm: CubicMeters = volume.into();
//! assert!((cbm.0 - 0.10242).abs() < 1e-5);
//! ```

use serde::{Deserialize, Serialize};

/// Cubic inches in one cubic meter, the freight industry's rounded figure.
pub const CUBIC_INCHES_PER_CBM: f64 = 61023.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicInches(pub f64);

/// Volume in cubic meters (CBM)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl CubicInches {
    /// Volume of a box with the given edge lengths
    pub fn from_dimensions(length: Inches, width: Inches, height: Inches) -> Self {
        CubicInches(length.0 * width.0 * height.0)
    }
}

impl From<CubicInches> for CubicMeters {
    fn from(cu_in: CubicInches) -> Self {
        CubicMeters(cu_in.0 / CUBIC_INCHES_PER_CBM)
    }
}

impl CubicMeters {
    pub fn value(self) -> f64 {
        self.0
    }
}
