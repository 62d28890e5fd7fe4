//! Semantic unit types for type-safe fire behavior quantities
//!
//! The spread engine works internally in US customary units (feet, feet per
//! minute, pounds per square foot, Btu). These newtypes keep user-facing values
//! from being mixed up at the API boundary, e.g. a midflame wind in mi/h passed
//! where a spread rate in ft/min is expected.
//!
//! # Design Philosophy
//! - All quantities are f64; the regression suite compares to six decimals
//! - `Deref` to the raw f64 for arithmetic inside the physics modules
//! - Total ordering via `total_cmp` (NaN sorts above all values)
//! - Validated `const fn new` constructors, serde support
//!
//! # Usage
//! ```
//! use behave_surface_core::core_types::units::{ChainsPerHour, FeetPerMinute, MilesPerHour};
//!
//! let rate = FeetPerMinute::new(66.0);
//! let chains: ChainsPerHour = rate.into();
//! assert!((*chains - 60.0).abs() < 1e-12);
//!
//! let wind = MilesPerHour::new(5.0);
//! assert!((*wind.to_feet_per_minute() - 440.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Feet in one surveyor's chain
pub const FEET_PER_CHAIN: f64 = 66.0;

/// Feet per minute in one mile per hour (5280 / 60)
pub const FEET_PER_MINUTE_PER_MPH: f64 = 88.0;

/// Square feet in one acre
pub const SQUARE_FEET_PER_ACRE: f64 = 43560.0;

/// Pounds per square foot in one ton per acre (2000 / 43560)
pub const LB_PER_SQ_FT_PER_TON_PER_ACRE: f64 = 2000.0 / SQUARE_FEET_PER_ACRE;

/// Ratio between a 20-ft and a 10-m open wind speed
pub const TEN_METER_TO_TWENTY_FOOT: f64 = 1.15;

// ============================================================================
// SHARED TRAIT IMPLEMENTATIONS
// ============================================================================

/// Ordering, deref and conversion boilerplate shared by every unit type
macro_rules! unit_common {
    ($name:ident, $suffix:literal) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut f64 {
                &mut self.0
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.6} {}", self.0, $suffix)
            }
        }
    };
}

// ============================================================================
// SPEED TYPES
// ============================================================================

/// Spread rate in feet per minute (internal base unit for rates)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FeetPerMinute(f64);

unit_common!(FeetPerMinute, "ft/min");

impl FeetPerMinute {
    /// Zero rate
    pub const ZERO: FeetPerMinute = FeetPerMinute(0.0);

    /// Create a rate. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "FeetPerMinute::new: rate must be non-negative");
        FeetPerMinute(value)
    }

    /// Wrap a computed value without validation (physics outputs are already guarded)
    #[inline]
    pub(crate) const fn from_raw(value: f64) -> Self {
        FeetPerMinute(value)
    }

    /// Convert to chains per hour (1 chain = 66 ft)
    #[inline]
    #[must_use]
    pub fn to_chains_per_hour(self) -> ChainsPerHour {
        ChainsPerHour(self.0 * 60.0 / FEET_PER_CHAIN)
    }

    /// Convert to miles per hour
    #[inline]
    #[must_use]
    pub fn to_miles_per_hour(self) -> MilesPerHour {
        MilesPerHour(self.0 / FEET_PER_MINUTE_PER_MPH)
    }
}

impl From<FeetPerMinute> for ChainsPerHour {
    fn from(v: FeetPerMinute) -> ChainsPerHour {
        v.to_chains_per_hour()
    }
}

/// Spread rate in chains per hour, the customary reporting unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ChainsPerHour(f64);

unit_common!(ChainsPerHour, "ch/h");

impl ChainsPerHour {
    /// Create a rate. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "ChainsPerHour::new: rate must be non-negative");
        ChainsPerHour(value)
    }

    /// Convert to feet per minute
    #[inline]
    #[must_use]
    pub fn to_feet_per_minute(self) -> FeetPerMinute {
        FeetPerMinute(self.0 * FEET_PER_CHAIN / 60.0)
    }
}

/// Wind speed in miles per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MilesPerHour(f64);

unit_common!(MilesPerHour, "mi/h");

impl MilesPerHour {
    /// Calm
    pub const ZERO: MilesPerHour = MilesPerHour(0.0);

    /// Create a wind speed. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "MilesPerHour::new: speed must be non-negative");
        MilesPerHour(value)
    }

    /// Convert to feet per minute (1 mi/h = 88 ft/min)
    #[inline]
    #[must_use]
    pub fn to_feet_per_minute(self) -> FeetPerMinute {
        FeetPerMinute(self.0 * FEET_PER_MINUTE_PER_MPH)
    }
}

// ============================================================================
// LENGTH / ANGLE / RATIO TYPES
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Feet(f64);

unit_common!(Feet, "ft");

impl Feet {
    /// Zero length
    pub const ZERO: Feet = Feet(0.0);

    /// Create a length. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Feet::new: length must be non-negative");
        Feet(value)
    }

    #[inline]
    pub(crate) const fn from_raw(value: f64) -> Self {
        Feet(value)
    }

    /// Convert to chains
    #[inline]
    #[must_use]
    pub fn to_chains(self) -> f64 {
        self.0 / FEET_PER_CHAIN
    }
}

/// Angle in degrees (directions are clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

unit_common!(Degrees, "deg");

impl Degrees {
    /// Create an angle (any finite value)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Slope steepness in degrees from a percent grade (rise over run × 100)
    #[inline]
    #[must_use]
    pub fn from_percent_slope(percent: f64) -> Self {
        Degrees((percent / 100.0).atan().to_degrees())
    }

    /// Wrap a compass direction into [0, 360]
    ///
    /// Values that are exactly 360 are left alone; only values strictly above
    /// 360 are reduced.
    #[must_use]
    pub fn normalized_direction(self) -> Self {
        let mut value = self.0;
        if value < 0.0 {
            value += 360.0;
        }
        while value > 360.0 {
            value -= 360.0;
        }
        Degrees(value)
    }
}

/// Dimensionless fraction in [0, 1] (canopy cover, crown ratio, coverage)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fraction(f64);

unit_common!(Fraction, "");

impl Fraction {
    /// Nothing
    pub const ZERO: Fraction = Fraction(0.0);
    /// Everything
    pub const ONE: Fraction = Fraction(1.0);

    /// Create a fraction. Asserts 0 <= value <= 1.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Fraction::new: value must be within [0, 1]");
        assert!(value <= 1.0, "Fraction::new: value must be within [0, 1]");
        Fraction(value)
    }

    /// Create a fraction from a percentage, clamping into [0, 1]
    #[inline]
    #[must_use]
    pub fn from_percent_clamped(percent: f64) -> Self {
        Fraction((percent / 100.0).clamp(0.0, 1.0))
    }

    /// Clamp an arbitrary value into [0, 1]
    #[inline]
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        Fraction(value.clamp(0.0, 1.0))
    }
}

/// Fuel moisture content as a fraction of oven-dry weight (may exceed 1 for live fuel)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MoistureContent(f64);

unit_common!(MoistureContent, "");

impl MoistureContent {
    /// Create a moisture fraction. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "MoistureContent::new: moisture must be non-negative"
        );
        MoistureContent(value)
    }

    /// Create from percent (6.0 → 0.06)
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_conversions() {
        let rate = FeetPerMinute::new(11.0);
        assert!((*rate.to_chains_per_hour() - 10.0).abs() < 1e-12);
        assert!((*rate.to_chains_per_hour().to_feet_per_minute() - 11.0).abs() < 1e-12);
        assert!((*FeetPerMinute::new(176.0).to_miles_per_hour() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_slope_to_degrees() {
        assert!((*Degrees::from_percent_slope(100.0) - 45.0).abs() < 1e-12);
        assert_eq!(*Degrees::from_percent_slope(0.0), 0.0);
    }

    #[test]
    fn test_direction_normalization() {
        assert_eq!(*Degrees::new(-90.0).normalized_direction(), 270.0);
        assert_eq!(*Degrees::new(725.0).normalized_direction(), 5.0);
        assert_eq!(*Degrees::new(360.0).normalized_direction(), 360.0);
    }

    #[test]
    fn test_total_ordering() {
        let a = Feet::new(1.0);
        let b = Feet::new(2.0);
        assert_eq!(a.max(b), b);
        assert!(Fraction::ZERO < Fraction::ONE);
    }

    #[test]
    #[should_panic(expected = "Fraction::new")]
    fn test_fraction_rejects_out_of_range() {
        let _ = Fraction::new(1.5);
    }

    #[test]
    fn test_fraction_clamping() {
        assert_eq!(*Fraction::from_percent_clamped(150.0), 1.0);
        assert_eq!(*Fraction::clamped(-0.2), 0.0);
        assert_eq!(*MoistureContent::from_percent(60.0), 0.6);
    }
}
