//! Wind adjustment factor (20-ft wind to midflame wind)
//!
//! Sheltered and unsheltered midflame wind reduction from canopy geometry or
//! from fuelbed depth alone.
//!
//! # References
//! - Albini, F.A., Baughman, R.G. (1979). "Estimating windspeeds for predicting wildland fire
//!   behavior." USDA Forest Service Research Paper INT-221.
//! - Andrews, P.L. (2012). "Modeling wind adjustment factor and midflame wind speed for
//!   Rothermel's surface fire spread model." USDA Forest Service RMRS-GTR-266.

use crate::core_types::surface_inputs::{
    Canopy, WindAdjustmentFactorCalculationMethod, WindAdjustmentFactorShelterMethod,
};
use serde::{Deserialize, Serialize};

/// Crown fill portion below which a canopy no longer shelters the fuelbed
const MIN_SHELTERING_CROWN_FRACTION: f64 = 0.05;
/// Canopies shorter than this (ft) are treated as open
const MIN_SHELTERING_CANOPY_HEIGHT: f64 = 6.0;

/// Wind adjustment factor with the geometry that produced it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindAdjustment {
    pub factor: f64,                // 0-1
    pub canopy_crown_fraction: f64, // fraction of canopy volume filled by crowns
    pub shelter_method: WindAdjustmentFactorShelterMethod,
}

/// Canopy crown fraction for the selected method
///
/// # Formula
/// ```text
/// UseCrownRatio:     f = CR · CC / 3
/// DontUseCrownRatio: f = (100 · CC) · π / 1200
/// ```
pub fn canopy_crown_fraction(
    canopy: &Canopy,
    method: WindAdjustmentFactorCalculationMethod,
) -> f64 {
    let cover = (*canopy.cover).clamp(0.0, 1.0);
    match method {
        WindAdjustmentFactorCalculationMethod::UseCrownRatio => {
            (*canopy.crown_ratio).clamp(0.0, 1.0) * cover / 3.0
        }
        // Cover is expressed in percent in this form of the equation
        WindAdjustmentFactorCalculationMethod::DontUseCrownRatio => {
            cover * 100.0 * std::f64::consts::PI / 1200.0
        }
    }
}

/// Calculate the wind adjustment factor
///
/// # Formula
/// ```text
/// unsheltered: WAF = 1.83 / ln((20 + 0.36·δ) / (0.13·δ))
/// sheltered:   WAF = 0.555 / (√(f·H) · ln((20 + 0.36·H) / (0.13·H)))
/// ```
///
/// Where:
/// - **δ** = Fuelbed depth (ft)
/// - **f** = Canopy crown fraction
/// - **H** = Canopy height (ft)
///
/// A fuelbed with no depth gets a factor of 1. The result is clamped to [0, 1].
///
/// # Arguments
/// * `canopy` - Cover, height and crown ratio of the overstory
/// * `method` - Whether crown ratio enters the crown fraction
/// * `fuelbed_depth` - Surface fuelbed depth (ft)
pub fn calculate_wind_adjustment_factor(
    canopy: &Canopy,
    method: WindAdjustmentFactorCalculationMethod,
    fuelbed_depth: f64,
) -> WindAdjustment {
    let cover = (*canopy.cover).clamp(0.0, 1.0);
    let height = *canopy.height;
    let crown_fraction = canopy_crown_fraction(canopy, method);

    let is_open = cover < 1.0e-7
        || crown_fraction < MIN_SHELTERING_CROWN_FRACTION
        || height < MIN_SHELTERING_CANOPY_HEIGHT;

    let (factor, shelter_method) = if is_open {
        let factor = if fuelbed_depth > 1.0e-7 {
            1.83 / ((20.0 + 0.36 * fuelbed_depth) / (0.13 * fuelbed_depth)).ln()
        } else {
            1.0
        };
        (factor, WindAdjustmentFactorShelterMethod::Unsheltered)
    } else {
        let factor = 0.555
            / ((crown_fraction * height).sqrt() * ((20.0 + 0.36 * height) / (0.13 * height)).ln());
        (factor, WindAdjustmentFactorShelterMethod::Sheltered)
    };

    WindAdjustment {
        factor: factor.clamp(0.0, 1.0),
        canopy_crown_fraction: crown_fraction,
        shelter_method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Feet, Fraction};
    use approx::assert_relative_eq;

    fn canopy(cover: f64, height: f64, crown_ratio: f64) -> Canopy {
        Canopy {
            cover: Fraction::new(cover),
            height: Feet::new(height),
            crown_ratio: Fraction::new(crown_ratio),
        }
    }

    #[test]
    fn test_sheltered_with_crown_ratio() {
        let waf = calculate_wind_adjustment_factor(
            &canopy(0.5, 30.0, 0.5),
            WindAdjustmentFactorCalculationMethod::UseCrownRatio,
            2.1,
        );
        let fraction: f64 = 0.5 * 0.5 / 3.0;
        let height: f64 = 30.0;
        let expected =
            0.555 / ((fraction * height).sqrt() * ((20.0 + 0.36 * height) / (0.13 * height)).ln());
        assert_eq!(waf.shelter_method, WindAdjustmentFactorShelterMethod::Sheltered);
        assert_relative_eq!(waf.factor, expected, epsilon = 1e-12);
        assert_relative_eq!(waf.canopy_crown_fraction, fraction);
    }

    #[test]
    fn test_open_canopy_uses_fuelbed_depth() {
        let waf = calculate_wind_adjustment_factor(
            &canopy(0.0, 30.0, 0.5),
            WindAdjustmentFactorCalculationMethod::UseCrownRatio,
            1.0,
        );
        assert_eq!(waf.shelter_method, WindAdjustmentFactorShelterMethod::Unsheltered);
        assert_relative_eq!(waf.factor, 1.83 / (20.36_f64 / 0.13).ln(), epsilon = 1e-12);

        // Short canopy is open even when dense
        let short = calculate_wind_adjustment_factor(
            &canopy(1.0, 5.0, 1.0),
            WindAdjustmentFactorCalculationMethod::UseCrownRatio,
            1.0,
        );
        assert_eq!(short.shelter_method, WindAdjustmentFactorShelterMethod::Unsheltered);
    }

    #[test]
    fn test_zero_depth_gives_unit_factor() {
        let waf = calculate_wind_adjustment_factor(
            &canopy(0.0, 0.0, 0.0),
            WindAdjustmentFactorCalculationMethod::UseCrownRatio,
            0.0,
        );
        assert_eq!(waf.factor, 1.0);
    }

    #[test]
    fn test_without_crown_ratio_treats_cover_as_percent() {
        let c = canopy(0.5, 40.0, 0.0);
        let fraction =
            canopy_crown_fraction(&c, WindAdjustmentFactorCalculationMethod::DontUseCrownRatio);
        assert_relative_eq!(fraction, 50.0 * std::f64::consts::PI / 1200.0);
        let waf = calculate_wind_adjustment_factor(
            &c,
            WindAdjustmentFactorCalculationMethod::DontUseCrownRatio,
            1.0,
        );
        assert_eq!(waf.shelter_method, WindAdjustmentFactorShelterMethod::Sheltered);
        assert!(waf.factor > 0.0 && waf.factor <= 1.0);
    }
}
