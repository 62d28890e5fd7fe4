//! Surface fire spread (Rothermel 1972 with Albini 1976 extensions)
//!
//! Runs the full surface pipeline for one fuelbed: reaction intensity,
//! midflame wind, wind and slope factors, the wind/slope vector sum that gives
//! the direction and magnitude of maximum spread, the effective wind speed
//! limit, elliptical shape and the intensity outputs.
//!
//! All rates are ft/min and the direction of maximum spread is measured
//! clockwise from upslope until it is converted for output.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.
//! - Andrews, P.L. (2018). "The Rothermel surface fire spread model and associated developments:
//!   A comprehensive explanation." USDA Forest Service RMRS-GTR-371.
//! - Byram, G.M. (1959). "Combustion of forest fuels." In: Forest Fire: Control and Use.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::fuel_model::FuelModels;
use crate::core_types::surface_inputs::{
    SurfaceInputs, WindAndSpreadOrientationMode, WindHeightInputMode,
};
use crate::core_types::units::{FEET_PER_MINUTE_PER_MPH, TEN_METER_TO_TWENTY_FOOT};
use crate::physics::fuelbed_intermediates::calculate_fuelbed_intermediates;
use crate::physics::reaction_intensity::{calculate_reaction_intensity, ReactionIntensity};
use crate::physics::wind_adjustment_factor::{calculate_wind_adjustment_factor, WindAdjustment};

/// Azimuths within this many degrees of upslope are reported as exactly 0.
/// Kept for output parity with BehavePlus.
pub const AZIMUTH_SNAP_TOLERANCE_DEGREES: f64 = 0.5;

/// Directions of interest closer than this to the direction of maximum spread
/// use the maximum rate unchanged. Kept for output parity with BehavePlus.
pub const DIRECTION_OF_INTEREST_TOLERANCE_DEGREES: f64 = 0.1;

/// Empirical wind factor coefficients, all functions of σ
///
/// # Formula
/// ```text
/// C = 7.47 · exp(-0.133 · σ^0.55)
/// B = 0.02526 · σ^0.54
/// E = 0.715 · exp(-0.000359 · σ)
/// φ_w = C · U^B · (β/β_op)^-E
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindCoefficients {
    pub c: f64,
    pub b: f64,
    pub e: f64,
}

impl WindCoefficients {
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma < 1.0e-7 {
            return Self::default();
        }
        Self {
            c: 7.47 * (-0.133 * sigma.powf(0.55)).exp(),
            b: 0.02526 * sigma.powf(0.54),
            e: 0.715 * (-0.000359 * sigma).exp(),
        }
    }

    /// Wind factor φ_w for a midflame wind (ft/min)
    pub fn wind_factor(&self, midflame_wind_speed: f64, relative_packing_ratio: f64) -> f64 {
        if midflame_wind_speed < 1.0e-7 || relative_packing_ratio < 1.0e-7 {
            return 0.0;
        }
        midflame_wind_speed.powf(self.b) * self.c * relative_packing_ratio.powf(-self.e)
    }

    /// Wind speed (ft/min) that would produce the given wind factor on its own
    pub fn wind_speed_for_factor(&self, wind_factor: f64, relative_packing_ratio: f64) -> f64 {
        if wind_factor <= 0.0 || self.b < 1.0e-7 || self.c < 1.0e-7 {
            return 0.0;
        }
        (wind_factor * relative_packing_ratio.powf(self.e) / self.c).powf(1.0 / self.b)
    }
}

/// Slope factor φ_s
///
/// # Formula
/// ```text
/// φ_s = 5.275 · β^-0.3 · tan²(θ)
/// ```
///
/// Where:
/// - **β** = Packing ratio
/// - **θ** = Slope angle
pub fn calculate_slope_factor(packing_ratio: f64, slope_radians: f64) -> f64 {
    if packing_ratio < 1.0e-7 {
        return 0.0;
    }
    5.275 * packing_ratio.powf(-0.3) * slope_radians.tan().powi(2)
}

/// Flaming residence time (min), Anderson (1969): t_r = 384 / σ
pub fn calculate_residence_time(sigma: f64) -> f64 {
    if sigma < 1.0e-7 {
        0.0
    } else {
        384.0 / sigma
    }
}

/// Length-to-width ratio from effective wind speed (mph)
///
/// # Formula
/// ```text
/// L/W = 1 + 0.25 · U_eff
/// ```
pub fn calculate_length_to_width_ratio(effective_wind_speed_mph: f64) -> f64 {
    if effective_wind_speed_mph > 1.0e-7 {
        1.0 + 0.25 * effective_wind_speed_mph
    } else {
        1.0
    }
}

/// Ellipse eccentricity e = √(L² - 1) / L
pub fn calculate_eccentricity(length_to_width_ratio: f64) -> f64 {
    let x = length_to_width_ratio * length_to_width_ratio - 1.0;
    if x > 0.0 {
        x.sqrt() / length_to_width_ratio
    } else {
        0.0
    }
}

/// Backing rate of an elliptical fire
///
/// # Formula
/// ```text
/// R_back = R_head · (1 - e) / (1 + e)
/// ```
pub fn calculate_backing_spread_rate(forward_spread_rate: f64, eccentricity: f64) -> f64 {
    forward_spread_rate * (1.0 - eccentricity) / (1.0 + eccentricity)
}

/// Byram fireline intensity (Btu/ft/s) from a rate in ft/min
///
/// # Formula
/// ```text
/// I_B = R · I_R · t_r / 60
/// ```
pub fn calculate_fireline_intensity(
    spread_rate: f64,
    reaction_intensity: f64,
    residence_time: f64,
) -> f64 {
    spread_rate * reaction_intensity * residence_time / 60.0
}

/// Byram flame length (ft): L_f = 0.45 · I_B^0.46
pub fn calculate_flame_length(fireline_intensity: f64) -> f64 {
    if fireline_intensity < 1.0e-7 {
        0.0
    } else {
        0.45 * fireline_intensity.powf(0.46)
    }
}

/// Spread rate along an arbitrary direction of an elliptical fire
///
/// Both directions are measured in the same frame. The angle between them
/// is folded into [0, 180] before use.
///
/// # Formula
/// ```text
/// R(ψ) = R_head · (1 - e) / (1 - e · cos ψ)
/// ```
///
/// # Arguments
/// * `max_spread_rate` - Head fire rate (ft/min)
/// * `eccentricity` - Fire ellipse eccentricity
/// * `direction_of_max_spread` - Heading of maximum spread (degrees)
/// * `direction_of_interest` - Heading to evaluate (degrees)
pub fn spread_rate_at_vector(
    max_spread_rate: f64,
    eccentricity: f64,
    direction_of_max_spread: f64,
    direction_of_interest: f64,
) -> f64 {
    if max_spread_rate == 0.0 {
        return 0.0;
    }
    let mut beta = (direction_of_max_spread - direction_of_interest).abs();
    if beta > 180.0 {
        beta = 360.0 - beta;
    }
    if beta.abs() > DIRECTION_OF_INTEREST_TOLERANCE_DEGREES {
        max_spread_rate * (1.0 - eccentricity) / (1.0 - eccentricity * beta.to_radians().cos())
    } else {
        max_spread_rate
    }
}

/// Direction clockwise from upslope for a direction given in the run's frame
///
/// North-referenced directions are rotated by the upslope heading
/// (aspect + 180).
pub fn direction_from_upslope(
    direction: f64,
    orientation_mode: WindAndSpreadOrientationMode,
    aspect: f64,
) -> f64 {
    match orientation_mode {
        WindAndSpreadOrientationMode::RelativeToUpslope => direction,
        WindAndSpreadOrientationMode::RelativeToNorth => direction - (aspect + 180.0),
    }
}

/// Outcome of one surface spread calculation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpreadResult {
    pub fuel_model_number: i32,
    pub orientation_mode: WindAndSpreadOrientationMode,
    pub aspect: f64, // degrees

    // Fuelbed
    pub fuelbed_depth: f64, // ft
    pub sigma: f64,         // ft²/ft³
    pub packing_ratio: f64,
    pub relative_packing_ratio: f64,
    pub heat_sink: f64, // Btu/ft³
    pub propagating_flux: f64,
    pub moisture_of_extinction_dead: f64,
    pub moisture_of_extinction_live: f64,
    pub reaction_intensity: ReactionIntensity,

    // Wind and slope
    pub wind_adjustment: WindAdjustment,
    pub midflame_wind_speed: f64, // ft/min
    pub wind_coefficients: WindCoefficients,
    pub wind_factor: f64,
    pub slope_factor: f64,
    pub wind_speed_limit: f64,     // ft/min
    pub effective_wind_speed: f64, // ft/min
    pub is_wind_limit_exceeded: bool,

    // Spread
    pub no_wind_no_slope_spread_rate: f64, // ft/min
    /// Head fire rate in the direction of maximum spread (ft/min)
    pub max_spread_rate: f64,
    /// Rate in the direction of interest, or the head rate when none was given (ft/min)
    pub spread_rate: f64,
    pub backing_spread_rate: f64, // ft/min
    /// Clockwise from upslope (degrees)
    pub direction_of_max_spread_from_upslope: f64,
    /// In the run's orientation frame (degrees)
    pub direction_of_max_spread: f64,
    pub direction_of_interest: Option<f64>,

    // Shape and intensity
    pub length_to_width_ratio: f64,
    pub eccentricity: f64,
    pub residence_time: f64,      // min
    pub heat_per_unit_area: f64,  // Btu/ft²
    pub fireline_intensity: f64,  // Btu/ft/s
    pub flame_length: f64,        // ft
}

impl SpreadResult {
    /// Rate toward a direction given in the run's orientation frame (ft/min)
    pub fn spread_rate_at_direction(&self, direction: f64) -> f64 {
        spread_rate_at_vector(
            self.max_spread_rate,
            self.eccentricity,
            self.direction_of_max_spread_from_upslope,
            direction_from_upslope(direction, self.orientation_mode, self.aspect),
        )
    }
}

/// Midflame wind (ft/min) and the wind adjustment that produced it
fn calculate_midflame_wind_speed(
    inputs: &SurfaceInputs,
    fuelbed_depth: f64,
) -> (f64, WindAdjustment) {
    let mut wind_adjustment = calculate_wind_adjustment_factor(
        &inputs.canopy,
        inputs.wind_adjustment_factor_method,
        fuelbed_depth,
    );
    let wind_speed = *inputs.wind.speed;

    let midflame_mph = match inputs.wind.height_mode {
        WindHeightInputMode::DirectMidflame => {
            wind_adjustment.factor = 1.0;
            wind_speed
        }
        WindHeightInputMode::TwentyFoot | WindHeightInputMode::TenMeter => {
            if let Some(factor) = inputs.user_provided_wind_adjustment_factor {
                wind_adjustment.factor = factor;
            }
            let twenty_foot = if inputs.wind.height_mode == WindHeightInputMode::TenMeter {
                wind_speed / TEN_METER_TO_TWENTY_FOOT
            } else {
                wind_speed
            };
            twenty_foot * wind_adjustment.factor
        }
    };

    (midflame_mph * FEET_PER_MINUTE_PER_MPH, wind_adjustment)
}

/// Run the surface spread pipeline for the inputs' fuel selection
///
/// # Arguments
/// * `fuel_models` - Fuel model catalog
/// * `inputs` - Fuel, moisture, wind, terrain and canopy inputs
/// * `direction_of_interest` - Heading to report the spread rate for, in the
///   inputs' orientation frame; `None` reports the head fire rate
///
/// # Returns
/// Every intermediate and output of the run. An undefined fuel model gives a
/// zero fuelbed and therefore zero rates.
pub fn calculate_forward_spread_rate(
    fuel_models: &FuelModels,
    inputs: &SurfaceInputs,
    direction_of_interest: Option<f64>,
) -> SpreadResult {
    let fuelbed = calculate_fuelbed_intermediates(fuel_models, inputs);
    let reaction_intensity = calculate_reaction_intensity(&fuelbed);
    let total_intensity = reaction_intensity.total;

    let (midflame_wind_speed, wind_adjustment) =
        calculate_midflame_wind_speed(inputs, fuelbed.depth);

    let coefficients = WindCoefficients::from_sigma(fuelbed.sigma);
    let wind_factor = coefficients.wind_factor(midflame_wind_speed, fuelbed.relative_packing_ratio);
    let mut slope_factor =
        calculate_slope_factor(fuelbed.packing_ratio, inputs.topography.slope.to_radians());

    let no_wind_no_slope_spread_rate = if fuelbed.heat_sink < 1.0e-7 {
        0.0
    } else {
        total_intensity * fuelbed.propagating_flux / fuelbed.heat_sink
    };

    let wind_speed_limit = 0.9 * total_intensity;
    if slope_factor > 0.0 && slope_factor > wind_speed_limit {
        slope_factor = wind_speed_limit;
    }

    // Wind and slope as vectors in the upslope frame
    let wind_direction = inputs.wind_direction_from_upslope().to_radians();
    let slope_rate = no_wind_no_slope_spread_rate * slope_factor;
    let wind_rate = no_wind_no_slope_spread_rate * wind_factor;
    let spread_vector = Vector2::new(
        slope_rate + wind_rate * wind_direction.cos(),
        wind_rate * wind_direction.sin(),
    );
    let mut max_spread_rate = no_wind_no_slope_spread_rate + spread_vector.norm();

    let mut azimuth = spread_vector.y.atan2(spread_vector.x).to_degrees();
    if azimuth < -1.0e-20 {
        azimuth += 360.0;
    }
    if azimuth.abs() < AZIMUTH_SNAP_TOLERANCE_DEGREES {
        azimuth = 0.0;
    }

    let mut effective_wind_speed = if no_wind_no_slope_spread_rate > 1.0e-7 {
        coefficients.wind_speed_for_factor(
            max_spread_rate / no_wind_no_slope_spread_rate - 1.0,
            fuelbed.relative_packing_ratio,
        )
    } else {
        0.0
    };

    let mut is_wind_limit_exceeded = false;
    if effective_wind_speed > wind_speed_limit {
        is_wind_limit_exceeded = true;
        effective_wind_speed = wind_speed_limit;
        max_spread_rate = no_wind_no_slope_spread_rate
            * (1.0 + coefficients.wind_factor(wind_speed_limit, fuelbed.relative_packing_ratio));
    }

    let residence_time = calculate_residence_time(fuelbed.sigma);
    let length_to_width_ratio =
        calculate_length_to_width_ratio(effective_wind_speed / FEET_PER_MINUTE_PER_MPH);
    let eccentricity = calculate_eccentricity(length_to_width_ratio);
    let backing_spread_rate = calculate_backing_spread_rate(max_spread_rate, eccentricity);

    let aspect = *inputs.topography.aspect;
    let spread_rate = direction_of_interest.map_or(max_spread_rate, |direction| {
        spread_rate_at_vector(
            max_spread_rate,
            eccentricity,
            azimuth,
            direction_from_upslope(direction, inputs.orientation_mode, aspect),
        )
    });

    let fireline_intensity =
        calculate_fireline_intensity(spread_rate, total_intensity, residence_time);
    let flame_length = calculate_flame_length(fireline_intensity);

    let mut direction_of_max_spread = azimuth;
    if inputs.is_relative_to_north() {
        direction_of_max_spread = (direction_of_max_spread + aspect + 180.0).rem_euclid(360.0);
    }

    debug!(
        fuel_model = inputs.fuel_model_number,
        spread_rate,
        direction_of_max_spread,
        is_wind_limit_exceeded,
        "surface spread calculated"
    );

    SpreadResult {
        fuel_model_number: inputs.fuel_model_number,
        orientation_mode: inputs.orientation_mode,
        aspect,
        fuelbed_depth: fuelbed.depth,
        sigma: fuelbed.sigma,
        packing_ratio: fuelbed.packing_ratio,
        relative_packing_ratio: fuelbed.relative_packing_ratio,
        heat_sink: fuelbed.heat_sink,
        propagating_flux: fuelbed.propagating_flux,
        moisture_of_extinction_dead: fuelbed.moisture_of_extinction_dead(),
        moisture_of_extinction_live: fuelbed.moisture_of_extinction_live(),
        reaction_intensity,
        wind_adjustment,
        midflame_wind_speed,
        wind_coefficients: coefficients,
        wind_factor,
        slope_factor,
        wind_speed_limit,
        effective_wind_speed,
        is_wind_limit_exceeded,
        no_wind_no_slope_spread_rate,
        max_spread_rate,
        spread_rate,
        backing_spread_rate,
        direction_of_max_spread_from_upslope: azimuth,
        direction_of_max_spread,
        direction_of_interest,
        length_to_width_ratio,
        eccentricity,
        residence_time,
        heat_per_unit_area: total_intensity * residence_time,
        fireline_intensity,
        flame_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::surface_inputs::{
        Canopy, FuelMoistures, SlopeInputMode, Topography, WindInputs,
    };
    use crate::core_types::units::{Degrees, Feet, Fraction, MilesPerHour};
    use approx::assert_relative_eq;

    fn gs4_inputs(wind_mph: f64, wind_direction: f64, slope_percent: f64) -> SurfaceInputs {
        let mut inputs = SurfaceInputs::default();
        inputs.update_surface_inputs(
            124,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
            WindInputs::new(
                MilesPerHour::new(wind_mph),
                Degrees::new(wind_direction),
                WindHeightInputMode::TwentyFoot,
            ),
            Topography::new(slope_percent, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy {
                cover: Fraction::new(0.5),
                height: Feet::new(30.0),
                crown_ratio: Fraction::new(0.5),
            },
        );
        inputs
    }

    #[test]
    fn test_wind_coefficients_round_trip() {
        let coefficients = WindCoefficients::from_sigma(1800.0);
        let phi = coefficients.wind_factor(440.0, 0.8);
        assert_relative_eq!(coefficients.wind_speed_for_factor(phi, 0.8), 440.0, epsilon = 1e-8);
        assert_eq!(WindCoefficients::from_sigma(0.0), WindCoefficients::default());
    }

    #[test]
    fn test_no_wind_no_slope_is_circular() {
        let catalog = FuelModels::new();
        let result = calculate_forward_spread_rate(&catalog, &gs4_inputs(0.0, 0.0, 0.0), None);
        assert!(result.no_wind_no_slope_spread_rate > 0.0);
        assert_eq!(result.max_spread_rate, result.no_wind_no_slope_spread_rate);
        assert_eq!(result.length_to_width_ratio, 1.0);
        assert_eq!(result.eccentricity, 0.0);
        assert_eq!(result.direction_of_max_spread, 0.0);
    }

    #[test]
    fn test_upslope_regression() {
        let catalog = FuelModels::new();
        let result = calculate_forward_spread_rate(&catalog, &gs4_inputs(5.0, 0.0, 30.0), None);
        assert_relative_eq!(result.spread_rate * 60.0 / 66.0, 8.876216, epsilon = 1e-6);
        assert_relative_eq!(result.fireline_intensity, 598.339039, epsilon = 1e-5);
        assert!(!result.is_wind_limit_exceeded);
    }

    #[test]
    fn test_azimuth_snaps_near_upslope() {
        let catalog = FuelModels::new();
        // A light cross wind on a steep slope leaves the heading a fraction of a degree off upslope
        let result = calculate_forward_spread_rate(&catalog, &gs4_inputs(0.1, 90.0, 100.0), None);
        assert!(result.wind_factor > 0.0);
        assert_eq!(result.direction_of_max_spread_from_upslope, 0.0);

        let stronger = calculate_forward_spread_rate(&catalog, &gs4_inputs(2.0, 90.0, 100.0), None);
        assert!(stronger.direction_of_max_spread_from_upslope > AZIMUTH_SNAP_TOLERANCE_DEGREES);
    }

    #[test]
    fn test_rate_at_vector_tolerance() {
        assert_eq!(spread_rate_at_vector(10.0, 0.8, 45.0, 45.05), 10.0);
        assert!(spread_rate_at_vector(10.0, 0.8, 45.0, 45.2) < 10.0);
        let backing = spread_rate_at_vector(10.0, 0.8, 45.0, 225.0);
        assert_relative_eq!(backing, calculate_backing_spread_rate(10.0, 0.8), epsilon = 1e-12);
        assert_eq!(spread_rate_at_vector(0.0, 0.8, 45.0, 90.0), 0.0);
    }

    #[test]
    fn test_flame_length_guard() {
        assert_eq!(calculate_flame_length(0.0), 0.0);
        assert_relative_eq!(calculate_flame_length(100.0), 0.45 * 100.0_f64.powf(0.46));
    }

    #[test]
    fn test_direct_midflame_ignores_canopy() {
        let catalog = FuelModels::new();
        let mut inputs = gs4_inputs(5.0, 0.0, 0.0);
        inputs.wind.height_mode = WindHeightInputMode::DirectMidflame;
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);
        assert_relative_eq!(result.midflame_wind_speed, 5.0 * 88.0);
        assert_eq!(result.wind_adjustment.factor, 1.0);
    }

    #[test]
    fn test_north_direction_normalized_for_any_aspect() {
        let catalog = FuelModels::new();
        for aspect in [-300.0, -181.0, 0.0, 95.0, 359.0, 725.0] {
            let mut inputs = gs4_inputs(5.0, 0.0, 30.0);
            inputs.orientation_mode = WindAndSpreadOrientationMode::RelativeToNorth;
            inputs.topography.aspect = Degrees::new(aspect);
            let result = calculate_forward_spread_rate(&catalog, &inputs, None);
            assert!(
                (0.0..360.0).contains(&result.direction_of_max_spread),
                "aspect {aspect}: direction {}",
                result.direction_of_max_spread
            );
        }

        // Upslope on a -300° aspect faces 240°
        let mut inputs = gs4_inputs(0.0, 0.0, 30.0);
        inputs.orientation_mode = WindAndSpreadOrientationMode::RelativeToNorth;
        inputs.topography.aspect = Degrees::new(-300.0);
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);
        assert_relative_eq!(result.direction_of_max_spread, 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wind_limit_clamps_effective_wind() {
        let catalog = FuelModels::new();
        let mut inputs = gs4_inputs(20.0, 0.0, 30.0);
        inputs.fuel_model_number = 1;
        inputs.wind.height_mode = WindHeightInputMode::DirectMidflame;
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);

        assert!(result.is_wind_limit_exceeded);
        assert_relative_eq!(result.effective_wind_speed, result.wind_speed_limit, epsilon = 1e-9);
        let unclamped =
            result.no_wind_no_slope_spread_rate * (1.0 + result.wind_factor + result.slope_factor);
        assert!(result.max_spread_rate < unclamped);
    }

    #[test]
    fn test_user_wind_adjustment_factor_overrides() {
        let catalog = FuelModels::new();
        let mut inputs = gs4_inputs(10.0, 0.0, 0.0);
        inputs.wind.height_mode = WindHeightInputMode::TenMeter;
        inputs.user_provided_wind_adjustment_factor = Some(0.4);
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);
        assert_relative_eq!(result.midflame_wind_speed, 10.0 / 1.15 * 0.4 * 88.0, epsilon = 1e-9);
    }
}
