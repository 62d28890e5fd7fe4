//! Two fuel models sharing one landscape cell
//!
//! Both fuel models are run through the full spread pipeline with identical
//! environment inputs, then the outputs are combined. The spread rate is
//! blended by the selected method. The remaining outputs follow fixed rules:
//! intensities and fuelbed depth take the larger of the two models while
//! direction, wind and fire shape come from the first model.
//!
//! # References
//! - Andrews, P.L., Bevins, C.D., Seli, R.C. (2008). "BehavePlus fire modeling system,
//!   version 4.0: User's Guide." USDA Forest Service RMRS-GTR-106WWW.
//! - Finney, M.A. (2003). "Calculation of fire spread rates across random landscapes."
//!   International Journal of Wildland Fire 12(2), 167-174.

use serde::{Deserialize, Serialize};

use crate::core_types::fuel_model::FuelModels;
use crate::core_types::surface_inputs::{SurfaceInputs, TwoFuelModelsInputs, TwoFuelModelsMethod};
use crate::physics::expected_spread_rate::expected_spread_rate;
use crate::physics::fire_spread::{
    calculate_backing_spread_rate, calculate_eccentricity, calculate_forward_spread_rate,
    SpreadResult,
};

/// Coverage above which a single fuel model's outputs are used unblended
pub const EXCLUSIVE_COVERAGE: f64 = 0.999;

/// Block used for the two-dimensional method
const TWO_DIMENSIONAL_SAMPLES: usize = 2;
const TWO_DIMENSIONAL_DEPTH: usize = 2;

/// Per-model runs plus the combined outcome
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TwoFuelModelsResult {
    pub method: TwoFuelModelsMethod,
    pub first_coverage: f64,
    pub second_coverage: f64,
    pub first: SpreadResult,
    pub second: SpreadResult,
    pub blended: SpreadResult,
}

/// Coverage-weighted spread rate for the selected method
///
/// # Formula
/// ```text
/// Arithmetic: R = c₁·R₁ + c₂·R₂
/// Harmonic:   R = 1 / (c₁/R₁ + c₂/R₂)      (0 unless both rates are positive)
/// ```
///
/// The two-dimensional method uses the expected rate through a random
/// two-fuel block shaped by `length_to_width_ratio`. `NoMethod` blends to 0.
pub fn blend_spread_rates(
    method: TwoFuelModelsMethod,
    rates: [f64; 2],
    coverages: [f64; 2],
    length_to_width_ratio: f64,
) -> f64 {
    match method {
        TwoFuelModelsMethod::NoMethod => 0.0,
        TwoFuelModelsMethod::Arithmetic => coverages[0] * rates[0] + coverages[1] * rates[1],
        TwoFuelModelsMethod::Harmonic => {
            if rates[0] > 1.0e-6 && rates[1] > 1.0e-6 {
                1.0 / (coverages[0] / rates[0] + coverages[1] / rates[1])
            } else {
                0.0
            }
        }
        TwoFuelModelsMethod::TwoDimensional => expected_spread_rate(
            &rates,
            &coverages,
            length_to_width_ratio,
            TWO_DIMENSIONAL_SAMPLES,
            TWO_DIMENSIONAL_DEPTH,
        ),
    }
}

/// Run and combine both fuel models of a two fuel model cell
///
/// # Arguments
/// * `fuel_models` - Fuel model catalog
/// * `inputs` - Environment inputs; `inputs.fuel_model_number` is the first model
/// * `two_fuel_models` - Second model, first model coverage and blend method
/// * `direction_of_interest` - Heading in the inputs' orientation frame
///
/// # Returns
/// Both single-model runs and the combined result
pub fn calculate_two_fuel_models(
    fuel_models: &FuelModels,
    inputs: &SurfaceInputs,
    two_fuel_models: &TwoFuelModelsInputs,
    direction_of_interest: Option<f64>,
) -> TwoFuelModelsResult {
    let first_coverage = (*two_fuel_models.first_fuel_model_coverage).clamp(0.0, 1.0);
    let coverages = [first_coverage, 1.0 - first_coverage];
    let method = two_fuel_models.method;

    let first = calculate_forward_spread_rate(fuel_models, inputs, direction_of_interest);
    let second = calculate_forward_spread_rate(
        fuel_models,
        &inputs.with_fuel_model_number(two_fuel_models.second_fuel_model_number),
        direction_of_interest,
    );

    // The second model's shape drives the random-landscape flanking
    let shape = second.length_to_width_ratio;
    let spread_rate = blend_spread_rates(
        method,
        [first.spread_rate, second.spread_rate],
        coverages,
        shape,
    );
    let max_spread_rate = if direction_of_interest.is_some() {
        blend_spread_rates(
            method,
            [first.max_spread_rate, second.max_spread_rate],
            coverages,
            shape,
        )
    } else {
        spread_rate
    };

    let mut blended = if coverages[0] > EXCLUSIVE_COVERAGE {
        first
    } else if coverages[1] > EXCLUSIVE_COVERAGE {
        second
    } else {
        combine_outputs(&first, &second)
    };
    blended.spread_rate = spread_rate;
    blended.max_spread_rate = max_spread_rate;
    blended.eccentricity = calculate_eccentricity(blended.length_to_width_ratio);
    blended.backing_spread_rate =
        calculate_backing_spread_rate(max_spread_rate, blended.eccentricity);

    TwoFuelModelsResult {
        method,
        first_coverage: coverages[0],
        second_coverage: coverages[1],
        first,
        second,
        blended,
    }
}

/// Outputs of a genuinely mixed cell, before the spread rate is set
fn combine_outputs(first: &SpreadResult, second: &SpreadResult) -> SpreadResult {
    let reaction_intensity = if first.reaction_intensity.total > second.reaction_intensity.total {
        first.reaction_intensity
    } else {
        second.reaction_intensity
    };

    SpreadResult {
        reaction_intensity,
        heat_per_unit_area: first.heat_per_unit_area.max(second.heat_per_unit_area),
        fireline_intensity: first.fireline_intensity.max(second.fireline_intensity),
        flame_length: first.flame_length.max(second.flame_length),
        fuelbed_depth: first.fuelbed_depth.max(second.fuelbed_depth),
        wind_speed_limit: first.wind_speed_limit.min(second.wind_speed_limit),
        is_wind_limit_exceeded: first.is_wind_limit_exceeded || second.is_wind_limit_exceeded,
        // Direction, wind and shape stay with the first model
        ..*first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::surface_inputs::{
        Canopy, FuelMoistures, SlopeInputMode, Topography, WindHeightInputMode, WindInputs,
    };
    use crate::core_types::units::{Degrees, Feet, Fraction, MilesPerHour};
    use approx::assert_relative_eq;

    fn inputs() -> SurfaceInputs {
        let mut inputs = SurfaceInputs::default();
        inputs.update_surface_inputs(
            1,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
            WindInputs::new(
                MilesPerHour::new(5.0),
                Degrees::new(0.0),
                WindHeightInputMode::TwentyFoot,
            ),
            Topography::new(30.0, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy {
                cover: Fraction::new(0.5),
                height: Feet::new(30.0),
                crown_ratio: Fraction::new(0.5),
            },
        );
        inputs
    }

    fn two(coverage: f64, method: TwoFuelModelsMethod) -> TwoFuelModelsInputs {
        TwoFuelModelsInputs {
            second_fuel_model_number: 124,
            first_fuel_model_coverage: Fraction::new(coverage),
            method,
        }
    }

    #[test]
    fn test_arithmetic_and_harmonic() {
        assert_relative_eq!(
            blend_spread_rates(TwoFuelModelsMethod::Arithmetic, [2.0, 6.0], [0.25, 0.75], 1.0),
            5.0
        );
        assert_relative_eq!(
            blend_spread_rates(TwoFuelModelsMethod::Harmonic, [2.0, 6.0], [0.5, 0.5], 1.0),
            3.0
        );
        assert_eq!(
            blend_spread_rates(TwoFuelModelsMethod::Harmonic, [0.0, 6.0], [0.5, 0.5], 1.0),
            0.0
        );
        assert_eq!(
            blend_spread_rates(TwoFuelModelsMethod::NoMethod, [2.0, 6.0], [0.5, 0.5], 1.0),
            0.0
        );
    }

    #[test]
    fn test_mixed_cell_rules() {
        let catalog = FuelModels::new();
        let result = calculate_two_fuel_models(
            &catalog,
            &inputs(),
            &two(0.5, TwoFuelModelsMethod::Arithmetic),
            None,
        );
        let (first, second, blended) = (result.first, result.second, result.blended);

        assert_relative_eq!(
            blended.spread_rate,
            0.5 * first.spread_rate + 0.5 * second.spread_rate,
            epsilon = 1e-12
        );
        assert_eq!(blended.flame_length, first.flame_length.max(second.flame_length));
        assert_eq!(
            blended.reaction_intensity.total,
            first.reaction_intensity.total.max(second.reaction_intensity.total)
        );
        assert_eq!(blended.fuelbed_depth, first.fuelbed_depth.max(second.fuelbed_depth));
        assert_eq!(blended.direction_of_max_spread, first.direction_of_max_spread);
        assert_eq!(blended.effective_wind_speed, first.effective_wind_speed);
        assert_eq!(blended.length_to_width_ratio, first.length_to_width_ratio);
        assert_eq!(blended.midflame_wind_speed, first.midflame_wind_speed);
        assert_eq!(
            blended.wind_speed_limit,
            first.wind_speed_limit.min(second.wind_speed_limit)
        );
    }

    #[test]
    fn test_exclusive_coverage() {
        let catalog = FuelModels::new();
        for method in [
            TwoFuelModelsMethod::Arithmetic,
            TwoFuelModelsMethod::Harmonic,
            TwoFuelModelsMethod::TwoDimensional,
        ] {
            let all_second =
                calculate_two_fuel_models(&catalog, &inputs(), &two(0.0, method), None);
            assert_relative_eq!(
                all_second.blended.spread_rate,
                all_second.second.spread_rate,
                max_relative = 1e-9
            );
            assert_eq!(all_second.blended.flame_length, all_second.second.flame_length);

            let all_first = calculate_two_fuel_models(&catalog, &inputs(), &two(1.0, method), None);
            assert_relative_eq!(
                all_first.blended.spread_rate,
                all_first.first.spread_rate,
                max_relative = 1e-9
            );
            assert_eq!(
                all_first.blended.fireline_intensity,
                all_first.first.fireline_intensity
            );
        }
    }
}
