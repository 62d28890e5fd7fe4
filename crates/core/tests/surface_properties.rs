//! Property checks over randomized surface runs
//!
//! Inputs are drawn from a seeded `StdRng` so failures reproduce.
//!
//! Run tests with: cargo test --test `surface_properties`

use approx::assert_relative_eq;
use behave_surface_core::core_types::{
    Canopy, Degrees, Feet, Fraction, FuelMoistures, MilesPerHour, SlopeInputMode, Topography,
    TwoFuelModelsInputs, TwoFuelModelsMethod, WindAndSpreadOrientationMode, WindHeightInputMode,
    WindInputs,
};
use behave_surface_core::physics::fire_spread_validation::{
    calculate_forward_spread_rate, calculate_length_to_width_ratio, spread_rate_at_vector,
};
use behave_surface_core::physics::fuelbed_intermediates_validation::calculate_fuelbed_intermediates;
use behave_surface_core::physics::two_fuel_models_validation::calculate_two_fuel_models;
use behave_surface_core::{run_batch, FireEllipse, FuelModels, SurfaceInputs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const STANDARD_MODELS: [i32; 20] = [
    1, 2, 3, 4, 5, 8, 10, 13, 101, 102, 104, 121, 122, 124, 142, 145, 161, 165, 183, 202,
];

fn random_inputs(rng: &mut StdRng) -> SurfaceInputs {
    let fuel_model_number = STANDARD_MODELS[rng.random_range(0..STANDARD_MODELS.len())];
    let mut inputs = SurfaceInputs::default();
    inputs.update_surface_inputs(
        fuel_model_number,
        FuelMoistures::from_percent(
            rng.random_range(2.0..20.0),
            rng.random_range(3.0..25.0),
            rng.random_range(4.0..30.0),
            rng.random_range(30.0..250.0),
            rng.random_range(60.0..250.0),
        ),
        WindInputs::new(
            MilesPerHour::new(rng.random_range(0.0..30.0)),
            Degrees::new(rng.random_range(0.0..360.0)),
            WindHeightInputMode::TwentyFoot,
        ),
        Topography::new(
            rng.random_range(0.0..120.0),
            SlopeInputMode::Percent,
            Degrees::new(rng.random_range(0.0..360.0)),
        ),
        Canopy {
            cover: Fraction::new(rng.random_range(0.0..1.0)),
            height: Feet::new(rng.random_range(5.0..100.0)),
            crown_ratio: Fraction::new(rng.random_range(0.1..1.0)),
        },
    );
    if rng.random_bool(0.5) {
        inputs.orientation_mode = WindAndSpreadOrientationMode::RelativeToNorth;
    }
    inputs
}

#[test]
fn live_extinction_never_below_dead() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let inputs = random_inputs(&mut rng);
        let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs);
        assert!(
            fuelbed.moisture_of_extinction_live() >= fuelbed.moisture_of_extinction_dead(),
            "fuel model {}",
            inputs.fuel_model_number
        );
    }
}

#[test]
fn spread_outputs_stay_in_range() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let inputs = random_inputs(&mut rng);
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);

        assert!(result.max_spread_rate >= 0.0);
        assert!(result.backing_spread_rate <= result.max_spread_rate);
        assert!(result.length_to_width_ratio >= 1.0);
        assert!((0.0..1.0).contains(&result.eccentricity));
        assert!((0.0..=360.0).contains(&result.direction_of_max_spread));
        assert!(result.wind_adjustment.factor > 0.0 && result.wind_adjustment.factor <= 1.0);
        if result.is_wind_limit_exceeded {
            assert_relative_eq!(
                result.effective_wind_speed,
                result.wind_speed_limit,
                max_relative = 1e-12
            );
        } else {
            assert!(result.effective_wind_speed <= result.wind_speed_limit);
        }
    }
}

#[test]
fn rate_at_vector_peaks_at_head_and_bottoms_at_rear() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..200 {
        let inputs = random_inputs(&mut rng);
        let result = calculate_forward_spread_rate(&catalog, &inputs, None);
        let head = result.direction_of_max_spread_from_upslope;

        assert_relative_eq!(
            spread_rate_at_vector(result.max_spread_rate, result.eccentricity, head, head),
            result.max_spread_rate,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            spread_rate_at_vector(result.max_spread_rate, result.eccentricity, head, head + 180.0),
            result.backing_spread_rate,
            epsilon = 1e-9,
            max_relative = 1e-9
        );

        let offset = rng.random_range(1.0..179.0);
        let (rate, eccentricity) = (result.max_spread_rate, result.eccentricity);
        let left = spread_rate_at_vector(rate, eccentricity, head, head - offset);
        let right = spread_rate_at_vector(rate, eccentricity, head, head + offset);
        assert_relative_eq!(left, right, epsilon = 1e-9, max_relative = 1e-9);
        assert!(left <= result.max_spread_rate + 1e-9);
        assert!(left + 1e-9 >= result.backing_spread_rate);
    }
}

#[test]
fn length_to_width_grows_with_effective_wind() {
    let mut previous = calculate_length_to_width_ratio(0.0);
    assert_relative_eq!(previous, 1.0, epsilon = 1e-12);
    for step in 1..=60 {
        let ratio = calculate_length_to_width_ratio(f64::from(step) * 0.5);
        assert!(ratio > previous);
        previous = ratio;
    }
}

#[test]
fn ellipse_invariants() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let rate = rng.random_range(0.1..100.0);
        let ratio = rng.random_range(1.0..8.0);
        let minutes = rng.random_range(1.0..240.0);
        let ellipse = FireEllipse::from_length_to_width_ratio(rate, ratio, minutes);

        assert_relative_eq!(
            ellipse.elliptical_b,
            ellipse.elliptical_a * ratio,
            max_relative = 1e-9
        );
        assert!(ellipse.elliptical_c >= 0.0 && ellipse.elliptical_c < ellipse.elliptical_b);
        assert_relative_eq!(
            ellipse.forward_spread_distance + ellipse.backing_spread_distance,
            2.0 * ellipse.elliptical_b,
            max_relative = 1e-9
        );
        // Perimeter lies between 4b and 2π·b over this ratio range
        assert!(ellipse.perimeter >= 4.0 * ellipse.elliptical_b);
        let circumscribed = 2.0 * std::f64::consts::PI * ellipse.elliptical_b;
        assert!(ellipse.perimeter <= circumscribed * (1.0 + 1e-12));
    }
}

#[test]
fn two_fuel_models_bounded_by_components() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let inputs = random_inputs(&mut rng);
        let second = STANDARD_MODELS[rng.random_range(0..STANDARD_MODELS.len())];
        for method in [
            TwoFuelModelsMethod::Arithmetic,
            TwoFuelModelsMethod::Harmonic,
            TwoFuelModelsMethod::TwoDimensional,
        ] {
            let two = calculate_two_fuel_models(
                &catalog,
                &inputs,
                &TwoFuelModelsInputs {
                    second_fuel_model_number: second,
                    first_fuel_model_coverage: Fraction::new(rng.random_range(0.0..1.0)),
                    method,
                },
                None,
            );
            let low = two.first.spread_rate.min(two.second.spread_rate);
            let high = two.first.spread_rate.max(two.second.spread_rate);
            let blended = two.blended.spread_rate;
            assert!(blended <= high * (1.0 + 1e-9), "{method:?} above both models");
            if method != TwoFuelModelsMethod::Harmonic || low > 1.0e-6 {
                assert!(blended >= low * (1.0 - 1e-9), "{method:?} below both models");
            }
        }
    }
}

#[test]
fn two_dimensional_rate_rises_with_faster_fuel_coverage() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let inputs = random_inputs(&mut rng);
        let mut previous = 0.0;
        // First model coverage sweep with the faster model first
        let (first, second) = {
            let a = calculate_forward_spread_rate(&catalog, &inputs, None);
            let other = SurfaceInputs {
                fuel_model_number: 124,
                ..inputs.clone()
            };
            let b = calculate_forward_spread_rate(&catalog, &other, None);
            if a.max_spread_rate >= b.max_spread_rate {
                (inputs.fuel_model_number, 124)
            } else {
                (124, inputs.fuel_model_number)
            }
        };
        let first_inputs = SurfaceInputs {
            fuel_model_number: first,
            ..inputs.clone()
        };
        for step in 0..=10 {
            let two = calculate_two_fuel_models(
                &catalog,
                &first_inputs,
                &TwoFuelModelsInputs {
                    second_fuel_model_number: second,
                    first_fuel_model_coverage: Fraction::new(f64::from(step) / 10.0),
                    method: TwoFuelModelsMethod::TwoDimensional,
                },
                None,
            );
            assert!(two.blended.spread_rate + 1e-9 >= previous);
            previous = two.blended.spread_rate;
        }
    }
}

#[test]
fn batch_preserves_order() {
    let catalog = FuelModels::new();
    let mut rng = StdRng::seed_from_u64(11);
    let inputs: Vec<_> = (0..64).map(|_| random_inputs(&mut rng)).collect();
    let results = run_batch(&catalog, &inputs, None);
    for (run_inputs, result) in inputs.iter().zip(results) {
        let result = result.unwrap();
        assert_eq!(result.spread.fuel_model_number, run_inputs.fuel_model_number);
        assert_eq!(
            result.spread,
            calculate_forward_spread_rate(&catalog, run_inputs, None)
        );
    }
}
