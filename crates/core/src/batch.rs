//! Parallel surface runs over many input sets
//!
//! Every run only reads the catalog, so one catalog is shared by all rayon
//! workers without locking.

use rayon::prelude::*;

use crate::core_types::fuel_model::FuelModels;
use crate::core_types::surface_inputs::SurfaceInputs;
use crate::core_types::units::Degrees;
use crate::surface::{calculate_surface_fire, SurfaceError, SurfaceFireResult};

/// Run every input set against `fuel_models`, results in input order
///
/// `direction_of_interest` applies to every run; `None` reports head fire rates.
pub fn run_batch(
    fuel_models: &FuelModels,
    inputs: &[SurfaceInputs],
    direction_of_interest: Option<Degrees>,
) -> Vec<Result<SurfaceFireResult, SurfaceError>> {
    let results: Vec<_> = inputs
        .par_iter()
        .map(|run_inputs| calculate_surface_fire(fuel_models, run_inputs, direction_of_interest))
        .collect();

    tracing::debug!(
        runs = results.len(),
        rejected = results.iter().filter(|result| result.is_err()).count(),
        "Batch complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::surface_inputs::{
        Canopy, FuelMoistures, SlopeInputMode, Topography, WindHeightInputMode, WindInputs,
    };
    use crate::core_types::units::MilesPerHour;

    fn inputs_for(fuel_model_number: i32, wind_mph: f64) -> SurfaceInputs {
        let mut inputs = SurfaceInputs::default();
        inputs.update_surface_inputs(
            fuel_model_number,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
            WindInputs::new(
                MilesPerHour::new(wind_mph),
                Degrees::new(0.0),
                WindHeightInputMode::DirectMidflame,
            ),
            Topography::new(20.0, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy::default(),
        );
        inputs
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let catalog = FuelModels::new();
        let inputs: Vec<_> = [1, 2, 4, 101, 124, 165, 91]
            .iter()
            .enumerate()
            .map(|(i, &number)| inputs_for(number, i as f64))
            .collect();

        let batch = run_batch(&catalog, &inputs, None);
        assert_eq!(batch.len(), inputs.len());
        for (run_inputs, result) in inputs.iter().zip(&batch) {
            let sequential = calculate_surface_fire(&catalog, run_inputs, None).unwrap();
            assert_eq!(result.as_ref().unwrap(), &sequential);
        }
    }

    #[test]
    fn test_batch_reports_rejected_inputs_in_place() {
        let catalog = FuelModels::new();
        let mut bad = inputs_for(1, 3.0);
        bad.user_provided_wind_adjustment_factor = Some(-0.5);
        let batch = run_batch(&catalog, &[inputs_for(1, 3.0), bad, inputs_for(2, 3.0)], None);
        assert!(batch[0].is_ok());
        assert_eq!(batch[1], Err(SurfaceError::InvalidWindAdjustmentFactor(-0.5)));
        assert!(batch[2].is_ok());
    }
}
