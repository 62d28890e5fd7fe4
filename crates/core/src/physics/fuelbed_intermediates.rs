//! Surface fuelbed intermediates
//!
//! Aggregates per-size-class fuel particle data (loads, moistures, SAVR, heat
//! and silica content) into the bulk fuelbed scalars consumed by the spread
//! equations: characteristic SAVR, packing ratios, heat sink and the moisture
//! of extinction for each life state.
//!
//! Every call starts from a freshly reset fuelbed, so nothing carries over
//! between fuel models.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.
//! - Burgan, R.E. (1979). "Estimating live fuel moisture for the 1978 National Fire Danger
//!   Rating System." USDA Forest Service Research Paper INT-226.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core_types::fuel_model::FuelModels;
use crate::core_types::surface_inputs::{
    FuelMoistures, PalmettoGallberryInputs, SpecialFuel, SurfaceInputs, WesternAspenInputs,
};
use crate::physics::propagating_flux::calculate_propagating_flux;
use crate::physics::{palmetto_gallberry, western_aspen};

/// Particle slots per life state
pub const MAX_PARTICLES: usize = 4;
const MAX_DEAD_SIZE_CLASSES: usize = 4;
const MAX_LIVE_SIZE_CLASSES: usize = 3;

/// Lower SAVR bound (ft⁻¹) of each size-class band, coarsest band last
const SAVR_SIZE_CLASS_BANDS: [f64; 5] = [1200.0, 192.0, 96.0, 48.0, 16.0];

const DEFAULT_TOTAL_SILICA_CONTENT: f64 = 0.0555;
const DEFAULT_SILICA_EFFECTIVE: f64 = 0.01;
/// Oven-dry particle density (lb/ft³)
const DEFAULT_FUEL_DENSITY: f64 = 32.0;

/// Dead 10-h and 100-h SAVR for catalog models (ft²/ft³)
const SAVR_TEN_HOUR: f64 = 109.0;
const SAVR_HUNDRED_HOUR: f64 = 30.0;

/// Live herbaceous moisture below which a dynamic model cures completely
const FULLY_CURED_HERB_MOISTURE: f64 = 0.30;
/// Live herbaceous moisture above which a dynamic model stays green
const UNCURED_HERB_MOISTURE: f64 = 1.20;

/// Fuel particles of one life state (dead or live)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelParticles {
    pub load: [f64; MAX_PARTICLES],               // lb/ft²
    pub savr: [f64; MAX_PARTICLES],               // ft²/ft³
    pub moisture: [f64; MAX_PARTICLES],           // fraction
    pub heat_of_combustion: [f64; MAX_PARTICLES], // Btu/lb
    pub silica_effective: [f64; MAX_PARTICLES],   // fraction
    pub fuel_density: f64,                        // lb/ft³
    /// Populated size classes (0 or the life state maximum)
    pub size_class_count: usize,
    pub surface_area: [f64; MAX_PARTICLES],
    pub total_surface_area: f64,
    /// Area weighting factor of each particle within the life state
    pub fraction_of_surface_area: [f64; MAX_PARTICLES],
    /// Area weight summed over the particle's SAVR band
    pub size_sorted_fraction_of_surface_area: [f64; MAX_PARTICLES],
    pub total_load: f64,
    pub weighted_heat: f64,
    pub weighted_silica: f64,
    pub weighted_moisture: f64,
    pub weighted_savr: f64,
    /// Net (mineral free) load weighted by size class
    pub weighted_fuel_load: f64,
    pub moisture_of_extinction: f64,
}

impl FuelParticles {
    fn reset(silica_effective: [f64; MAX_PARTICLES]) -> Self {
        Self {
            silica_effective,
            fuel_density: DEFAULT_FUEL_DENSITY,
            ..Self::default()
        }
    }

    fn count_size_classes(&mut self, max_size_classes: usize) {
        let populated = self.load[..max_size_classes].iter().any(|&load| load != 0.0);
        self.size_class_count = if populated { max_size_classes } else { 0 };
    }

    /// Surface area and area weighting factors for the populated size classes
    fn calculate_surface_area_weights(&mut self) {
        if self.size_class_count != 0 {
            self.total_surface_area = 0.0;
            for i in 0..self.size_class_count {
                self.surface_area[i] = self.load[i] * self.savr[i] / self.fuel_density;
                self.total_surface_area += self.surface_area[i];
            }
            for i in 0..self.size_class_count {
                self.fraction_of_surface_area[i] = if self.total_surface_area > 1.0e-7 {
                    self.surface_area[i] / self.total_surface_area
                } else {
                    0.0
                };
            }
        }

        let mut band_sums = [0.0; SAVR_SIZE_CLASS_BANDS.len()];
        for i in 0..MAX_PARTICLES {
            if let Some(band) = size_class_band(self.savr[i]) {
                band_sums[band] += self.fraction_of_surface_area[i];
            }
        }
        for i in 0..MAX_PARTICLES {
            self.size_sorted_fraction_of_surface_area[i] =
                size_class_band(self.savr[i]).map_or(0.0, |band| band_sums[band]);
        }
    }

    /// Area-weighted heat, silica, moisture and SAVR plus the net fuel load
    fn calculate_weighted_sums(&mut self, total_silica_content: f64) {
        for i in 0..MAX_PARTICLES {
            let mut net_load = 0.0;
            if self.savr[i] > 1.0e-7 {
                let weight = self.fraction_of_surface_area[i];
                net_load = self.load[i] * (1.0 - total_silica_content);
                self.weighted_heat += weight * self.heat_of_combustion[i];
                self.weighted_silica += weight * self.silica_effective[i];
                self.weighted_moisture += weight * self.moisture[i];
                self.weighted_savr += weight * self.savr[i];
                self.total_load += self.load[i];
            }
            self.weighted_fuel_load += self.size_sorted_fraction_of_surface_area[i] * net_load;
        }
    }

    /// Σ load·exp(-k/σ) over particles with a usable SAVR
    fn fine_fuel_load(&self, particles: usize, savr_exponent: f64) -> f64 {
        (0..particles)
            .filter(|&i| self.savr[i] > 1.0e-7)
            .map(|i| self.load[i] * (-savr_exponent / self.savr[i]).exp())
            .sum()
    }

    /// This life state's share of the preignition heat sink, before bulk density
    fn heat_sink_contribution(&self, fraction_of_total_surface_area: f64) -> f64 {
        (0..MAX_PARTICLES)
            .filter(|&i| self.savr[i] > 1.0e-7)
            .map(|i| {
                let heat_of_preignition = 250.0 + 1116.0 * self.moisture[i];
                fraction_of_total_surface_area
                    * self.fraction_of_surface_area[i]
                    * heat_of_preignition
                    * (-138.0 / self.savr[i]).exp()
            })
            .sum()
    }
}

/// Band index for a particle SAVR, `None` below the finest tracked size
fn size_class_band(savr: f64) -> Option<usize> {
    SAVR_SIZE_CLASS_BANDS
        .iter()
        .position(|&lower_bound| savr >= lower_bound)
}

/// Bulk fuelbed state for one fuel model and moisture scenario
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelbedIntermediates {
    pub dead: FuelParticles,
    pub live: FuelParticles,
    pub depth: f64, // ft
    pub total_silica_content: f64,
    pub fraction_of_total_surface_area_dead: f64,
    pub fraction_of_total_surface_area_live: f64,
    /// Characteristic SAVR σ (ft²/ft³)
    pub sigma: f64,
    pub bulk_density: f64, // lb/ft³
    pub packing_ratio: f64,
    pub optimum_packing_ratio: f64,
    pub relative_packing_ratio: f64,
    pub heat_sink: f64,        // Btu/ft³
    pub propagating_flux: f64, // dimensionless
}

impl FuelbedIntermediates {
    fn reset() -> Self {
        let silica_live = [
            DEFAULT_SILICA_EFFECTIVE,
            DEFAULT_SILICA_EFFECTIVE,
            0.0,
            0.0,
        ];
        Self {
            dead: FuelParticles::reset([DEFAULT_SILICA_EFFECTIVE; MAX_PARTICLES]),
            live: FuelParticles::reset(silica_live),
            total_silica_content: DEFAULT_TOTAL_SILICA_CONTENT,
            ..Self::default()
        }
    }

    pub fn moisture_of_extinction_dead(&self) -> f64 {
        self.dead.moisture_of_extinction
    }

    pub fn moisture_of_extinction_live(&self) -> f64 {
        self.live.moisture_of_extinction
    }

    fn load_catalog_model(
        &mut self,
        fuel_models: &FuelModels,
        fuel_model_number: i32,
        moistures: &FuelMoistures,
    ) {
        let record = fuel_models.record_or_empty(fuel_model_number);

        self.dead.load = [
            record.fuel_load_one_hour,
            record.fuel_load_ten_hour,
            record.fuel_load_hundred_hour,
            0.0,
        ];
        self.live.load = [
            record.fuel_load_live_herbaceous,
            record.fuel_load_live_woody,
            0.0,
            0.0,
        ];
        self.depth = record.fuelbed_depth;

        self.dead.moisture = [
            *moistures.one_hour,
            *moistures.ten_hour,
            *moistures.hundred_hour,
            *moistures.one_hour,
        ];
        self.live.moisture = [*moistures.live_herbaceous, *moistures.live_woody, 0.0, 0.0];

        // Cured herbaceous fuel burns with the herbaceous SAVR in the fourth dead slot
        self.dead.savr = [
            record.savr_one_hour,
            SAVR_TEN_HOUR,
            SAVR_HUNDRED_HOUR,
            record.savr_live_herbaceous,
        ];
        self.live.savr = [record.savr_live_herbaceous, record.savr_live_woody, 0.0, 0.0];

        self.set_heat_of_combustion(record.heat_of_combustion_dead, record.heat_of_combustion_live);
        self.dead.moisture_of_extinction = record.moisture_of_extinction_dead;
    }

    fn load_palmetto_gallberry(
        &mut self,
        inputs: &PalmettoGallberryInputs,
        moistures: &FuelMoistures,
    ) {
        let loads = palmetto_gallberry::calculate_loads(inputs);
        self.dead.load = [
            loads.dead_one_hour,
            loads.dead_ten_hour,
            loads.dead_foliage,
            loads.litter,
        ];
        self.live.load = [loads.live_one_hour, loads.live_ten_hour, loads.live_foliage, 0.0];
        self.live.silica_effective = [
            palmetto_gallberry::SILICA_EFFECTIVE_LIVE,
            palmetto_gallberry::SILICA_EFFECTIVE_LIVE,
            palmetto_gallberry::SILICA_EFFECTIVE_LIVE,
            0.0,
        ];
        self.depth = palmetto_gallberry::fuelbed_depth(inputs.height_of_understory);

        self.dead.moisture = [
            *moistures.one_hour,
            *moistures.ten_hour,
            *moistures.one_hour,
            *moistures.hundred_hour,
        ];
        self.live.moisture = [
            *moistures.live_woody,
            *moistures.live_woody,
            *moistures.live_herbaceous,
            0.0,
        ];

        self.dead.savr = [350.0, 140.0, 2000.0, 2000.0];
        self.live.savr = [350.0, 140.0, 2000.0, 0.0];

        self.dead.fuel_density = palmetto_gallberry::FUEL_DENSITY_DEAD;
        self.live.fuel_density = palmetto_gallberry::FUEL_DENSITY_LIVE;
        self.total_silica_content = palmetto_gallberry::TOTAL_SILICA_CONTENT;

        self.set_heat_of_combustion(
            palmetto_gallberry::HEAT_OF_COMBUSTION,
            palmetto_gallberry::HEAT_OF_COMBUSTION,
        );
        self.dead.moisture_of_extinction = palmetto_gallberry::MOISTURE_OF_EXTINCTION_DEAD;
    }

    fn load_western_aspen(&mut self, inputs: &WesternAspenInputs, moistures: &FuelMoistures) {
        let aspen_type = inputs.aspen_fuel_model_number;
        let curing = *inputs.curing_level;

        self.dead.load = [
            western_aspen::load_dead_one_hour(aspen_type, curing),
            western_aspen::load_dead_ten_hour(aspen_type),
            0.0,
            0.0,
        ];
        self.live.load = [
            western_aspen::load_live_herbaceous(aspen_type, curing),
            western_aspen::load_live_woody(aspen_type, curing),
            0.0,
            0.0,
        ];
        self.depth = western_aspen::fuelbed_depth(aspen_type);

        self.dead.moisture = [
            *moistures.one_hour,
            *moistures.ten_hour,
            *moistures.hundred_hour,
            *moistures.one_hour,
        ];
        self.live.moisture = [*moistures.live_herbaceous, *moistures.live_woody, 0.0, 0.0];

        self.dead.savr = [
            western_aspen::savr_dead_one_hour(aspen_type, curing),
            western_aspen::SAVR_DEAD_TEN_HOUR,
            0.0,
            0.0,
        ];
        self.live.savr = [
            western_aspen::SAVR_LIVE_HERBACEOUS,
            western_aspen::savr_live_woody(aspen_type, curing),
            0.0,
            0.0,
        ];

        self.set_heat_of_combustion(
            western_aspen::HEAT_OF_COMBUSTION,
            western_aspen::HEAT_OF_COMBUSTION,
        );
        self.dead.moisture_of_extinction = western_aspen::MOISTURE_OF_EXTINCTION_DEAD;
    }

    fn set_heat_of_combustion(&mut self, dead: f64, live: f64) {
        self.dead.heat_of_combustion = [dead; MAX_PARTICLES];
        self.live.heat_of_combustion = [live, live, live, 0.0];
    }

    /// Move cured live herbaceous load into the fourth dead slot
    ///
    /// # Formula
    /// ```text
    /// M_herb < 0.30:          transfer everything
    /// 0.30 <= M_herb <= 1.20: transferred = w_herb · (1.333 - 1.11·M_herb)
    /// M_herb > 1.20:          nothing cured
    /// ```
    fn dynamic_load_transfer(&mut self) {
        let herb_moisture = self.live.moisture[0];
        if herb_moisture < FULLY_CURED_HERB_MOISTURE {
            self.dead.load[3] = self.live.load[0];
            self.live.load[0] = 0.0;
        } else if herb_moisture <= UNCURED_HERB_MOISTURE {
            self.dead.load[3] = self.live.load[0] * (1.333 - 1.11 * herb_moisture);
            self.live.load[0] -= self.dead.load[3];
        }
    }

    /// Live moisture of extinction from the fine dead to fine live load ratio
    ///
    /// # Formula
    /// ```text
    /// M_x,live = 2.9 · (W_dead / W_live) · (1 - M_f,dead / M_x,dead) - 0.226
    /// ```
    ///
    /// Floored at the dead moisture of extinction. A fuelbed without live fuel
    /// takes the dead value directly.
    fn calculate_live_moisture_of_extinction(&mut self) {
        let dead_extinction = self.dead.moisture_of_extinction;
        if self.live.size_class_count == 0 {
            self.live.moisture_of_extinction = dead_extinction;
            return;
        }

        let mut fine_dead = 0.0;
        let mut weighted_fine_dead_moisture = 0.0;
        for i in 0..MAX_PARTICLES {
            if self.dead.savr[i] > 1.0e-7 {
                let weighting = self.dead.load[i] * (-138.0 / self.dead.savr[i]).exp();
                fine_dead += weighting;
                weighted_fine_dead_moisture += weighting * self.dead.moisture[i];
            }
        }
        let fine_dead_moisture = if fine_dead > 1.0e-7 {
            weighted_fine_dead_moisture / fine_dead
        } else {
            0.0
        };

        let fine_live = self.live.fine_fuel_load(self.live.size_class_count, 500.0);
        let fine_dead_over_fine_live = if fine_live > 1.0e-7 {
            fine_dead / fine_live
        } else {
            0.0
        };

        let moisture_ratio = if dead_extinction > 1.0e-7 {
            fine_dead_moisture / dead_extinction
        } else {
            0.0
        };

        let live_extinction = 2.9 * fine_dead_over_fine_live * (1.0 - moisture_ratio) - 0.226;
        self.live.moisture_of_extinction = live_extinction.max(dead_extinction);
    }
}

/// Build the fuelbed for the inputs' fuel selection
///
/// A catalog fuel model, palmetto-gallberry rough or western aspen stand is
/// chosen by `inputs.special_fuel`. An undefined catalog model produces a
/// fuelbed of zeros.
///
/// # Arguments
/// * `fuel_models` - Fuel model catalog
/// * `inputs` - Fuel selection and moistures
///
/// # Returns
/// Fully derived fuelbed scalars
pub fn calculate_fuelbed_intermediates(
    fuel_models: &FuelModels,
    inputs: &SurfaceInputs,
) -> FuelbedIntermediates {
    let mut fuelbed = FuelbedIntermediates::reset();

    match &inputs.special_fuel {
        SpecialFuel::None => {
            fuelbed.load_catalog_model(fuel_models, inputs.fuel_model_number, &inputs.moistures);
        }
        SpecialFuel::PalmettoGallberry(palmetto) => {
            fuelbed.load_palmetto_gallberry(palmetto, &inputs.moistures);
        }
        SpecialFuel::WesternAspen(aspen) => {
            fuelbed.load_western_aspen(aspen, &inputs.moistures);
        }
    }

    // Counted before any herbaceous transfer
    fuelbed.dead.count_size_classes(MAX_DEAD_SIZE_CLASSES);
    fuelbed.live.count_size_classes(MAX_LIVE_SIZE_CLASSES);

    if inputs.special_fuel == SpecialFuel::None
        && fuel_models.get_is_dynamic(inputs.fuel_model_number)
    {
        fuelbed.dynamic_load_transfer();
    }

    fuelbed.dead.calculate_surface_area_weights();
    fuelbed.live.calculate_surface_area_weights();

    let total_surface_area = fuelbed.dead.total_surface_area + fuelbed.live.total_surface_area;
    fuelbed.fraction_of_total_surface_area_dead = if total_surface_area > 1.0e-7 {
        fuelbed.dead.total_surface_area / total_surface_area
    } else {
        0.0
    };
    fuelbed.fraction_of_total_surface_area_live = 1.0 - fuelbed.fraction_of_total_surface_area_dead;

    fuelbed.calculate_live_moisture_of_extinction();

    let total_silica_content = fuelbed.total_silica_content;
    fuelbed.dead.calculate_weighted_sums(total_silica_content);
    fuelbed.live.calculate_weighted_sums(total_silica_content);

    fuelbed.sigma = fuelbed.fraction_of_total_surface_area_dead * fuelbed.dead.weighted_savr
        + fuelbed.fraction_of_total_surface_area_live * fuelbed.live.weighted_savr;

    calculate_packing(&mut fuelbed);

    fuelbed.heat_sink = (fuelbed
        .dead
        .heat_sink_contribution(fuelbed.fraction_of_total_surface_area_dead)
        + fuelbed
            .live
            .heat_sink_contribution(fuelbed.fraction_of_total_surface_area_live))
        * fuelbed.bulk_density;

    fuelbed.propagating_flux = calculate_propagating_flux(fuelbed.sigma, fuelbed.packing_ratio);

    trace!(
        sigma = fuelbed.sigma,
        packing_ratio = fuelbed.packing_ratio,
        relative_packing_ratio = fuelbed.relative_packing_ratio,
        heat_sink = fuelbed.heat_sink,
        moisture_of_extinction_live = fuelbed.live.moisture_of_extinction,
        "fuelbed intermediates"
    );

    fuelbed
}

/// Bulk density, packing ratio and relative packing ratio
///
/// # Formula
/// ```text
/// ρ_b = (W_dead + W_live) / δ
/// β   = Σ W_i / (δ · ρ_p,i)
/// β_op = 3.348 · σ^-0.8189
/// ```
fn calculate_packing(fuelbed: &mut FuelbedIntermediates) {
    let depth = fuelbed.depth;
    if depth > 1.0e-7 {
        fuelbed.bulk_density = (fuelbed.dead.total_load + fuelbed.live.total_load) / depth;
        fuelbed.packing_ratio = fuelbed.dead.total_load / (depth * fuelbed.dead.fuel_density)
            + fuelbed.live.total_load / (depth * fuelbed.live.fuel_density);
    }
    if fuelbed.sigma > 1.0e-7 {
        fuelbed.optimum_packing_ratio = 3.348 / fuelbed.sigma.powf(0.8189);
    }
    if fuelbed.optimum_packing_ratio > 1.0e-7 {
        fuelbed.relative_packing_ratio = fuelbed.packing_ratio / fuelbed.optimum_packing_ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::surface_inputs::{Canopy, SlopeInputMode, Topography, WindInputs};
    use crate::core_types::units::{Degrees, Fraction, MilesPerHour};
    use crate::core_types::surface_inputs::WindHeightInputMode;
    use approx::assert_relative_eq;

    fn inputs_for(fuel_model_number: i32, live_herb_percent: f64) -> SurfaceInputs {
        let mut inputs = SurfaceInputs::default();
        inputs.update_surface_inputs(
            fuel_model_number,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, live_herb_percent, 90.0),
            WindInputs::new(
                MilesPerHour::ZERO,
                Degrees::new(0.0),
                WindHeightInputMode::DirectMidflame,
            ),
            Topography::new(0.0, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy::default(),
        );
        inputs
    }

    #[test]
    fn test_size_class_bands() {
        assert_eq!(size_class_band(3500.0), Some(0));
        assert_eq!(size_class_band(1200.0), Some(0));
        assert_eq!(size_class_band(109.0), Some(2));
        assert_eq!(size_class_band(30.0), Some(4));
        assert_eq!(size_class_band(10.0), None);
        assert_eq!(size_class_band(0.0), None);
    }

    #[test]
    fn test_short_grass_single_class() {
        let catalog = FuelModels::new();
        let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs_for(1, 60.0));

        // Only the 1-h class carries load, so all dead area sits there
        assert_relative_eq!(fuelbed.dead.fraction_of_surface_area[0], 1.0);
        assert_relative_eq!(fuelbed.sigma, 3500.0, epsilon = 1e-9);
        assert_relative_eq!(fuelbed.fraction_of_total_surface_area_dead, 1.0);
        assert_eq!(fuelbed.live.size_class_count, 0);
        assert_relative_eq!(fuelbed.bulk_density, 0.034, epsilon = 1e-12);
        assert_relative_eq!(fuelbed.packing_ratio, 0.034 / 32.0, epsilon = 1e-12);
        assert!(fuelbed.heat_sink > 0.0);
        assert!(fuelbed.propagating_flux > 0.0);
    }

    #[test]
    fn test_dynamic_transfer_by_herb_moisture() {
        let catalog = FuelModels::new();

        let cured = calculate_fuelbed_intermediates(&catalog, &inputs_for(124, 25.0));
        assert_eq!(cured.live.load[0], 0.0);
        assert!(cured.dead.load[3] > 0.0);

        let green = calculate_fuelbed_intermediates(&catalog, &inputs_for(124, 150.0));
        assert_eq!(green.dead.load[3], 0.0);

        let partial = calculate_fuelbed_intermediates(&catalog, &inputs_for(124, 60.0));
        let herb_load = catalog.get_fuel_load_live_herbaceous(124);
        let transferred = herb_load * (1.333 - 1.11 * 0.60);
        assert_relative_eq!(partial.dead.load[3], transferred, epsilon = 1e-12);
        assert_relative_eq!(partial.live.load[0], herb_load - transferred, epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_model_is_all_zero() {
        let catalog = FuelModels::new();
        let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs_for(250, 60.0));
        assert_eq!(fuelbed.sigma, 0.0);
        assert_eq!(fuelbed.packing_ratio, 0.0);
        assert_eq!(fuelbed.relative_packing_ratio, 0.0);
        assert_eq!(fuelbed.heat_sink, 0.0);
        assert_eq!(fuelbed.propagating_flux, 0.0);
    }

    #[test]
    fn test_live_extinction_not_below_dead() {
        let catalog = FuelModels::new();
        for number in [1, 4, 101, 124, 145, 165] {
            let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs_for(number, 60.0));
            assert!(
                fuelbed.moisture_of_extinction_live() >= fuelbed.moisture_of_extinction_dead(),
                "model {number}: live extinction below dead"
            );
        }
    }

    #[test]
    fn test_palmetto_gallberry_fuelbed() {
        let catalog = FuelModels::new();
        let mut inputs = inputs_for(1, 60.0);
        inputs.update_for_palmetto_gallberry(
            PalmettoGallberryInputs {
                age_of_rough: 10.0,
                height_of_understory: 3.0,
                palmetto_coverage: 50.0,
                overstory_basal_area: 60.0,
            },
            inputs.moistures,
            inputs.wind,
            inputs.topography,
            inputs.canopy,
        );
        let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs);
        assert_relative_eq!(fuelbed.depth, 2.0);
        assert_eq!(fuelbed.dead.fuel_density, 30.0);
        assert_eq!(fuelbed.live.fuel_density, 46.0);
        assert_relative_eq!(fuelbed.total_silica_content, 0.030);
        assert_relative_eq!(fuelbed.moisture_of_extinction_dead(), 0.40);
        assert!(fuelbed.sigma > 0.0);
    }

    #[test]
    fn test_western_aspen_fuelbed() {
        let catalog = FuelModels::new();
        let mut inputs = inputs_for(1, 60.0);
        inputs.update_for_western_aspen(
            WesternAspenInputs {
                aspen_fuel_model_number: 1,
                curing_level: Fraction::new(0.5),
            },
            inputs.moistures,
            inputs.wind,
            inputs.topography,
            inputs.canopy,
        );
        let fuelbed = calculate_fuelbed_intermediates(&catalog, &inputs);
        assert_relative_eq!(fuelbed.depth, 0.65);
        assert_relative_eq!(fuelbed.dead.savr[0], 1910.0, epsilon = 1e-9);
        assert_relative_eq!(fuelbed.live.savr[0], 2800.0);
        assert_relative_eq!(fuelbed.moisture_of_extinction_dead(), 0.25);
        assert!(fuelbed.live.size_class_count > 0);
    }
}
