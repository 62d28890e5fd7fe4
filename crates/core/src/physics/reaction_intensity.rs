//! Reaction intensity
//!
//! Rate of heat release per unit area of the flaming front, summed over the
//! dead and live fuel categories with moisture and mineral damping.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115, equations 27-39.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30, p. 88.

use serde::{Deserialize, Serialize};

use crate::physics::fuelbed_intermediates::{FuelParticles, FuelbedIntermediates};

/// Reaction intensity with its damping terms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionIntensity {
    pub dead: f64,  // Btu/ft²/min
    pub live: f64,  // Btu/ft²/min
    pub total: f64, // Btu/ft²/min
    pub moisture_damping_dead: f64,
    pub moisture_damping_live: f64,
    pub mineral_damping_dead: f64,
    pub mineral_damping_live: f64,
}

/// Moisture damping coefficient η_M
///
/// # Formula
/// ```text
/// r   = M_f / M_x
/// η_M = 1 - 2.59·r + 5.11·r² - 3.52·r³   (0 when M_f >= M_x)
/// ```
pub fn moisture_damping_coefficient(weighted_moisture: f64, moisture_of_extinction: f64) -> f64 {
    let relative_moisture = if moisture_of_extinction > 0.0 {
        weighted_moisture / moisture_of_extinction
    } else {
        0.0
    };
    if weighted_moisture >= moisture_of_extinction || relative_moisture > 1.0 {
        return 0.0;
    }
    1.0 - 2.59 * relative_moisture + 5.11 * relative_moisture.powi(2)
        - 3.52 * relative_moisture.powi(3)
}

/// Mineral damping coefficient η_s = 0.174·S_e^-0.19, capped at 1
pub fn mineral_damping_coefficient(weighted_silica: f64) -> f64 {
    let denominator = weighted_silica.powf(0.19);
    if denominator < 1.0e-6 {
        0.0
    } else {
        (0.174 / denominator).min(1.0)
    }
}

/// Calculate reaction intensity (Btu/ft²/min)
///
/// # Formula
/// ```text
/// Γ'_max = σ^1.5 / (495 + 0.0594·σ^1.5)
/// A      = 133 · σ^-0.7913
/// Γ'     = Γ'_max · (β/β_op)^A · exp(A·(1 - β/β_op))
/// I_R    = Σ Γ' · w_n · h · η_M · η_s      (dead + live)
/// ```
///
/// # Arguments
/// * `fuelbed` - Derived fuelbed scalars
///
/// # Returns
/// Per life state and total reaction intensity. Zero for a fuelbed with no
/// characteristic SAVR.
pub fn calculate_reaction_intensity(fuelbed: &FuelbedIntermediates) -> ReactionIntensity {
    let sigma = fuelbed.sigma;
    if sigma < 1.0e-7 {
        return ReactionIntensity::default();
    }

    let aa = 133.0 / sigma.powf(0.7913);
    let sigma_to_one_point_five = sigma.powf(1.5);
    let gamma_max = sigma_to_one_point_five / (495.0 + 0.0594 * sigma_to_one_point_five);
    let relative_packing_ratio = fuelbed.relative_packing_ratio;
    let gamma =
        gamma_max * relative_packing_ratio.powf(aa) * (aa * (1.0 - relative_packing_ratio)).exp();

    let life_state = |particles: &FuelParticles| {
        let eta_m = moisture_damping_coefficient(
            particles.weighted_moisture,
            particles.moisture_of_extinction,
        );
        let eta_s = mineral_damping_coefficient(particles.weighted_silica);
        let intensity =
            gamma * particles.weighted_fuel_load * particles.weighted_heat * eta_m * eta_s;
        (intensity, eta_m, eta_s)
    };

    let (dead, moisture_damping_dead, mineral_damping_dead) = life_state(&fuelbed.dead);
    let (live, moisture_damping_live, mineral_damping_live) = life_state(&fuelbed.live);

    ReactionIntensity {
        dead,
        live,
        total: dead + live,
        moisture_damping_dead,
        moisture_damping_live,
        mineral_damping_dead,
        mineral_damping_live,
    }
}
