//! Propagating flux ratio
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115, equation 42.

/// Fraction of reaction intensity that heats the unburned fuel ahead of the front
///
/// # Formula
/// ```text
/// ξ = exp((0.792 + 0.681·√σ)·(β + 0.1)) / (192 + 0.2595·σ)
/// ```
///
/// Where:
/// - **σ** = Characteristic SAVR (ft²/ft³)
/// - **β** = Packing ratio (dimensionless)
///
/// Returns 0 when σ is effectively zero.
pub fn calculate_propagating_flux(sigma: f64, packing_ratio: f64) -> f64 {
    if sigma < 1.0e-7 {
        return 0.0;
    }
    ((0.792 + 0.681 * sigma.sqrt()) * (packing_ratio + 0.1)).exp() / (192.0 + 0.2595 * sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sigma() {
        assert_eq!(calculate_propagating_flux(0.0, 0.01), 0.0);
    }

    #[test]
    fn test_flux_grows_with_packing() {
        let loose = calculate_propagating_flux(1800.0, 0.001);
        let dense = calculate_propagating_flux(1800.0, 0.01);
        assert!(dense > loose);
        assert!(loose > 0.0 && dense < 1.0);
    }
}
