//! Elliptical fire size
//!
//! Shape of a point-source fire after a given elapsed time, assuming an
//! ellipse whose rear focus is the ignition point.
//!
//! # References
//! - Anderson, H.E. (1983). "Predicting wind-driven wild land fire size and shape."
//!   USDA Forest Service Research Paper INT-305.
//! - Van Wagner, C.E. (1969). "A simple fire-growth model." Forestry Chronicle 45(2).

use serde::{Deserialize, Serialize};

use crate::physics::fire_spread::{
    calculate_backing_spread_rate, calculate_eccentricity, calculate_length_to_width_ratio,
};

/// Ellipse of a free-burning fire at one elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FireEllipse {
    pub elapsed_time: f64,              // min
    pub length_to_width_ratio: f64,
    pub eccentricity: f64,
    pub forward_spread_distance: f64,   // ft
    pub backing_spread_distance: f64,   // ft
    /// Semi-minor axis (ft)
    pub elliptical_a: f64,
    /// Semi-major axis (ft)
    pub elliptical_b: f64,
    /// Ellipse center to ignition point (ft)
    pub elliptical_c: f64,
    pub perimeter: f64,                 // ft
    pub area: f64,                      // ft²
}

impl FireEllipse {
    /// Ellipse from a head fire rate and effective wind speed
    ///
    /// # Arguments
    /// * `forward_spread_rate` - Head fire rate (ft/min)
    /// * `effective_wind_speed_mph` - Effective wind speed (mph)
    /// * `elapsed_time` - Time since ignition (min)
    pub fn from_effective_wind_speed(
        forward_spread_rate: f64,
        effective_wind_speed_mph: f64,
        elapsed_time: f64,
    ) -> Self {
        let length_to_width_ratio = calculate_length_to_width_ratio(effective_wind_speed_mph);
        Self::from_length_to_width_ratio(forward_spread_rate, length_to_width_ratio, elapsed_time)
    }

    /// Ellipse from a head fire rate and a known length-to-width ratio
    ///
    /// # Formula
    /// ```text
    /// B = (D_head + D_back) / 2
    /// A = B / (L/W)
    /// C = B - D_back
    /// ```
    pub fn from_length_to_width_ratio(
        forward_spread_rate: f64,
        length_to_width_ratio: f64,
        elapsed_time: f64,
    ) -> Self {
        let eccentricity = calculate_eccentricity(length_to_width_ratio);
        let backing_spread_rate = calculate_backing_spread_rate(forward_spread_rate, eccentricity);

        let forward_spread_distance = forward_spread_rate * elapsed_time;
        let backing_spread_distance = backing_spread_rate * elapsed_time;

        let elliptical_b = (forward_spread_distance + backing_spread_distance) / 2.0;
        let elliptical_a = if length_to_width_ratio > 1.0e-7 {
            elliptical_b / length_to_width_ratio
        } else {
            0.0
        };
        let elliptical_c = elliptical_b - backing_spread_distance;

        Self {
            elapsed_time,
            length_to_width_ratio,
            eccentricity,
            forward_spread_distance,
            backing_spread_distance,
            elliptical_a,
            elliptical_b,
            elliptical_c,
            perimeter: ellipse_perimeter(elliptical_a, elliptical_b),
            area: std::f64::consts::PI * elliptical_a * elliptical_b,
        }
    }
}

/// Ellipse perimeter from its semi-axes (series approximation)
///
/// # Formula
/// ```text
/// h = ((a - b) / (a + b))²
/// P = π · (a + b) · (1 + h/4 + h²/64)
/// ```
pub fn ellipse_perimeter(semi_minor: f64, semi_major: f64) -> f64 {
    let sum = semi_minor + semi_major;
    let h = if sum > 1.0e-7 {
        ((semi_minor - semi_major) / sum).powi(2)
    } else {
        0.0
    };
    std::f64::consts::PI * sum * (1.0 + h / 4.0 + h * h / 64.0)
}
