//! Surface Fire Behavior Core Library
//!
//! Rothermel surface fire spread as used by `BehavePlus`: fuelbed
//! intermediates, reaction intensity, wind and slope effects, the direction
//! and rate of maximum spread, fire ellipse shape, fireline intensity and
//! flame length. Also covers two fuel models sharing a cell, the
//! palmetto-gallberry and western aspen special fuels, and parallel batch
//! runs.
//!
//! ## Quick start
//!
//! Build a [`Surface`] over the standard [`FuelModels`] catalog, fill its
//! [`SurfaceInputs`] and call
//! [`Surface::do_surface_run_in_direction_of_max_spread`].

// Core types: units, catalog, inputs
pub mod core_types;

// Physics models
pub mod physics;

// Run entry points
pub mod batch;
pub mod surface;

pub use batch::run_batch;
pub use core_types::{FuelModelError, FuelModels, SurfaceInputs};
pub use physics::{FireEllipse, SpreadResult, TwoFuelModelsResult};
pub use surface::{calculate_surface_fire, Surface, SurfaceError, SurfaceFireResult};
