//! Core types: units, fuel model catalog and run inputs

pub mod fuel_model;
pub mod surface_inputs;
pub mod units;

pub use fuel_model::{FuelModelError, FuelModelRecord, FuelModels, MAX_FUEL_MODEL_NUMBER};
pub use surface_inputs::*;
pub use units::*;
