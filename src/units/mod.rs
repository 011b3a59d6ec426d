//! Unit conversion and formatting module
//!
//! Handles imperial/metric conversion and dual-system display strings.

pub mod converter;
pub mod formatter;
pub mod system;

pub use converter::{
    bar_to_psi, celsius_to_fahrenheit, fahrenheit_to_celsius, feet_to_meters, gallons_to_liters,
    kg_to_lbs, km_to_miles, l_per_100km_to_mpg, lbft_to_nm, lbs_to_kg, liters_to_gallons,
    meters_to_feet, miles_to_km, mpg_to_l_per_100km, nm_to_lbft, psi_to_bar, round,
};
pub use formatter::{
    format_distance, format_fuel_economy, format_pressure, format_temperature, format_torque,
    format_volume, format_weight, NO_VALUE,
};
pub use system::{
    distance_unit, fuel_economy_unit, pressure_unit, temperature_unit, torque_unit, volume_unit,
    weight_unit, QuantityKind, UnitSystem,
};
