//! Unit conversion functions
//!
//! Pure conversions between canonical imperial storage units and their metric
//! counterparts. Every function takes `Option<f64>` and propagates `None` as
//! "no value"; nothing here validates physical plausibility - negative or
//! out-of-range magnitudes pass through the arithmetic unchanged.

use super::system::{
    BAR_PER_PSI, FUEL_ECONOMY_PIVOT, KG_PER_LB, KM_PER_MILE, LITERS_PER_GALLON, METERS_PER_FOOT,
    NM_PER_LBFT,
};

/// Round a value to a fixed number of decimal places
///
/// `None` passes through unchanged. All converters route their results
/// through this helper so forward and inverse conversions share identical
/// rounding behavior.
pub fn round(value: Option<f64>, decimals: u32) -> Option<f64> {
    let factor = 10f64.powi(decimals as i32);
    value.map(|v| (v * factor).round() / factor)
}

// ============================================================================
// Volume (gallons <-> liters)
// ============================================================================

/// Convert US gallons to liters, rounded to 2 decimals
pub fn gallons_to_liters(gallons: Option<f64>) -> Option<f64> {
    round(gallons.map(|g| g * LITERS_PER_GALLON), 2)
}

/// Convert liters to US gallons, rounded to 2 decimals
pub fn liters_to_gallons(liters: Option<f64>) -> Option<f64> {
    round(liters.map(|l| l / LITERS_PER_GALLON), 2)
}

// ============================================================================
// Distance (miles <-> kilometers)
// ============================================================================

/// Convert miles to kilometers, rounded to 2 decimals
pub fn miles_to_km(miles: Option<f64>) -> Option<f64> {
    round(miles.map(|m| m * KM_PER_MILE), 2)
}

/// Convert kilometers to miles, rounded to 2 decimals
pub fn km_to_miles(km: Option<f64>) -> Option<f64> {
    round(km.map(|k| k / KM_PER_MILE), 2)
}

// ============================================================================
// Dimension (feet <-> meters)
// ============================================================================

/// Convert feet to meters, rounded to 2 decimals
pub fn feet_to_meters(feet: Option<f64>) -> Option<f64> {
    round(feet.map(|f| f * METERS_PER_FOOT), 2)
}

/// Convert meters to feet, rounded to 2 decimals
pub fn meters_to_feet(meters: Option<f64>) -> Option<f64> {
    round(meters.map(|m| m / METERS_PER_FOOT), 2)
}

// ============================================================================
// Pressure (PSI <-> bar)
// ============================================================================

/// Convert PSI to bar, rounded to 2 decimals
pub fn psi_to_bar(psi: Option<f64>) -> Option<f64> {
    round(psi.map(|p| p * BAR_PER_PSI), 2)
}

/// Convert bar to PSI, rounded to 2 decimals
pub fn bar_to_psi(bar: Option<f64>) -> Option<f64> {
    round(bar.map(|b| b / BAR_PER_PSI), 2)
}

// ============================================================================
// Weight (pounds <-> kilograms)
// ============================================================================

/// Convert pounds to kilograms, rounded to 2 decimals
pub fn lbs_to_kg(lbs: Option<f64>) -> Option<f64> {
    round(lbs.map(|l| l * KG_PER_LB), 2)
}

/// Convert kilograms to pounds, rounded to 2 decimals
pub fn kg_to_lbs(kg: Option<f64>) -> Option<f64> {
    round(kg.map(|k| k / KG_PER_LB), 2)
}

// ============================================================================
// Torque (lb-ft <-> Nm)
// ============================================================================

/// Convert pound-feet to newton-meters, rounded to 2 decimals
pub fn lbft_to_nm(lbft: Option<f64>) -> Option<f64> {
    round(lbft.map(|l| l * NM_PER_LBFT), 2)
}

/// Convert newton-meters to pound-feet, rounded to 2 decimals
pub fn nm_to_lbft(nm: Option<f64>) -> Option<f64> {
    round(nm.map(|n| n / NM_PER_LBFT), 2)
}

// ============================================================================
// Fuel Economy (MPG <-> L/100km, reciprocal)
// ============================================================================

/// Convert MPG to L/100km, rounded to 1 decimal
///
/// Returns `None` for an input of 0: a zero reading carries no information
/// in either system, so it is treated as absence of value rather than a
/// division error.
pub fn mpg_to_l_per_100km(mpg: Option<f64>) -> Option<f64> {
    round(
        mpg.filter(|&m| m != 0.0).map(|m| FUEL_ECONOMY_PIVOT / m),
        1,
    )
}

/// Convert L/100km to MPG, rounded to 1 decimal
///
/// Returns `None` for an input of 0, same as [`mpg_to_l_per_100km`].
pub fn l_per_100km_to_mpg(l_per_100km: Option<f64>) -> Option<f64> {
    round(
        l_per_100km
            .filter(|&l| l != 0.0)
            .map(|l| FUEL_ECONOMY_PIVOT / l),
        1,
    )
}

// ============================================================================
// Temperature (Fahrenheit <-> Celsius, affine)
// ============================================================================

/// Convert Fahrenheit to Celsius, rounded to 1 decimal
pub fn fahrenheit_to_celsius(fahrenheit: Option<f64>) -> Option<f64> {
    round(fahrenheit.map(|f| (f - 32.0) * 5.0 / 9.0), 1)
}

/// Convert Celsius to Fahrenheit, rounded to 1 decimal
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    round(celsius.map(|c| c * 9.0 / 5.0 + 32.0), 1)
}
