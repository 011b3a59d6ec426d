//! Unit system types and conversion constants
//!
//! Provides types for representing display unit systems, quantity kinds, and
//! the fixed conversion factors between canonical imperial storage and metric.

use serde::{Deserialize, Serialize};

/// Display unit system selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Gallons, miles, MPG, °F, PSI, lbs, lb-ft (canonical storage system)
    Imperial,
    /// Liters, kilometers, L/100km, °C, bar, kg, Nm
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "imperial" | "us" => Some(UnitSystem::Imperial),
            "metric" | "si" => Some(UnitSystem::Metric),
            _ => None,
        }
    }

    /// The opposite system, used for dual display
    pub fn other(&self) -> Self {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }
}

/// Physical kind of a measured quantity
///
/// Each kind is persisted in a single canonical imperial unit regardless of
/// the user's display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    /// Fuel volume, stored in gallons
    Volume,
    /// Odometer distance, stored in miles
    Distance,
    /// Fuel economy, stored in MPG
    FuelEconomy,
    /// Ambient/engine temperature, stored in °F
    Temperature,
    /// Tire pressure, stored in PSI
    Pressure,
    /// Vehicle or cargo weight, stored in lbs
    Weight,
    /// Fastener torque, stored in lb-ft
    Torque,
}

impl QuantityKind {
    /// Unit label for this kind in the given display system
    pub fn unit_label(&self, system: UnitSystem) -> &'static str {
        match (self, system) {
            (QuantityKind::Volume, UnitSystem::Imperial) => "gal",
            (QuantityKind::Volume, UnitSystem::Metric) => "L",
            (QuantityKind::Distance, UnitSystem::Imperial) => "mi",
            (QuantityKind::Distance, UnitSystem::Metric) => "km",
            (QuantityKind::FuelEconomy, UnitSystem::Imperial) => "MPG",
            (QuantityKind::FuelEconomy, UnitSystem::Metric) => "L/100km",
            (QuantityKind::Temperature, UnitSystem::Imperial) => "°F",
            (QuantityKind::Temperature, UnitSystem::Metric) => "°C",
            (QuantityKind::Pressure, UnitSystem::Imperial) => "PSI",
            (QuantityKind::Pressure, UnitSystem::Metric) => "bar",
            (QuantityKind::Weight, UnitSystem::Imperial) => "lbs",
            (QuantityKind::Weight, UnitSystem::Metric) => "kg",
            (QuantityKind::Torque, UnitSystem::Imperial) => "lb-ft",
            (QuantityKind::Torque, UnitSystem::Metric) => "Nm",
        }
    }

    /// Canonical storage unit label (always imperial)
    pub fn canonical_unit(&self) -> &'static str {
        self.unit_label(UnitSystem::Imperial)
    }

    /// Fixed rounding precision for converted values of this kind
    pub fn decimals(&self) -> u32 {
        match self {
            QuantityKind::Temperature | QuantityKind::FuelEconomy => 1,
            _ => 2,
        }
    }

    /// Whether formatted magnitudes of this kind take thousands grouping
    pub fn grouped(&self) -> bool {
        matches!(self, QuantityKind::Distance | QuantityKind::Weight)
    }
}

// ============================================================================
// Conversion Constants (imperial -> metric)
// ============================================================================

/// Liters per US gallon
pub const LITERS_PER_GALLON: f64 = 3.78541;
/// Kilometers per mile
pub const KM_PER_MILE: f64 = 1.60934;
/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Bar per PSI
pub const BAR_PER_PSI: f64 = 0.0689476;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Newton-meters per pound-foot
pub const NM_PER_LBFT: f64 = 1.35582;
/// Reciprocal pivot between MPG and L/100km
pub const FUEL_ECONOMY_PIVOT: f64 = 235.214;

// ============================================================================
// Unit Label Lookup
// ============================================================================

/// Volume unit label for the given system ("gal" / "L")
pub fn volume_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Volume.unit_label(system)
}

/// Distance unit label for the given system ("mi" / "km")
pub fn distance_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Distance.unit_label(system)
}

/// Fuel economy unit label for the given system ("MPG" / "L/100km")
pub fn fuel_economy_unit(system: UnitSystem) -> &'static str {
    QuantityKind::FuelEconomy.unit_label(system)
}

/// Temperature unit label for the given system ("°F" / "°C")
pub fn temperature_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Temperature.unit_label(system)
}

/// Pressure unit label for the given system ("PSI" / "bar")
pub fn pressure_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Pressure.unit_label(system)
}

/// Weight unit label for the given system ("lbs" / "kg")
pub fn weight_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Weight.unit_label(system)
}

/// Torque unit label for the given system ("lb-ft" / "Nm")
pub fn torque_unit(system: UnitSystem) -> &'static str {
    QuantityKind::Torque.unit_label(system)
}
