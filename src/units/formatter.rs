//! Display formatting for canonical-unit values
//!
//! Renders a canonical imperial value as a human-readable string in the
//! requested display system, optionally showing both systems side by side.
//! Missing values render as the `"N/A"` sentinel instead of erroring.

use super::converter;
use super::system::{QuantityKind, UnitSystem};

/// Sentinel rendered for a missing value
pub const NO_VALUE: &str = "N/A";

/// Format a value with fixed decimals, trailing fractional zeros trimmed and
/// optional en-US thousands grouping of the integer digits
fn format_magnitude(value: f64, decimals: u32, grouped: bool) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;

    let mut text = format!("{:.*}", decimals as usize, rounded);
    if text.contains('.') {
        text = text
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    if text == "-0" {
        text = "0".to_string();
    }

    if grouped {
        group_thousands(&text)
    } else {
        text
    }
}

/// Insert commas every three integer digits ("12000.5" -> "12,000.5")
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Render one side of the display: the canonical value expressed in `system`
/// with its unit label appended
fn render_in_system(
    canonical: Option<f64>,
    system: UnitSystem,
    kind: QuantityKind,
    to_metric: fn(Option<f64>) -> Option<f64>,
) -> String {
    // Canonical storage is imperial; metric display converts first
    let display = match system {
        UnitSystem::Imperial => converter::round(canonical, kind.decimals()),
        UnitSystem::Metric => to_metric(canonical),
    };

    match display {
        Some(v) => format!(
            "{} {}",
            format_magnitude(v, kind.decimals(), kind.grouped()),
            kind.unit_label(system)
        ),
        None => NO_VALUE.to_string(),
    }
}

fn format_quantity(
    value: Option<f64>,
    system: UnitSystem,
    show_both: bool,
    kind: QuantityKind,
    to_metric: fn(Option<f64>) -> Option<f64>,
) -> String {
    if value.is_none() {
        return NO_VALUE.to_string();
    }

    let primary = render_in_system(value, system, kind, to_metric);
    if show_both {
        let secondary = render_in_system(value, system.other(), kind, to_metric);
        format!("{} ({})", primary, secondary)
    } else {
        primary
    }
}

/// Format a canonical gallon value ("10 gal", "37.85 L")
pub fn format_volume(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Volume,
        converter::gallons_to_liters,
    )
}

/// Format a canonical mile value with thousands grouping ("12,000 mi")
pub fn format_distance(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Distance,
        converter::miles_to_km,
    )
}

/// Format a canonical MPG value ("25 MPG", "9.4 L/100km")
///
/// A canonical reading of 0 MPG has no metric equivalent, so any side that
/// requires the reciprocal conversion renders as `"N/A"`.
pub fn format_fuel_economy(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::FuelEconomy,
        converter::mpg_to_l_per_100km,
    )
}

/// Format a canonical Fahrenheit value ("72 °F", "22.2 °C")
pub fn format_temperature(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Temperature,
        converter::fahrenheit_to_celsius,
    )
}

/// Format a canonical PSI value ("32 PSI", "2.21 bar")
pub fn format_pressure(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Pressure,
        converter::psi_to_bar,
    )
}

/// Format a canonical pound value with thousands grouping ("3,500 lbs")
pub fn format_weight(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Weight,
        converter::lbs_to_kg,
    )
}

/// Format a canonical lb-ft value ("80 lb-ft", "108.47 Nm")
pub fn format_torque(value: Option<f64>, system: UnitSystem, show_both: bool) -> String {
    format_quantity(
        value,
        system,
        show_both,
        QuantityKind::Torque,
        converter::lbft_to_nm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPERIAL: UnitSystem = UnitSystem::Imperial;
    const METRIC: UnitSystem = UnitSystem::Metric;

    #[test]
    fn test_missing_value_sentinel() {
        assert_eq!(format_volume(None, METRIC, false), "N/A");
        assert_eq!(format_distance(None, IMPERIAL, true), "N/A");
        assert_eq!(format_fuel_economy(None, METRIC, true), "N/A");
        assert_eq!(format_temperature(None, IMPERIAL, false), "N/A");
        assert_eq!(format_pressure(None, METRIC, false), "N/A");
        assert_eq!(format_weight(None, IMPERIAL, false), "N/A");
        assert_eq!(format_torque(None, METRIC, false), "N/A");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(Some(10.0), IMPERIAL, false), "10 gal");
        assert_eq!(format_volume(Some(10.0), METRIC, false), "37.85 L");
        assert_eq!(
            format_volume(Some(10.0), IMPERIAL, true),
            "10 gal (37.85 L)"
        );
        assert_eq!(format_volume(Some(10.0), METRIC, true), "37.85 L (10 gal)");
    }

    #[test]
    fn test_format_distance_show_both() {
        // Parenthetical must match the converter at the same precision
        let text = format_distance(Some(100.0), IMPERIAL, true);
        assert_eq!(text, "100 mi (160.93 km)");
        assert!(text.contains("100"));
        assert!(text.contains("(160.93 km)"));
    }

    #[test]
    fn test_format_distance_grouping() {
        assert_eq!(format_distance(Some(12000.0), IMPERIAL, false), "12,000 mi");
        assert_eq!(
            format_distance(Some(12000.0), METRIC, false),
            "19,312.08 km"
        );
    }

    #[test]
    fn test_format_weight_grouping() {
        assert_eq!(
            format_weight(Some(3500.0), IMPERIAL, true),
            "3,500 lbs (1,587.57 kg)"
        );
    }

    #[test]
    fn test_format_fuel_economy() {
        assert_eq!(format_fuel_economy(Some(25.0), IMPERIAL, false), "25 MPG");
        assert_eq!(
            format_fuel_economy(Some(25.0), METRIC, false),
            "9.4 L/100km"
        );
        assert_eq!(
            format_fuel_economy(Some(25.0), IMPERIAL, true),
            "25 MPG (9.4 L/100km)"
        );
    }

    #[test]
    fn test_format_fuel_economy_zero() {
        // 0 MPG cannot be expressed in L/100km
        assert_eq!(format_fuel_economy(Some(0.0), METRIC, false), "N/A");
        assert_eq!(
            format_fuel_economy(Some(0.0), IMPERIAL, true),
            "0 MPG (N/A)"
        );
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(Some(32.0), IMPERIAL, false), "32 °F");
        assert_eq!(format_temperature(Some(32.0), METRIC, false), "0 °C");
        assert_eq!(
            format_temperature(Some(72.5), IMPERIAL, true),
            "72.5 °F (22.5 °C)"
        );
    }

    #[test]
    fn test_format_pressure_and_torque() {
        assert_eq!(format_pressure(Some(32.0), METRIC, false), "2.21 bar");
        assert_eq!(
            format_pressure(Some(32.0), IMPERIAL, true),
            "32 PSI (2.21 bar)"
        );
        assert_eq!(format_torque(Some(80.0), METRIC, false), "108.47 Nm");
        assert_eq!(
            format_torque(Some(80.0), IMPERIAL, true),
            "80 lb-ft (108.47 Nm)"
        );
    }

    #[test]
    fn test_format_magnitude_trims_zeros() {
        assert_eq!(format_magnitude(10.0, 2, false), "10");
        assert_eq!(format_magnitude(10.5, 2, false), "10.5");
        assert_eq!(format_magnitude(10.55, 2, false), "10.55");
        assert_eq!(format_magnitude(0.0, 1, false), "0");
        assert_eq!(format_magnitude(-0.04, 1, false), "0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("-12000"), "-12,000");
    }
}
