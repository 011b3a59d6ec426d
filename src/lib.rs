//! MotorLog Units Library
//!
//! Unit conversion and display formatting for vehicle maintenance tracking.
//! Values are stored in canonical imperial units (gallons, miles, MPG, °F,
//! PSI, lbs, lb-ft) and converted to the user's display system only at
//! presentation time.

pub mod parse;
pub mod prefs;
pub mod units;
