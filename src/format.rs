//! Short human-readable distance labels for turn displays.

use crate::config::{GeodesyConfig, Units};

/// Render a distance in whole metres as a label of at most 9 characters.
///
/// Metric: metres below 1 km (with a trailing space to keep the width), then
/// kilometres with one decimal below 100 km. Imperial: feet below ~1000 ft,
/// then miles with one decimal below 100 mi.
pub fn format_distance(meters: u32, units: Units) -> String {
    let m = u64::from(meters);
    match units {
        Units::Metric => {
            if m < 1000 {
                format!("{m}m ")
            } else {
                let hectometres = m / 100;
                if hectometres < 1000 {
                    format!("{}.{}km", hectometres / 10, hectometres % 10)
                } else {
                    format!("{}km", hectometres / 10)
                }
            }
        }
        Units::Imperial => {
            if m < 305 {
                format!("{}ft", m * 10_000 / 3048)
            } else {
                let decimiles = m * 1000 / 160_934;
                if decimiles < 1000 {
                    format!("{}.{}mi", decimiles / 10, decimiles % 10)
                } else {
                    format!("{}mi", decimiles / 10)
                }
            }
        }
    }
}

/// [`format_distance`] in the configured display units.
pub fn format_distance_with(meters: u32, config: &GeodesyConfig) -> String {
    format_distance(meters, config.units)
}
