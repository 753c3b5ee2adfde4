//! Application constants for the generation statistics engine
//!
//! This module contains dataset column names, the category label map,
//! the driver category lists, and unit conversion factors used throughout
//! the gridstat application.

use chrono::NaiveDateTime;

// =============================================================================
// Dataset Column Names
// =============================================================================

/// Settlement timestamp column in the generation dataset
pub const TIMESTAMP_COL: &str = "timestamp";

/// Generation category column (BMRS power type)
pub const CATEGORY_COL: &str = "category";

/// Measured output column, average MW over one settlement period
pub const QUANTITY_COL: &str = "quantity";

// =============================================================================
// Unit Conversion
// =============================================================================

/// Hours represented by one sample - data is summarised in 30 min segments
pub const SAMPLE_INTERVAL_HOURS: f64 = 0.5;

/// MWh to GWh conversion factor
pub const MWH_TO_GWH: f64 = 0.001;

// =============================================================================
// Category Labels
// =============================================================================

/// Raw BMRS power type names mapped to their display names
pub const CATEGORY_LABEL_MAP: &[(&str, &str)] = &[
    ("Hydro Run-of-river and poundage", "Hydro"),
    ("Hydro Pumped Storage", "Hydro Storage"),
    ("Fossil Oil", "Oil"),
    ("Fossil Gas", "Gas"),
    ("Fossil Hard coal", "Coal"),
];

/// Full set of categories reported in a summary, in presentation order
pub const ALL_CATEGORIES: &[&str] = &[
    "Solar",
    "Wind Offshore",
    "Wind Onshore",
    "Hydro",
    "Hydro Storage",
    "Other",
    "Nuclear",
    "Oil",
    "Gas",
    "Coal",
    "Biomass",
];

/// Renewable subset of the reported categories, in presentation order
pub const RENEWABLE_CATEGORIES: &[&str] = &[
    "Solar",
    "Wind Offshore",
    "Wind Onshore",
    "Hydro",
    "Hydro Storage",
    "Biomass",
];

/// Summary table column labels, in presentation order
pub const SUMMARY_COLUMNS: &[&str] = &["Min", "Mean", "Max", "Sum", "% Total"];

// =============================================================================
// Reporting Window
// =============================================================================

/// Lower bound of the fixed reporting window (exclusive)
pub fn reporting_window_start() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2020, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Upper bound of the fixed reporting window (exclusive)
pub fn reporting_window_end() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Look up the display name for a raw category label
///
/// Unmapped labels pass through unchanged.
pub fn display_label(raw: &str) -> &str {
    CATEGORY_LABEL_MAP
        .iter()
        .find(|(old, _)| *old == raw)
        .map(|(_, new)| *new)
        .unwrap_or(raw)
}
